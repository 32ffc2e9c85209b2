use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeadlineError {
    #[error("service_date must be in YYYY-MM-DD format")]
    InvalidDateFormat { input: String },
}

pub type Result<T> = std::result::Result<T, DeadlineError>;
