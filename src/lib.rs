pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{deadlines::calculate_deadlines, report::format_date, report::render_report};
pub use crate::domain::model::DeadlineSet;
pub use crate::utils::error::{DeadlineError, Result};
