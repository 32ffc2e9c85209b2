use crate::domain::model::DeadlineSet;
use chrono::{Days, NaiveDate};

/// Days allowed to respond with a Defence or Admission after service.
pub const RESPOND_DAYS: u64 = 14;

/// Days allowed for a Defence once an Acknowledgment of Service is filed.
pub const EXTENDED_DAYS: u64 = 28;

/// Calculate the key court deadlines from the service date.
///
/// Pure calendar-day addition; month and year rollover and leap years are
/// handled by chrono.
pub fn calculate_deadlines(service_date: NaiveDate) -> DeadlineSet {
    let respond_deadline = service_date + Days::new(RESPOND_DAYS);
    let extended_deadline = service_date + Days::new(EXTENDED_DAYS);

    // Default judgment becomes available the day after a deadline passes.
    DeadlineSet {
        respond_deadline,
        extended_deadline,
        default_no_aos: respond_deadline + Days::new(1),
        default_with_aos: extended_deadline + Days::new(1),
    }
}
