use crate::utils::error::{DeadlineError, Result};
use chrono::NaiveDate;

/// Parse a service date given on the command line.
///
/// Accepts strict `YYYY-MM-DD` input; anything else, including strings that
/// look right but name an impossible calendar date, is rejected. The year
/// must be exactly four digits: chrono's `%Y` would otherwise accept signed
/// or oversized years, and a year beyond 9999 could push the derived
/// deadlines past the supported date range.
pub fn parse_service_date(input: &str) -> Result<NaiveDate> {
    if !has_four_digit_year(input) {
        return Err(DeadlineError::InvalidDateFormat {
            input: input.to_string(),
        });
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| DeadlineError::InvalidDateFormat {
        input: input.to_string(),
    })
}

fn has_four_digit_year(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-'
}
