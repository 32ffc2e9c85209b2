use crate::domain::model::DeadlineSet;
use chrono::NaiveDate;

/// Return a date formatted as "Weekday, DD Month YYYY".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %d %B %Y").to_string()
}

/// Render the full deadline report printed by the CLI.
pub fn render_report(service_date: NaiveDate, deadlines: &DeadlineSet) -> String {
    let respond = format_date(deadlines.respond_deadline);

    format!(
        "Claim served: {served}\n\
         If no Acknowledgment of Service is filed, deadline to respond (Defence or Admission): {respond}\n\
         If Acknowledgment of Service is filed by {respond} extended Defence deadline (28 days from service): {extended}\n\
         \n\
         Default Judgment Eligibility\n\
         If no response is filed by {respond}, the claimant may request default judgment on or after {no_aos}.\n\
         If Acknowledgment was filed, default judgment may be requested on or after {with_aos}, if no Defence was filed.\n",
        served = format_date(service_date),
        respond = respond,
        extended = format_date(deadlines.extended_deadline),
        no_aos = format_date(deadlines.default_no_aos),
        with_aos = format_date(deadlines.default_with_aos),
    )
}
