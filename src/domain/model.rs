use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four procedural deadlines derived from the date a claim was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineSet {
    /// Deadline to file a Defence or Admission when no Acknowledgment of
    /// Service is filed (14 days from service).
    pub respond_deadline: NaiveDate,

    /// Extended Defence deadline once an Acknowledgment of Service has been
    /// filed (28 days from service).
    pub extended_deadline: NaiveDate,

    /// Earliest date the claimant may request default judgment if no
    /// response was filed at all.
    pub default_no_aos: NaiveDate,

    /// Earliest date the claimant may request default judgment if an
    /// Acknowledgment was filed but no Defence followed.
    pub default_with_aos: NaiveDate,
}
