pub mod deadlines;
pub mod report;
