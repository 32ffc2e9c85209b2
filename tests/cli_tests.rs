use std::process::{Command, Output};

fn run_cli(service_date: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_claim-deadlines"))
        .arg(service_date)
        .output()
        .expect("failed to spawn claim-deadlines binary")
}

#[test]
fn test_cli_prints_report_and_exits_zero() {
    let output = run_cli("2024-01-01");

    assert_eq!(output.status.code(), Some(0));

    let expected = "\
Claim served: Monday, 01 January 2024
If no Acknowledgment of Service is filed, deadline to respond (Defence or Admission): Monday, 15 January 2024
If Acknowledgment of Service is filed by Monday, 15 January 2024 extended Defence deadline (28 days from service): Monday, 29 January 2024

Default Judgment Eligibility
If no response is filed by Monday, 15 January 2024, the claimant may request default judgment on or after Tuesday, 16 January 2024.
If Acknowledgment was filed, default judgment may be requested on or after Tuesday, 30 January 2024, if no Defence was filed.
";

    // Logs go to stderr, so stdout is exactly the report.
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn test_cli_rejects_impossible_calendar_date() {
    let output = run_cli("2024-02-30");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "no partial report on stdout");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("service_date must be in YYYY-MM-DD format"));
}

#[test]
fn test_cli_rejects_garbage_input() {
    let output = run_cli("not-a-date");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("service_date must be in YYYY-MM-DD format"));
}

#[test]
fn test_cli_rejects_oversized_year_as_usage_error() {
    // Must be the usual usage error, not a crash from out-of-range
    // date arithmetic.
    let output = run_cli("+262142-12-31");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("service_date must be in YYYY-MM-DD format"));
}
