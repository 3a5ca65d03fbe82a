// bucketgate/tests/cli_integration_tests.rs
use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test; // For integrating with `env_logger` in tests

fn bucketgate() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("bucketgate"));
    cmd.env_remove("RUST_LOG").env_remove("BUCKETGATE_CONFIG");
    cmd
}

#[test]
fn test_default_run_admits_ten_then_rejects() {
    bucketgate()
        .args(["--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Request 1 processed successfully."))
        .stdout(predicate::str::contains("Request 10 processed successfully."))
        .stdout(predicate::str::contains("Request 11 rejected due to rate limiting."))
        .stdout(predicate::str::contains("Request 15 rejected due to rate limiting."))
        .stderr(predicate::str::contains("Admitted"));
}

#[test]
fn test_capacity_and_request_count_flags() {
    bucketgate()
        .args(["--delay-ms", "0", "--capacity", "2", "--requests", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Request 2 processed successfully."))
        .stdout(predicate::str::contains("Request 3 rejected due to rate limiting."))
        .stdout(predicate::str::contains("Request 4").not());
}

#[test]
fn test_request_larger_than_capacity_is_rejected() {
    bucketgate()
        .args(["--delay-ms", "0", "--requests", "1", "--tokens", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Request 1 rejected due to rate limiting."));
}

#[test]
fn test_zero_capacity_fails() {
    bucketgate()
        .args(["--capacity", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bucket capacity must be a positive integer"));
}

#[test]
fn test_negative_refill_rate_fails() {
    bucketgate()
        .args(["--refill-rate=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refill rate must be a finite, positive number"));
}

#[test]
fn test_config_file_is_used() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"capacity: 3\nrefill_rate_per_second: 1.0\n")?;

    bucketgate()
        .arg("--config")
        .arg(file.path())
        .args(["--delay-ms", "0", "--requests", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Request 3 processed successfully."))
        .stdout(predicate::str::contains("Request 4 rejected due to rate limiting."));
    Ok(())
}

#[test]
fn test_invalid_config_file_fails() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"capacity: 0\n")?;

    bucketgate()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid limiter configuration"));
    Ok(())
}

#[test]
fn test_no_summary_suppresses_table() {
    bucketgate()
        .args(["--delay-ms", "0", "--requests", "1", "--no-summary"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Admitted").not());
}

#[test]
fn test_quiet_only_silences_logging() {
    bucketgate()
        .args(["-q", "--delay-ms", "0", "--requests", "2", "--capacity", "1"])
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("Request 2 rejected due to rate limiting."))
        .stderr(predicate::str::contains("Admitted"))
        .stderr(predicate::str::contains("Rejected request").not());
}

#[test]
fn test_quiet_and_debug_conflict() {
    bucketgate().args(["-q", "-d"]).assert().failure();
}
