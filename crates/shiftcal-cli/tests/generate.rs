//! End-to-end tests for the shiftcal binary
//!
//! Every input is passed as a flag so the interactive prompts never run;
//! prompt-driven input cannot be exercised without a TTY.

use std::process::Command;

fn shiftcal() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shiftcal"))
}

#[test]
fn generates_calendar_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("calendar.xlsx");

    let status = shiftcal()
        .args(["--start-date", "2024-01-01", "--work-days", "5", "--rest-days", "2"])
        .arg("--output")
        .arg(&output)
        .status()
        .expect("failed to execute shiftcal");

    assert!(status.success());
    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn rejects_zero_work_days() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("calendar.xlsx");

    let status = shiftcal()
        .args(["--start-date", "2024-01-01", "--work-days", "0", "--rest-days", "2"])
        .arg("--output")
        .arg(&output)
        .status()
        .expect("failed to execute shiftcal");

    assert!(!status.success());
    assert!(!output.exists(), "no file may be produced on error");
}

#[test]
fn rejects_malformed_date() {
    let status = shiftcal()
        .args(["--start-date", "01.02.2024", "--work-days", "5", "--rest-days", "2"])
        .status()
        .expect("failed to execute shiftcal");

    assert!(!status.success());
}
