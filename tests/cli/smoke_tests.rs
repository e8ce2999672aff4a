use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::StoreWorkspace;

fn sales_summary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sales_summary"))
}

#[test]
fn prints_single_completion_line() {
    let ws = StoreWorkspace::new();
    ws.store_file("201/sales.json", r#"{"Total": 22385.32}"#);

    let run = sales_summary().current_dir(ws.path()).assert().success();

    // The working directory may be reported through a symlink-resolved path.
    let stdout = String::from_utf8(run.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Sales summary created at: "));
    assert!(stdout.trim_end().ends_with("salesSummary.txt"));

    assert!(ws.read_summary().contains(" Total Sales: $22,385.32"));
}

#[test]
fn runs_without_stores_directory() {
    let ws = StoreWorkspace::new();

    sales_summary()
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales summary created at:"));

    assert!(ws.read_summary().contains(" Total Sales: $0.00"));
}

#[test]
fn fails_when_output_cannot_be_created() {
    let ws = StoreWorkspace::new();
    fs::write(ws.path().join("salesTotalDir"), "blocking file").unwrap();

    sales_summary()
        .current_dir(ws.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("salesTotalDir"));
}
