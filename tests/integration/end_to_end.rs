// tests/integration/end_to_end.rs
use std::fs;

use sales_summary::run_in;
use sales_summary_shared_kernel::StoreId;

#[path = "../common/mod.rs"]
mod common;
use common::StoreWorkspace;

#[test]
fn summarises_stores_in_order() {
    let ws = StoreWorkspace::new();
    ws.store_file("202/c.json", r#"{"Total": 200}"#);
    ws.store_file("201/a.json", r#"{"Total": 100.5}"#);
    ws.store_file("201/b.json", r#"{"Total": 49.5}"#);

    let output = run_in(ws.path()).expect("run succeeds");

    assert_eq!(output.report_path, ws.summary_path());
    assert_eq!(
        ws.summary_lines(),
        vec![
            "Sales Summary",
            "----------------------------",
            " Total Sales: $350.00",
            "",
            " Details:",
            "  201: $150.00",
            "  202: $200.00",
        ]
    );
}

#[test]
fn written_file_matches_returned_report() {
    let ws = StoreWorkspace::new();
    ws.store_file("201/sales.json", r#"{"Total": 1234.5}"#);

    let output = run_in(ws.path()).unwrap();
    assert_eq!(ws.read_summary(), output.report.as_str());
    assert!(ws.read_summary().contains("  201: $1,234.50"));
}

#[test]
fn malformed_file_counts_as_zero() {
    let ws = StoreWorkspace::new();
    ws.store_file("203/bad.json", r#""not an object""#);
    ws.store_file("204/sales.json", r#"{"Total": 10}"#);

    let output = run_in(ws.path()).expect("malformed input is not fatal");

    assert_eq!(output.aggregate.stores().get(&StoreId::from("203")), Some(0.0));
    let lines = ws.summary_lines();
    assert!(lines.contains(&" Total Sales: $10.00".to_string()));
    assert!(lines.contains(&"  203: $0.00".to_string()));
    assert!(lines.contains(&"  204: $10.00".to_string()));
}

#[test]
fn missing_stores_directory_yields_empty_report() {
    let ws = StoreWorkspace::new();

    run_in(ws.path()).expect("missing input root is not an error");

    assert_eq!(
        ws.read_summary().lines().collect::<Vec<_>>(),
        vec!["Sales Summary", "----------------------------", " Total Sales: $0.00", "", " Details:"]
    );
}

#[test]
fn store_ids_merge_and_sort_ignoring_case() {
    let ws = StoreWorkspace::new();
    ws.store_file("north/a.json", r#"{"Total": 1}"#);
    ws.store_file("archive/NORTH/b.json", r#"{"Total": 2}"#);
    ws.store_file("East/c.json", r#"{"Total": 4}"#);

    let output = run_in(ws.path()).unwrap();

    assert_eq!(output.aggregate.store_count(), 2);
    let details: Vec<String> = ws.summary_lines().into_iter().skip(5).collect();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0], "  East: $4.00");
    assert!(details[1].eq_ignore_ascii_case("  north: $3.00"));
}

#[test]
fn non_json_files_are_ignored() {
    let ws = StoreWorkspace::new();
    ws.store_file("201/sales.json", r#"{"Total": 5}"#);
    ws.store_file("201/readme.txt", r#"{"Total": 500}"#);

    let output = run_in(ws.path()).unwrap();
    assert_eq!(output.aggregate.record_count(), 1);
    assert_eq!(output.aggregate.grand_total().amount(), 5.0);
}

#[test]
fn previous_summary_is_overwritten_and_siblings_kept() {
    let ws = StoreWorkspace::new();
    ws.write_file("salesTotalDir/salesSummary.txt", &"stale\n".repeat(100));
    ws.write_file("salesTotalDir/notes.txt", "keep me");
    ws.store_file("201/sales.json", r#"{"Total": 1}"#);

    run_in(ws.path()).unwrap();

    assert!(!ws.read_summary().contains("stale"));
    assert_eq!(fs::read_to_string(ws.path().join("salesTotalDir/notes.txt")).unwrap(), "keep me");
}

#[test]
fn unwritable_output_location_is_fatal() {
    let ws = StoreWorkspace::new();
    ws.write_file("salesTotalDir", "a file where the output directory should be");
    ws.store_file("201/sales.json", r#"{"Total": 1}"#);

    let err = run_in(ws.path()).unwrap_err();
    assert!(format!("{err:#}").contains("salesSummary.txt"));
}

#[cfg(unix)]
#[test]
fn unreadable_store_directory_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let ws = StoreWorkspace::new();
    ws.store_file("201/a.json", r#"{"Total": 100}"#);
    ws.store_file("202/b.json", r#"{"Total": 200}"#);
    let locked = ws.path().join("stores").join("202");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores mode 000; the run would legitimately see both stores
    let readable = fs::read_dir(&locked).is_ok();
    let result = run_in(ws.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    if readable {
        return;
    }

    let err = result.expect_err("a partial total must not be reported");
    let message = format!("{err:#}");
    assert!(message.contains("Failed to discover sales files"), "{message}");
    assert!(!ws.summary_path().exists());
}
