use std::fs;

use crate::purchase::{
    form::PurchaseForm,
    row::{PurchaseRow, RowUpdate},
};

use super::*;

fn snapshot() -> PurchaseSnapshot {
    let mut form = PurchaseForm::new("2024-05-01");
    form.update_row(1, RowUpdate::Brand("POCO F5".to_string()));
    form.update_row(1, RowUpdate::Spec("8/256 GB".to_string()));
    form.update_row(1, RowUpdate::Color("Graphite".to_string()));
    form.update_row(1, RowUpdate::Price(4_000_000));
    form.snapshot()
}

#[test]
fn test_log_sink_accepts_snapshot() {
    assert!(LogSink.emit(&snapshot()).is_ok());
}

#[test]
fn test_ledger_sink_appends_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.jsonl");
    let sink = LedgerSink::new(&path);

    sink.emit(&snapshot()).unwrap();
    sink.emit(&snapshot()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(parsed["date"], "2024-05-01");
    assert_eq!(parsed["grandTotal"], 4_000_000);

    let rows: Vec<PurchaseRow> =
        serde_json::from_value(parsed["rows"].clone()).unwrap();
    assert_eq!(rows, snapshot().rows);
}

#[test]
fn test_ledger_sink_reports_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("ledger.jsonl");
    let sink = LedgerSink::new(path);

    let err = sink.emit(&snapshot()).unwrap_err();

    assert!(err.to_string().starts_with("failed to open ledger"));
}
