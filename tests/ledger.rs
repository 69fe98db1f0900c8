//! 기록/통계 파일 저장과 내보내기 테스트.
use std::fs;

use advanced_calculator::ledger::{
    export_history, EntryKind, ExportFormat, History, HistoryEntry, LedgerPaths, Statistics,
    DEFAULT_HISTORY_LIMIT,
};
use tempfile::tempdir;

fn entry(i: usize) -> HistoryEntry {
    HistoryEntry::with_timestamp(
        EntryKind::Calculation,
        format!("{i}+0"),
        i.to_string(),
        "2024-01-02 03:04:05",
    )
}

#[test]
fn save_keeps_only_most_recent_entries() {
    let dir = tempdir().unwrap();
    let paths = LedgerPaths::in_dir(dir.path());

    let mut history = History::new();
    for i in 0..150 {
        history.record(entry(i));
    }
    history.save(&paths.history, DEFAULT_HISTORY_LIMIT).unwrap();
    assert_eq!(history.len(), 150, "in-memory history is not pruned");

    let loaded = History::load(&paths.history);
    assert_eq!(loaded.len(), 100);
    assert_eq!(loaded.entries()[0].expression(), "50+0");
    assert_eq!(loaded.entries()[99].expression(), "149+0");
}

#[test]
fn history_json_uses_expected_field_names() {
    let dir = tempdir().unwrap();
    let paths = LedgerPaths::in_dir(dir.path());

    let mut history = History::new();
    history.record(HistoryEntry::with_timestamp(
        EntryKind::Conversion,
        "Convert: 1 km to m",
        "1000.0000 m",
        "2024-05-06 07:08:09",
    ));
    history.save(&paths.history, 100).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.history).unwrap()).unwrap();
    let first = &raw.as_array().unwrap()[0];
    assert_eq!(first["expression"], "Convert: 1 km to m");
    assert_eq!(first["result"], "1000.0000 m");
    assert_eq!(first["timestamp"], "2024-05-06 07:08:09");
    assert_eq!(first["type"], "conversion");
}

#[test]
fn entries_without_type_default_to_calculation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calculator_history.json");
    fs::write(
        &path,
        r#"[{"expression": "2+2", "result": "4", "timestamp": "2024-01-01 00:00:00"}]"#,
    )
    .unwrap();
    let history = History::load(&path);
    assert_eq!(history.len(), 1);
    assert_eq!(history.entries()[0].kind(), EntryKind::Calculation);
}

#[test]
fn missing_or_corrupt_files_start_empty() {
    let dir = tempdir().unwrap();
    let paths = LedgerPaths::in_dir(dir.path());
    assert!(History::load(&paths.history).is_empty());
    assert_eq!(Statistics::load(&paths.statistics), Statistics::default());

    fs::write(&paths.history, "{ not json").unwrap();
    fs::write(&paths.statistics, "[]").unwrap();
    assert!(History::load(&paths.history).is_empty());
    assert_eq!(Statistics::load(&paths.statistics).calculations(), 0);
}

#[test]
fn recent_is_newest_first() {
    let mut history = History::new();
    for i in 0..5 {
        history.record(entry(i));
    }
    let recent: Vec<_> = history.recent(2).map(|e| e.result().to_string()).collect();
    assert_eq!(recent, ["4", "3"]);
}

#[test]
fn entry_display() {
    let e = entry(7);
    assert_eq!(e.to_string(), "[CALCULATION] 2024-01-02 03:04:05\n7+0 = 7");
}

#[test]
fn new_entries_get_local_timestamp() {
    let e = HistoryEntry::calculation("1+1", "2");
    assert!(chrono::NaiveDateTime::parse_from_str(e.timestamp(), "%Y-%m-%d %H:%M:%S").is_ok());
}

#[test]
fn statistics_round_trip_and_defaults() {
    let dir = tempdir().unwrap();
    let paths = LedgerPaths::in_dir(dir.path());

    let mut stats = Statistics::default();
    stats.record_calculation();
    stats.record_calculation();
    stats.record_conversion();
    stats.record_error();
    stats.save(&paths.statistics).unwrap();

    let loaded = Statistics::load(&paths.statistics);
    assert_eq!(loaded, stats);
    assert_eq!(
        (loaded.calculations(), loaded.conversions(), loaded.errors()),
        (2, 1, 1)
    );

    fs::write(&paths.statistics, r#"{"calculations": 3}"#).unwrap();
    let partial = Statistics::load(&paths.statistics);
    assert_eq!(partial.calculations(), 3);
    assert_eq!(partial.conversions(), 0);
}

#[test]
fn export_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.CSV");
    let entries = vec![
        entry(1),
        HistoryEntry::with_timestamp(
            EntryKind::Calculation,
            "pow(2, 3)",
            "8",
            "2024-01-02 03:04:06",
        ),
    ];
    assert_eq!(export_history(&entries, &path).unwrap(), ExportFormat::Csv);
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "Timestamp,Type,Expression,Result\r\n\
         2024-01-02 03:04:05,calculation,1+0,1\r\n\
         2024-01-02 03:04:06,calculation,\"pow(2, 3)\",8\r\n"
    );
}

#[test]
fn export_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    assert_eq!(export_history(&[entry(3)], &path).unwrap(), ExportFormat::Text);
    let content = fs::read_to_string(&path).unwrap();
    let expected = format!(
        "Calculator History Export\n{}\n\n[CALCULATION] 2024-01-02 03:04:05\n3+0 = 3\n\n",
        "=".repeat(60)
    );
    assert_eq!(content, expected);
}

#[test]
fn export_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("out.csv");
    assert!(export_history(&[entry(1)], &path).is_err());
}
