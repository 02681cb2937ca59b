// Record source tests: JSON parsing, rejection of malformed records, skip mode

use release_stats::models::{HealthCheck, Sample};
use release_stats::record_source::{load_file, load_from_str};

const EVENTS: &str = r#"[
    {"version": "abc", "timestamp": 1, "query_time": 10},
    {"version": "abc", "timestamp": 2, "query_time": 30},
    {"version": "def", "timestamp": 3, "query_time": 5}
]"#;

#[test]
fn loads_records_in_file_order() {
    let records = load_from_str(EVENTS, false).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        HealthCheck {
            version: "abc".into(),
            timestamp: 1,
            query_time: 10,
        }
    );
    assert_eq!(records[2].sample(), Sample::new(3, 5));
}

#[test]
fn empty_array_loads_nothing() {
    assert!(load_from_str("[]", false).unwrap().is_empty());
}

#[test]
fn rejects_non_array_input() {
    let err = load_from_str(r#"{"version": "abc"}"#, false).unwrap_err();
    assert!(err.to_string().contains("JSON array"));
}

#[test]
fn rejects_out_of_range_query_time_with_index() {
    let input = r#"[
        {"version": "abc", "timestamp": 1, "query_time": 10},
        {"version": "abc", "timestamp": 2, "query_time": 70000}
    ]"#;
    let err = load_from_str(input, false).unwrap_err();
    assert!(err.to_string().contains("index 1"));
}

#[test]
fn rejects_negative_timestamp() {
    let input = r#"[{"version": "abc", "timestamp": -1, "query_time": 10}]"#;
    let err = load_from_str(input, false).unwrap_err();
    assert!(err.to_string().contains("index 0"));
}

#[test]
fn rejects_missing_or_empty_version() {
    let missing = r#"[{"timestamp": 1, "query_time": 10}]"#;
    assert!(load_from_str(missing, false).is_err());

    let empty = r#"[{"version": "", "timestamp": 1, "query_time": 10}]"#;
    let err = load_from_str(empty, false).unwrap_err();
    assert!(format!("{:#}", err).contains("version must be non-empty"));
}

#[test]
fn skip_invalid_drops_bad_records_and_keeps_the_rest() {
    let input = r#"[
        {"version": "abc", "timestamp": 1, "query_time": 10},
        {"version": "", "timestamp": 2, "query_time": 10},
        {"version": "def", "timestamp": 3, "query_time": 99999},
        {"version": "def", "timestamp": 4, "query_time": 0}
    ]"#;
    let records = load_from_str(input, true).unwrap();
    let versions: Vec<&str> = records.iter().map(|r| r.version.as_str()).collect();
    assert_eq!(versions, vec!["abc", "def"]);
    assert_eq!(records[1].query_time, 0);
}

#[test]
fn load_file_reads_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(&path, EVENTS).unwrap();
    assert_eq!(load_file(&path, false).unwrap().len(), 3);
}

#[test]
fn load_file_missing_reports_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    let err = load_file(&path, false).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}
