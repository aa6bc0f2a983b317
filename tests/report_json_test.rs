// tests/report_json_test.rs
//! The report types are the crate's machine-readable surface: their JSON
//! field names are part of the contract and must not drift.

use mailgraph_core::{Interaction, Snapshot};

fn fixture() -> Snapshot {
    let records: Vec<Interaction> = serde_json::from_str(
        r#"[
            {"sender": 0, "receiver": 1, "time": 0},
            {"sender": 0, "receiver": 1, "time": 1},
            {"sender": 1, "receiver": 2, "time": 2}
        ]"#,
    )
    .expect("records parse from JSON");
    Snapshot::from_records(records)
}

#[test]
fn activity_report_serializes_with_stable_field_names() {
    let report = fixture()
        .report_activity_in_window(0, 2)
        .expect("window is valid");
    let value = serde_json::to_value(report).expect("report serializes");

    let obj = value.as_object().expect("JSON root must be an object");
    assert_eq!(obj["senders"], 2);
    assert_eq!(obj["receivers"], 2);
    assert_eq!(obj["total"], 3);
}

#[test]
fn user_report_serializes_with_stable_field_names() {
    let report = fixture().report_on_user(1);
    let value = serde_json::to_value(report).expect("report serializes");

    let obj = value.as_object().expect("JSON root must be an object");
    assert_eq!(obj["sent"], 1);
    assert_eq!(obj["received"], 2);
    assert_eq!(obj["unique_contacts"], 2);
}

#[test]
fn records_round_trip_through_json() {
    let record = Interaction::new(4, 9, 120);
    let json = serde_json::to_string(&record).expect("record serializes");
    let back: Interaction = serde_json::from_str(&json).expect("record parses");
    assert_eq!(back, record);
}
