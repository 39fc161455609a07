//! Tests for roster-model types.

use roster_model::{ModelError, Record, RecordField, RecordId};

fn sample() -> Record {
    Record::new(
        RecordId::new("1"),
        "Aaron Miles",
        "aaron@mailinator.com",
        "member",
    )
}

#[test]
fn record_deserializes_from_wire_shape() {
    let json = r#"{"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"}"#;
    let record: Record = serde_json::from_str(json).expect("deserialize record");
    assert_eq!(record, sample());
}

#[test]
fn ids_round_trip_exactly_as_received() {
    for raw in [" 7", "7 ", ""] {
        let json = format!(r#"{{"id":"{raw}","name":"A","email":"a@b.c","role":"admin"}}"#);
        let record: Record = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(record.id.as_str(), raw);
        let back = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(back["id"], raw);
    }
}

#[test]
fn record_serializes_id_as_plain_string() {
    let json = serde_json::to_value(sample()).expect("serialize record");
    assert_eq!(json["id"], "1");
    assert_eq!(json["role"], "member");
}

#[test]
fn set_field_changes_only_that_field() {
    let mut record = sample();
    record.set_field(RecordField::Email, "");
    assert_eq!(record.email, "");
    assert_eq!(record.name, "Aaron Miles");
    assert_eq!(record.field(RecordField::Role), "member");
}

#[test]
fn apply_fields_keeps_the_id() {
    let mut record = sample();
    let other = Record::new(RecordId::new("99"), "B", "b@x.io", "admin");
    record.apply_fields_from(&other);
    assert_eq!(record.id.as_str(), "1");
    assert_eq!(record.name, "B");
    assert_eq!(record.role, "admin");
}

#[test]
fn field_parses_case_insensitively() {
    assert_eq!("EMAIL".parse::<RecordField>(), Ok(RecordField::Email));
    assert_eq!(
        "phone".parse::<RecordField>(),
        Err(ModelError::UnknownField("phone".to_string()))
    );
}
