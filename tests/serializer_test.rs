mod common;

use common::{address, read_test_file, Address, Person, Report, Status};
use mason_core::api::to_json_compact;
use mason_core::{from_json, from_yaml, record, to_json, to_yaml, JsonBackend, Record};
use serde_json::json;

record! {
    struct Activity {
        field name: Option<String>,
        field kind = "type": i32,
    }
}

fn to_value<R: Record>(record: &R) -> serde_json::Value {
    record.to_tree::<JsonBackend>()
}

#[test]
fn test_default_record_output() {
    assert_eq!(
        to_value(&Person::default()),
        json!({
            "name": null,
            "id": 0,
            "score": 0.0,
            "active": false,
            "status": 0,
            "tags": [],
            "history": [],
            "raw": []
        })
    );
}

#[test]
fn test_missing_object_omits_key_but_null_string_is_written() {
    let person = Person {
        address: None,
        name: None,
        ..Person::default()
    };
    let tree = to_value(&person);
    let object = tree.as_object().unwrap();
    assert!(!object.contains_key("address"));
    assert_eq!(object.get("name"), Some(&serde_json::Value::Null));
}

#[test]
fn test_empty_object_array_is_written() {
    let report = Report::default();
    assert_eq!(to_value(&report), json!({ "people": [] }));
}

#[test]
fn test_keys_follow_declaration_order() {
    assert_eq!(
        to_json_compact(&address("a", 1)).unwrap(),
        r#"{"street":"a","zip":1}"#
    );
}

#[test]
fn test_nested_records() {
    let person = Person {
        name: Some("Ada".to_string()),
        status: Status::Unknown(5),
        address: Some(Box::new(address("x", 2))),
        history: vec![Address::default(), address("y", 3)],
        ..Person::default()
    };
    let tree = to_value(&person);
    assert_eq!(tree["status"], json!(5));
    assert_eq!(tree["address"], json!({ "street": "x", "zip": 2 }));
    assert_eq!(
        tree["history"],
        json!([{ "street": null, "zip": 0 }, { "street": "y", "zip": 3 }])
    );
}

#[test]
fn test_renamed_key() {
    let activity: Activity = from_json(r#"{"name": "Mason", "type": 2}"#).unwrap();
    assert_eq!(activity.kind, 2);
    assert_eq!(to_value(&activity), json!({ "name": "Mason", "type": 2 }));
}

#[test]
fn test_json_round_trip() {
    let report: Report = from_json(&read_test_file("features.json")).unwrap();
    let text = to_json(&report).unwrap();
    let reparsed: Report = from_json(&text).unwrap();
    assert_eq!(reparsed, report);
}

#[test]
fn test_round_trip_drops_mismatches() {
    let report: Report = from_json(&read_test_file("features.json")).unwrap();
    let tree = to_value(&report);
    // "not a person" comes back as a default record, the wrong-typed tag as null
    assert_eq!(tree["people"][1]["name"], serde_json::Value::Null);
    assert_eq!(tree["owner"]["tags"], json!(["admin", null, "ops"]));
    assert!(tree.get("ignored").is_none());
}

#[test]
fn test_yaml_round_trip() {
    let report: Report = from_json(&read_test_file("features.json")).unwrap();
    let text = to_yaml(&report).unwrap();
    let reparsed: Report = from_yaml(&text).unwrap();
    assert_eq!(reparsed, report);
}

#[test]
fn test_serializing_leaves_record_untouched() {
    let person = Person {
        tags: vec![Some("a".to_string())],
        ..Person::default()
    };
    let before = person.clone();
    let _ = to_json(&person).unwrap();
    let _ = to_yaml(&person).unwrap();
    assert_eq!(person, before);
}
