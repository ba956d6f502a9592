mod common;

use common::{address, read_test_file, Address, Person, Report, Status};
use mason_core::{from_json, DynamicKind, JsonBackend, Record};
use serde_json::json;

#[test]
fn test_empty_object_gives_defaults() {
    let person: Person = from_json("{}").unwrap();
    assert_eq!(person, Person::default());
    assert_eq!(person.name, None);
    assert_eq!(person.id, 0);
    assert_eq!(person.score, 0.0);
    assert!(!person.active);
    assert_eq!(person.status, Status::Ok);
    assert!(person.tags.is_empty());
    assert!(person.address.is_none());
    assert!(person.history.is_empty());
    assert!(person.raw.is_empty());

    let report: Report = from_json("{}").unwrap();
    assert!(report.owner.is_none());
    assert!(report.people.is_empty());
}

#[test]
fn test_type_mismatch_is_not_an_error() {
    let addr: Address = from_json(r#"{"zip": "nope", "street": 12}"#).unwrap();
    assert_eq!(addr.zip, 0);
    assert_eq!(addr.street, None);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let addr: Address = from_json(r#"{"street": "a", "zip": 1, "extra": [1, {}]}"#).unwrap();
    assert_eq!(addr, address("a", 1));
}

#[test]
fn test_keys_match_exactly() {
    let addr: Address = from_json(r#"{"Street": "a", "ZIP": 1}"#).unwrap();
    assert_eq!(addr, Address::default());
}

#[test]
fn test_array_slots_are_never_compacted() {
    let person: Person = from_json(r#"{"tags": ["a", 1, null, "d"]}"#).unwrap();
    assert_eq!(
        person.tags,
        vec![Some("a".to_string()), None, None, Some("d".to_string())]
    );
}

#[test]
fn test_non_array_value_gives_empty_buffer() {
    let person: Person = from_json(r#"{"tags": "a", "history": {}, "raw": 3}"#).unwrap();
    assert!(person.tags.is_empty());
    assert!(person.history.is_empty());
    assert!(person.raw.is_empty());
}

#[test]
fn test_object_field_requires_an_object() {
    let person: Person = from_json(r#"{"address": [1]}"#).unwrap();
    assert!(person.address.is_none());

    let person: Person = from_json(r#"{"address": null}"#).unwrap();
    assert!(person.address.is_none());

    let person: Person = from_json(r#"{"address": {}}"#).unwrap();
    assert_eq!(person.address.as_deref(), Some(&Address::default()));
}

#[test]
fn test_array_of_objects_keeps_every_slot() {
    let person: Person =
        from_json(r#"{"history": [{"street": "a", "zip": 1}, 5, {"zip": 2}]}"#).unwrap();
    assert_eq!(
        person.history,
        vec![
            address("a", 1),
            Address::default(),
            Address {
                street: None,
                zip: 2
            },
        ]
    );
}

#[test]
fn test_alias_resolves_through_base_type() {
    let people: Report =
        from_json(r#"{"people": [{"status": 0}, {"status": 1}, {"status": 9}, {"status": "1"}]}"#)
            .unwrap();
    let statuses: Vec<Status> = people.people.iter().map(|p| p.status).collect();
    assert_eq!(
        statuses,
        vec![Status::Ok, Status::Warn, Status::Unknown(9), Status::Ok]
    );
}

#[test]
fn test_numeric_coercions() {
    let person: Person = from_json(r#"{"id": 2.9, "score": 3}"#).unwrap();
    assert_eq!(person.id, 2);
    assert_eq!(person.score, 3.0);

    let addr: Address = from_json(r#"{"zip": 99999999999}"#).unwrap();
    assert_eq!(addr.zip, i32::MAX);
}

#[test]
fn test_int64_keeps_full_precision() {
    let person: Person = from_json(r#"{"id": 9007199254740993}"#).unwrap();
    assert_eq!(person.id, 9_007_199_254_740_993);
}

#[test]
fn test_non_object_root_gives_defaults() {
    let addr: Address = from_json("[1, 2]").unwrap();
    assert_eq!(addr, Address::default());
    let addr: Address = from_json("null").unwrap();
    assert_eq!(addr, Address::default());
}

#[test]
fn test_from_tree_borrows_nothing() {
    let tree = json!({ "name": "Ada", "raw": [{ "k": [1] }] });
    let person = Person::from_tree::<JsonBackend>(&tree);
    drop(tree);
    assert_eq!(person.name.as_deref(), Some("Ada"));
    assert_eq!(person.raw[0].kind(), DynamicKind::Object);
}

#[test]
fn test_length_delimited_input() {
    let buffer = br#"{"street": "a", "zip": 7}GARBAGE AFTER THE PAYLOAD"#;
    let len = buffer.iter().position(|&b| b == b'}').unwrap() + 1;
    let addr = Address::from_slice::<JsonBackend>(&buffer[..len]).unwrap();
    assert_eq!(addr, address("a", 7));

    assert!(Address::from_slice::<JsonBackend>(buffer).is_err());
}

#[test]
fn test_features_fixture() {
    let report: Report = from_json(&read_test_file("features.json")).unwrap();

    let owner = report.owner.as_deref().unwrap();
    assert_eq!(owner.name.as_deref(), Some("Ada"));
    assert_eq!(owner.id, 17_000_000_123);
    assert_eq!(owner.score, 98.5);
    assert!(owner.active);
    assert_eq!(owner.status, Status::Warn);
    assert_eq!(
        owner.tags,
        vec![Some("admin".to_string()), None, Some("ops".to_string())]
    );
    assert_eq!(owner.address.as_deref(), Some(&address("1 Main St", 12345)));
    assert_eq!(
        owner.history,
        vec![address("Old Road", 11111), Address::default()]
    );
    let kinds: Vec<DynamicKind> = owner.raw.iter().map(|v| v.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            DynamicKind::Int32,
            DynamicKind::Double,
            DynamicKind::String,
            DynamicKind::Bool,
            DynamicKind::Null,
            DynamicKind::Array,
            DynamicKind::Object,
        ]
    );

    assert_eq!(report.people.len(), 3);
    assert_eq!(report.people[0].name.as_deref(), Some("Bob"));
    assert_eq!(report.people[0].status, Status::Unknown(7));
    assert_eq!(report.people[1], Person::default());
    assert_eq!(report.people[2].name.as_deref(), Some("Cy"));
    assert!(report.people[2].address.is_none());
}
