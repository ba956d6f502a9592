use crate::backend::Backend;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A JSON number as reported by a backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Truncates toward zero, saturating at the `i64` range. NaN becomes zero.
    #[must_use]
    pub fn to_i64(self) -> i64 {
        match self {
            Number::Int(i) => i,
            Number::Float(d) => d as i64,
        }
    }

    /// Like [`Number::to_i64`], then saturates at the `i32` range.
    #[must_use]
    pub fn to_i32(self) -> i32 {
        self.to_i64().clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    #[must_use]
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(d) => d,
        }
    }
}

/// An owned, detached copy of a tree node.
///
/// Multi arrays keep nested arrays and objects as `Value`s so a record never borrows
/// from the tree it was parsed from. Object members keep the backend's order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Deep-copies `node` out of a backend tree.
    pub fn capture<B: Backend>(node: &B::Node) -> Value {
        if let Some(b) = B::get_bool(node) {
            return Value::Bool(b);
        }
        if let Some(n) = B::get_number(node) {
            return Value::Number(n);
        }
        if let Some(s) = B::get_str(node) {
            return Value::String(s.to_owned());
        }
        if B::is_array(node) {
            return Value::Array(capture_array::<B>(node));
        }
        if B::is_object(node) {
            return Value::Object(capture_object::<B>(node));
        }
        Value::Null
    }

    /// Builds a fresh backend node from this copy.
    pub fn to_node<B: Backend>(&self) -> B::Node {
        match self {
            Value::Null => B::create_null(),
            Value::Bool(b) => B::create_bool(*b),
            Value::Number(Number::Int(i)) => B::create_i64(*i),
            Value::Number(Number::Float(d)) => B::create_f64(*d),
            Value::String(s) => B::create_string(s),
            Value::Array(items) => array_to_node::<B>(items),
            Value::Object(members) => object_to_node::<B>(members),
        }
    }
}

pub(crate) fn capture_array<B: Backend>(node: &B::Node) -> Vec<Value> {
    (0..B::array_size(node))
        .filter_map(|i| B::array_get(node, i))
        .map(Value::capture::<B>)
        .collect()
}

pub(crate) fn capture_object<B: Backend>(node: &B::Node) -> Vec<(String, Value)> {
    B::object_entries(node)
        .map(|(key, value)| (key.to_owned(), Value::capture::<B>(value)))
        .collect()
}

pub(crate) fn array_to_node<B: Backend>(items: &[Value]) -> B::Node {
    let mut array = B::create_array();
    for item in items {
        if let Err(err) = B::array_append(&mut array, item.to_node::<B>()) {
            log::warn!("dropping captured array element: {err}");
        }
    }
    array
}

pub(crate) fn object_to_node<B: Backend>(members: &[(String, Value)]) -> B::Node {
    let mut object = B::create_object();
    for (key, value) in members {
        if let Err(err) = B::object_add(&mut object, key, value.to_node::<B>()) {
            log::warn!("dropping captured member `{key}`: {err}");
        }
    }
    object
}

/// Serializes object members as a map rather than a list of pairs.
pub(crate) struct Members<'a>(pub &'a [(String, Value)]);

impl Serialize for Members<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Int(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(d)) => serializer.serialize_f64(*d),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => items.serialize(serializer),
            Value::Object(members) => Members(members).serialize(serializer),
        }
    }
}

/// Writes `value` as compact JSON.
pub(crate) fn write_json<T: Serialize + ?Sized>(f: &mut dyn fmt::Write, value: &T) -> fmt::Result {
    let text = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    f.write_str(&text)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{JsonBackend, YamlBackend};
    use serde_json::json;

    #[test]
    fn test_number_conversions() {
        assert_eq!(Number::Float(2.9).to_i64(), 2);
        assert_eq!(Number::Float(-2.9).to_i64(), -2);
        assert_eq!(Number::Float(f64::NAN).to_i64(), 0);
        assert_eq!(Number::Int(4_000_000_000).to_i32(), i32::MAX);
        assert_eq!(Number::Int(-4_000_000_000).to_i32(), i32::MIN);
        assert_eq!(Number::Int(7).to_f64(), 7.0);
    }

    #[test]
    fn test_capture_is_a_deep_copy() {
        let node = json!({ "a": [1, 2.5, "x", null, true], "b": { "c": {} } });
        let captured = Value::capture::<JsonBackend>(&node);
        drop(node);
        assert_eq!(
            captured.to_node::<JsonBackend>(),
            json!({ "a": [1, 2.5, "x", null, true], "b": { "c": {} } })
        );
    }

    #[test]
    fn test_capture_crosses_backends() {
        let node = json!({ "list": [1, { "k": "v" }] });
        let captured = Value::capture::<JsonBackend>(&node);
        let yaml = captured.to_node::<YamlBackend>();
        assert_eq!(
            YamlBackend::stringify(&yaml).unwrap(),
            "list:\n- 1\n- k: v\n"
        );
    }

    #[test]
    fn test_display_is_compact_json() {
        let value = Value::Object(vec![
            ("z".to_string(), Value::Number(Number::Int(1))),
            ("a".to_string(), Value::Array(vec![Value::Null, Value::Bool(false)])),
        ]);
        assert_eq!(value.to_string(), r#"{"z":1,"a":[null,false]}"#);
    }
}
