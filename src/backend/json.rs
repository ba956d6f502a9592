use super::{Backend, NodeKind};
use crate::error::{MasonError, ParseError, TreeError};
use crate::tree::Number;
use crate::utils::offset_from_line_and_column;
use miette::NamedSource;
use serde_json::Value;

/// The default backend, built on `serde_json::Value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBackend;

fn syntax_error(source: &str, err: &serde_json::Error) -> MasonError {
    let offset = offset_from_line_and_column(source, err.line(), err.column());
    let len = usize::from(offset < source.len());
    ParseError::Syntax {
        format: JsonBackend::FORMAT,
        message: err.to_string(),
        src: NamedSource::new("input.json", source.to_string()),
        span: (offset, len).into(),
    }
    .into()
}

fn stringify_error(err: &serde_json::Error) -> MasonError {
    TreeError::Stringify {
        format: JsonBackend::FORMAT,
        message: err.to_string(),
    }
    .into()
}

impl Backend for JsonBackend {
    type Node = Value;

    const FORMAT: &'static str = "json";

    fn parse(text: &str) -> Result<Value, MasonError> {
        serde_json::from_str(text).map_err(|err| syntax_error(text, &err))
    }

    fn parse_slice(bytes: &[u8]) -> Result<Value, MasonError> {
        serde_json::from_slice(bytes)
            .map_err(|err| syntax_error(&String::from_utf8_lossy(bytes), &err))
    }

    fn get_field<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
        node.as_object()?.get(key)
    }

    fn kind(node: &Value) -> NodeKind {
        match node {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
        }
    }

    fn get_bool(node: &Value) -> Option<bool> {
        node.as_bool()
    }

    fn get_number(node: &Value) -> Option<Number> {
        let Value::Number(n) = node else {
            return None;
        };
        match n.as_i64() {
            Some(i) => Some(Number::Int(i)),
            None => n.as_f64().map(Number::Float),
        }
    }

    fn get_str(node: &Value) -> Option<&str> {
        node.as_str()
    }

    fn array_size(node: &Value) -> usize {
        node.as_array().map_or(0, Vec::len)
    }

    fn array_get(node: &Value, index: usize) -> Option<&Value> {
        node.as_array()?.get(index)
    }

    fn object_entries<'a>(node: &'a Value) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        node.as_object()
            .into_iter()
            .flat_map(|map| map.iter())
            .map(|(key, value)| (key.as_str(), value))
    }

    fn create_object() -> Value {
        Value::Object(serde_json::Map::new())
    }

    fn create_array() -> Value {
        Value::Array(Vec::new())
    }

    fn create_i32(value: i32) -> Value {
        Value::from(value)
    }

    fn create_i64(value: i64) -> Value {
        Value::from(value)
    }

    fn create_f64(value: f64) -> Value {
        // JSON has no representation for NaN or the infinities
        serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
    }

    fn create_string(value: &str) -> Value {
        Value::String(value.to_owned())
    }

    fn create_bool(value: bool) -> Value {
        Value::Bool(value)
    }

    fn create_null() -> Value {
        Value::Null
    }

    fn object_add(object: &mut Value, key: &str, value: Value) -> Result<(), MasonError> {
        let map = object.as_object_mut().ok_or_else(|| TreeError::NotAnObject {
            key: key.to_owned(),
        })?;
        map.insert(key.to_owned(), value);
        Ok(())
    }

    fn array_append(array: &mut Value, value: Value) -> Result<(), MasonError> {
        let items = array.as_array_mut().ok_or(TreeError::NotAnArray)?;
        items.push(value);
        Ok(())
    }

    fn stringify(node: &Value) -> Result<String, MasonError> {
        serde_json::to_string_pretty(node).map_err(|err| stringify_error(&err))
    }

    fn stringify_compact(node: &Value) -> Result<String, MasonError> {
        serde_json::to_string(node).map_err(|err| stringify_error(&err))
    }
}
