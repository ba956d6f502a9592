use super::{Backend, NodeKind};
use crate::error::{MasonError, ParseError, TreeError};
use crate::tree::Number;
use miette::NamedSource;
use serde_yaml::Value;

/// A backend over `serde_yaml::Value`.
///
/// Only the JSON-compatible subset of YAML maps onto records: mappings with string
/// keys, sequences and scalars. Tagged nodes are looked through to their value.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlBackend;

fn untag(node: &Value) -> &Value {
    match node {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn untag_mut(node: &mut Value) -> &mut Value {
    match node {
        Value::Tagged(tagged) => untag_mut(&mut tagged.value),
        other => other,
    }
}

fn syntax_error(source: &str, err: &serde_yaml::Error) -> MasonError {
    let offset = err
        .location()
        .map_or(0, |location| location.index().min(source.len()));
    let len = usize::from(offset < source.len());
    ParseError::Syntax {
        format: YamlBackend::FORMAT,
        message: err.to_string(),
        src: NamedSource::new("input.yaml", source.to_string()),
        span: (offset, len).into(),
    }
    .into()
}

impl Backend for YamlBackend {
    type Node = Value;

    const FORMAT: &'static str = "yaml";

    fn parse(text: &str) -> Result<Value, MasonError> {
        serde_yaml::from_str(text).map_err(|err| syntax_error(text, &err))
    }

    fn parse_slice(bytes: &[u8]) -> Result<Value, MasonError> {
        serde_yaml::from_slice(bytes)
            .map_err(|err| syntax_error(&String::from_utf8_lossy(bytes), &err))
    }

    fn get_field<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
        untag(node).as_mapping()?.get(key)
    }

    fn kind(node: &Value) -> NodeKind {
        let mut node = node;
        loop {
            return match node {
                Value::Null => NodeKind::Null,
                Value::Bool(_) => NodeKind::Bool,
                Value::Number(_) => NodeKind::Number,
                Value::String(_) => NodeKind::String,
                Value::Sequence(_) => NodeKind::Array,
                Value::Mapping(_) => NodeKind::Object,
                Value::Tagged(tagged) => {
                    node = &tagged.value;
                    continue;
                }
            };
        }
    }

    fn get_bool(node: &Value) -> Option<bool> {
        untag(node).as_bool()
    }

    fn get_number(node: &Value) -> Option<Number> {
        let Value::Number(n) = untag(node) else {
            return None;
        };
        match n.as_i64() {
            Some(i) => Some(Number::Int(i)),
            None => n.as_f64().map(Number::Float),
        }
    }

    fn get_str(node: &Value) -> Option<&str> {
        untag(node).as_str()
    }

    fn array_size(node: &Value) -> usize {
        untag(node).as_sequence().map_or(0, Vec::len)
    }

    fn array_get(node: &Value, index: usize) -> Option<&Value> {
        untag(node).as_sequence()?.get(index)
    }

    fn object_entries<'a>(node: &'a Value) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        untag(node)
            .as_mapping()
            .into_iter()
            .flat_map(|mapping| mapping.iter())
            .filter_map(|(key, value)| key.as_str().map(|key| (key, value)))
    }

    fn create_object() -> Value {
        Value::Mapping(serde_yaml::Mapping::new())
    }

    fn create_array() -> Value {
        Value::Sequence(Vec::new())
    }

    fn create_i32(value: i32) -> Value {
        Value::Number(serde_yaml::Number::from(i64::from(value)))
    }

    fn create_i64(value: i64) -> Value {
        Value::Number(serde_yaml::Number::from(value))
    }

    fn create_f64(value: f64) -> Value {
        // same rule as the JSON backend: non-finite values become null
        if value.is_finite() {
            Value::Number(serde_yaml::Number::from(value))
        } else {
            Value::Null
        }
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
        let mapping = untag_mut(object)
            .as_mapping_mut()
            .ok_or_else(|| TreeError::NotAnObject {
                key: key.to_owned(),
            })?;
        mapping.insert(Value::String(key.to_owned()), value);
        Ok(())
    }

    fn array_append(array: &mut Value, value: Value) -> Result<(), MasonError> {
        let items = untag_mut(array)
            .as_sequence_mut()
            .ok_or(TreeError::NotAnArray)?;
        items.push(value);
        Ok(())
    }

    fn stringify(node: &Value) -> Result<String, MasonError> {
        serde_yaml::to_string(node).map_err(|err| {
            TreeError::Stringify {
                format: Self::FORMAT,
                message: err.to_string(),
            }
            .into()
        })
    }
}
