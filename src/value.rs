use crate::backend::Backend;
use crate::tree::{self, Members, Number, Value};
use std::fmt;

/// One element of a multi array.
///
/// Scalars are stored directly. Nested arrays and objects are owned deep copies of the
/// source sub-tree, released together with the variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DynamicValue {
    #[default]
    Null,
    Int32(i32),
    Int64(i64),
    Double(f64),
    String(String),
    Bool(bool),
    Object(Vec<(String, Value)>),
    Array(Vec<Value>),
}

/// The tag of a [`DynamicValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicKind {
    Null,
    Int32,
    Int64,
    Double,
    String,
    Bool,
    Object,
    Array,
}

impl DynamicValue {
    /// Classifies a single array element.
    ///
    /// A number that equals its own 64-bit truncation is integral and becomes `Int32`
    /// when it fits the signed 32-bit range, `Int64` otherwise. Every other number is
    /// a `Double`.
    pub fn from_node<B: Backend>(node: &B::Node) -> DynamicValue {
        if let Some(n) = B::get_number(node) {
            return classify_number(n);
        }
        if let Some(s) = B::get_str(node) {
            return DynamicValue::String(s.to_owned());
        }
        if let Some(b) = B::get_bool(node) {
            return DynamicValue::Bool(b);
        }
        if B::is_array(node) {
            return DynamicValue::Array(tree::capture_array::<B>(node));
        }
        if B::is_object(node) {
            return DynamicValue::Object(tree::capture_object::<B>(node));
        }
        DynamicValue::Null
    }

    /// Builds a backend node, keeping the captured integer width.
    pub fn to_node<B: Backend>(&self) -> B::Node {
        match self {
            DynamicValue::Null => B::create_null(),
            DynamicValue::Int32(i) => B::create_i32(*i),
            DynamicValue::Int64(i) => B::create_i64(*i),
            DynamicValue::Double(d) => B::create_f64(*d),
            DynamicValue::String(s) => B::create_string(s),
            DynamicValue::Bool(b) => B::create_bool(*b),
            DynamicValue::Object(members) => tree::object_to_node::<B>(members),
            DynamicValue::Array(items) => tree::array_to_node::<B>(items),
        }
    }

    #[must_use]
    pub fn kind(&self) -> DynamicKind {
        match self {
            DynamicValue::Null => DynamicKind::Null,
            DynamicValue::Int32(_) => DynamicKind::Int32,
            DynamicValue::Int64(_) => DynamicKind::Int64,
            DynamicValue::Double(_) => DynamicKind::Double,
            DynamicValue::String(_) => DynamicKind::String,
            DynamicValue::Bool(_) => DynamicKind::Bool,
            DynamicValue::Object(_) => DynamicKind::Object,
            DynamicValue::Array(_) => DynamicKind::Array,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, DynamicValue::Null)
    }

    /// The integer value of an `Int32` or `Int64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DynamicValue::Int32(i) => Some(i64::from(*i)),
            DynamicValue::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Any numeric variant widened to `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DynamicValue::Double(d) => Some(*d),
            other => other.as_i64().map(|i| i as f64),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DynamicValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

fn classify_number(n: Number) -> DynamicValue {
    let integral = match n {
        Number::Int(i) => Some(i),
        // 2^63 itself would saturate to i64::MAX and round back equal, so the range
        // check is half-open
        Number::Float(d) if (I64_LOWER..I64_UPPER).contains(&d) => {
            let truncated = d as i64;
            (truncated as f64 == d).then_some(truncated)
        }
        Number::Float(_) => None,
    };
    match integral {
        Some(i) => match i32::try_from(i) {
            Ok(small) => DynamicValue::Int32(small),
            Err(_) => DynamicValue::Int64(i),
        },
        None => DynamicValue::Double(n.to_f64()),
    }
}

impl From<Value> for DynamicValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DynamicValue::Null,
            Value::Bool(b) => DynamicValue::Bool(b),
            Value::Number(n) => classify_number(n),
            Value::String(s) => DynamicValue::String(s),
            Value::Array(items) => DynamicValue::Array(items),
            Value::Object(members) => DynamicValue::Object(members),
        }
    }
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicValue::Null => f.write_str("null"),
            DynamicValue::Int32(i) => write!(f, "{i}"),
            DynamicValue::Int64(i) => write!(f, "{i}"),
            DynamicValue::Double(d) => write!(f, "{d:.6}"),
            DynamicValue::String(s) => write!(f, "\"{s}\""),
            DynamicValue::Bool(b) => write!(f, "{b}"),
            DynamicValue::Object(members) => tree::write_json(f, &Members(members)),
            DynamicValue::Array(items) => tree::write_json(f, items),
        }
    }
}
