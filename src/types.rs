//! Type resolution for scalar fields.
//!
//! Every scalar type a schema may name implements [`Scalar`], which fixes its base kind
//! at compile time. The five primitives resolve to themselves; user types are mapped
//! onto a primitive (or onto another alias) with [`scalar_alias!`](crate::scalar_alias).
//! A field whose type has no `Scalar` impl fails to compile.

use crate::backend::Backend;
use serde::Serialize;
use std::fmt;

/// The primitive a scalar type resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseKind {
    Int32,
    Int64,
    Double,
    String,
    Bool,
}

impl fmt::Display for BaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BaseKind::Int32 => "int32",
            BaseKind::Int64 => "int64",
            BaseKind::Double => "double",
            BaseKind::String => "string",
            BaseKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// What a field's declared type resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Base(BaseKind),
    Record(&'static str),
    /// Elements of a multi array carry their own type.
    Dynamic,
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Base(kind) => write!(f, "{kind}"),
            TypeRef::Record(name) => f.write_str(name),
            TypeRef::Dynamic => f.write_str("dynamic"),
        }
    }
}

/// A type that can live in a scalar or array field.
pub trait Scalar: Default + Clone + fmt::Debug + PartialEq {
    const BASE: BaseKind;

    /// Extracts a value when the node's JSON type is compatible, `None` otherwise.
    fn from_node<B: Backend>(node: &B::Node) -> Option<Self>;

    fn to_node<B: Backend>(&self) -> B::Node;

    /// Writes the value the way the printer shows it.
    fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

impl Scalar for i32 {
    const BASE: BaseKind = BaseKind::Int32;

    fn from_node<B: Backend>(node: &B::Node) -> Option<Self> {
        B::get_number(node).map(|n| n.to_i32())
    }

    fn to_node<B: Backend>(&self) -> B::Node {
        B::create_i32(*self)
    }

    fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{self}")
    }
}

impl Scalar for i64 {
    const BASE: BaseKind = BaseKind::Int64;

    fn from_node<B: Backend>(node: &B::Node) -> Option<Self> {
        B::get_number(node).map(|n| n.to_i64())
    }

    fn to_node<B: Backend>(&self) -> B::Node {
        B::create_i64(*self)
    }

    fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{self}")
    }
}

impl Scalar for f64 {
    const BASE: BaseKind = BaseKind::Double;

    fn from_node<B: Backend>(node: &B::Node) -> Option<Self> {
        B::get_number(node).map(|n| n.to_f64())
    }

    fn to_node<B: Backend>(&self) -> B::Node {
        B::create_f64(*self)
    }

    fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{self:.6}")
    }
}

impl Scalar for bool {
    const BASE: BaseKind = BaseKind::Bool;

    fn from_node<B: Backend>(node: &B::Node) -> Option<Self> {
        B::get_bool(node)
    }

    fn to_node<B: Backend>(&self) -> B::Node {
        B::create_bool(*self)
    }

    fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{self}")
    }
}

/// Strings own their text; `None` stands for JSON null or a missing value.
impl Scalar for Option<String> {
    const BASE: BaseKind = BaseKind::String;

    fn from_node<B: Backend>(node: &B::Node) -> Option<Self> {
        B::get_str(node).map(|s| Some(s.to_owned()))
    }

    fn to_node<B: Backend>(&self) -> B::Node {
        match self {
            Some(s) => B::create_string(s),
            None => B::create_null(),
        }
    }

    fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Some(s) => write!(out, "\"{s}\""),
            None => out.write_str("null"),
        }
    }
}
