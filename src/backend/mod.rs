//! The tree backend adapter.
//!
//! Records never talk to a concrete JSON library directly. Everything the parser,
//! serializer and dynamic values need from a tree goes through [`Backend`], so a
//! different document model can be plugged in by implementing this one trait.

pub mod json;
pub mod yaml;

use crate::error::MasonError;
use crate::tree::Number;
use std::fmt;

pub use json::JsonBackend;
pub use yaml::YamlBackend;

/// The JSON type of a tree node, as seen through a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "bool",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// A pluggable tree implementation.
///
/// Backends carry no instance state: every operation is an associated function and
/// every failure is returned to the caller that caused it.
pub trait Backend {
    /// An owned tree node. Dropping it releases the whole sub-tree.
    type Node: Clone + fmt::Debug + PartialEq;

    /// Short format name used in diagnostics, e.g. `"json"`.
    const FORMAT: &'static str;

    /// Builds a tree from text.
    ///
    /// # Errors
    /// Returns a `ParseError::Syntax` describing where the text is malformed.
    fn parse(text: &str) -> Result<Self::Node, MasonError>;

    /// Builds a tree from a length-delimited buffer.
    ///
    /// # Errors
    /// Returns a `ParseError::Syntax` describing where the buffer is malformed.
    fn parse_slice(bytes: &[u8]) -> Result<Self::Node, MasonError>;

    /// Looks up `key` in an object node by exact, case-sensitive match.
    /// Non-object nodes have no fields.
    fn get_field<'a>(node: &'a Self::Node, key: &str) -> Option<&'a Self::Node>;

    fn kind(node: &Self::Node) -> NodeKind;

    fn is_null(node: &Self::Node) -> bool {
        Self::kind(node) == NodeKind::Null
    }

    fn is_bool(node: &Self::Node) -> bool {
        Self::kind(node) == NodeKind::Bool
    }

    fn is_number(node: &Self::Node) -> bool {
        Self::kind(node) == NodeKind::Number
    }

    fn is_string(node: &Self::Node) -> bool {
        Self::kind(node) == NodeKind::String
    }

    fn is_array(node: &Self::Node) -> bool {
        Self::kind(node) == NodeKind::Array
    }

    fn is_object(node: &Self::Node) -> bool {
        Self::kind(node) == NodeKind::Object
    }

    fn get_bool(node: &Self::Node) -> Option<bool>;

    fn get_number(node: &Self::Node) -> Option<Number>;

    fn get_str(node: &Self::Node) -> Option<&str>;

    /// Number of elements of an array node; zero for anything else.
    fn array_size(node: &Self::Node) -> usize;

    fn array_get(node: &Self::Node, index: usize) -> Option<&Self::Node>;

    /// Key/value pairs of an object node in the backend's iteration order.
    /// Empty for anything else.
    fn object_entries<'a>(
        node: &'a Self::Node,
    ) -> impl Iterator<Item = (&'a str, &'a Self::Node)> + 'a;

    fn create_object() -> Self::Node;
    fn create_array() -> Self::Node;
    fn create_i32(value: i32) -> Self::Node;
    fn create_i64(value: i64) -> Self::Node;
    fn create_f64(value: f64) -> Self::Node;
    fn create_string(value: &str) -> Self::Node;
    fn create_bool(value: bool) -> Self::Node;
    fn create_null() -> Self::Node;

    /// Attaches `value` under `key`, taking ownership of it.
    ///
    /// # Errors
    /// Returns `TreeError::NotAnObject` if `object` is not an object node.
    fn object_add(object: &mut Self::Node, key: &str, value: Self::Node) -> Result<(), MasonError>;

    /// Appends `value` to an array node, taking ownership of it.
    ///
    /// # Errors
    /// Returns `TreeError::NotAnArray` if `array` is not an array node.
    fn array_append(array: &mut Self::Node, value: Self::Node) -> Result<(), MasonError>;

    /// Releases a tree and everything below it.
    fn delete(node: Self::Node) {
        drop(node);
    }

    /// Renders a tree as formatted text.
    ///
    /// # Errors
    /// Returns `TreeError::Stringify` if the backend cannot render the tree.
    fn stringify(node: &Self::Node) -> Result<String, MasonError>;

    /// Renders a tree without insignificant whitespace.
    ///
    /// # Errors
    /// Returns `TreeError::Stringify` if the backend cannot render the tree.
    fn stringify_compact(node: &Self::Node) -> Result<String, MasonError> {
        Self::stringify(node)
    }

    /// Releases text produced by [`Backend::stringify`].
    fn free_text(text: String) {
        drop(text);
    }
}
