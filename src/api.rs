use crate::backend::{Backend, JsonBackend, YamlBackend};
use crate::error::MasonError;
use crate::record::Record;

/// Parses a record from JSON text.
///
/// This is the primary entry point when the payload is JSON. Missing keys and values
/// of the wrong type never fail; only malformed text does.
///
/// # Errors
///
/// Returns a `MasonError::Parse` if the text is not valid JSON. Its
/// [`parse_reason`](MasonError::parse_reason) carries the backend's message.
pub fn from_json<R: Record>(text: &str) -> Result<R, MasonError> {
    R::from_text::<JsonBackend>(text)
}

/// Parses a record from a length-delimited JSON buffer.
///
/// # Errors
///
/// Returns a `MasonError::Parse` if the buffer is not valid JSON.
pub fn from_json_slice<R: Record>(bytes: &[u8]) -> Result<R, MasonError> {
    R::from_slice::<JsonBackend>(bytes)
}

/// Serializes a record into pretty-printed JSON.
///
/// # Errors
///
/// Returns a `MasonError::Tree` if the tree cannot be rendered.
pub fn to_json<R: Record>(record: &R) -> Result<String, MasonError> {
    record.to_text::<JsonBackend>()
}

/// Serializes a record into JSON without insignificant whitespace.
///
/// # Errors
///
/// Returns a `MasonError::Tree` if the tree cannot be rendered.
pub fn to_json_compact<R: Record>(record: &R) -> Result<String, MasonError> {
    stringify_compact::<JsonBackend>(&record.to_tree::<JsonBackend>())
}

/// Parses a record from YAML text.
///
/// # Errors
///
/// Returns a `MasonError::Parse` if the text is not valid YAML.
pub fn from_yaml<R: Record>(text: &str) -> Result<R, MasonError> {
    R::from_text::<YamlBackend>(text)
}

/// Serializes a record into YAML.
///
/// # Errors
///
/// Returns a `MasonError::Tree` if the tree cannot be rendered.
pub fn to_yaml<R: Record>(record: &R) -> Result<String, MasonError> {
    record.to_text::<YamlBackend>()
}

/// Renders a tree produced by [`Record::to_tree`].
///
/// # Errors
///
/// Returns a `MasonError::Tree` if the backend cannot render the tree.
pub fn stringify<B: Backend>(tree: &B::Node) -> Result<String, MasonError> {
    B::stringify(tree)
}

/// Renders a tree without insignificant whitespace.
///
/// # Errors
///
/// Returns a `MasonError::Tree` if the backend cannot render the tree.
pub fn stringify_compact<B: Backend>(tree: &B::Node) -> Result<String, MasonError> {
    B::stringify_compact(tree)
}

/// Releases text returned by [`stringify`].
pub fn free_text<B: Backend>(text: String) {
    B::free_text(text);
}
