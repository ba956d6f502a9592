//! Tree → record.
//!
//! Nothing here fails on data: a missing key or a value of the wrong JSON type leaves
//! the field at its zero value and parsing carries on. The only failure is the backend
//! rejecting input text, which surfaces from the text entry points.

use crate::backend::Backend;
use crate::error::MasonError;
use crate::record::Record;
use crate::types::Scalar;
use crate::value::DynamicValue;
use std::fmt;

pub(crate) fn parse_record<B: Backend, R: Record>(node: &B::Node) -> R {
    if !B::is_object(node) {
        log::debug!(
            "{}: expected an object, found {}; every field keeps its default",
            R::NAME,
            B::kind(node)
        );
    }
    R::parse_fields::<B>(node)
}

pub(crate) fn parse_text<B: Backend, R: Record>(text: &str) -> Result<R, MasonError> {
    log::debug!("parsing {} from {} bytes of {}", R::NAME, text.len(), B::FORMAT);
    let tree = B::parse(text)?;
    let record = R::from_tree::<B>(&tree);
    B::delete(tree);
    Ok(record)
}

pub(crate) fn parse_slice<B: Backend, R: Record>(bytes: &[u8]) -> Result<R, MasonError> {
    log::debug!("parsing {} from {} bytes of {}", R::NAME, bytes.len(), B::FORMAT);
    let tree = B::parse_slice(bytes)?;
    let record = R::from_tree::<B>(&tree);
    B::delete(tree);
    Ok(record)
}

fn defaulted<B: Backend>(
    item: Option<&B::Node>,
    record: &str,
    key: &str,
    expected: impl fmt::Display,
) {
    match item {
        None => log::trace!("{record}.{key}: missing, using default"),
        Some(node) => log::trace!(
            "{record}.{key}: expected {expected}, found {}; using default",
            B::kind(node)
        ),
    }
}

/// Returns the node when it is an array, logging the default otherwise.
fn array_node<'a, B: Backend>(
    item: Option<&'a B::Node>,
    record: &str,
    key: &str,
) -> Option<&'a B::Node> {
    match item {
        Some(node) if B::is_array(node) => Some(node),
        _ => {
            defaulted::<B>(item, record, key, "array");
            None
        }
    }
}

pub fn scalar<B: Backend, T: Scalar>(item: Option<&B::Node>, record: &str, key: &str) -> T {
    match item.and_then(T::from_node::<B>) {
        Some(value) => value,
        None => {
            defaulted::<B>(item, record, key, T::BASE);
            T::default()
        }
    }
}

/// One slot per element. Elements of the wrong type keep the zero value in their slot,
/// so positions line up with the source array.
pub fn array<B: Backend, T: Scalar>(item: Option<&B::Node>, record: &str, key: &str) -> Vec<T> {
    let Some(node) = array_node::<B>(item, record, key) else {
        return Vec::new();
    };
    let count = B::array_size(node);
    let mut values = vec![T::default(); count];
    for (index, slot) in values.iter_mut().enumerate() {
        match B::array_get(node, index).and_then(T::from_node::<B>) {
            Some(value) => *slot = value,
            None => log::trace!("{record}.{key}[{index}]: expected {}, using default", T::BASE),
        }
    }
    values
}

pub fn multi<B: Backend>(item: Option<&B::Node>, record: &str, key: &str) -> Vec<DynamicValue> {
    let Some(node) = array_node::<B>(item, record, key) else {
        return Vec::new();
    };
    (0..B::array_size(node))
        .map(|index| {
            B::array_get(node, index).map_or(DynamicValue::Null, DynamicValue::from_node::<B>)
        })
        .collect()
}

pub fn object<B: Backend, R: Record>(
    item: Option<&B::Node>,
    record: &str,
    key: &str,
) -> Option<Box<R>> {
    match item {
        Some(node) if B::is_object(node) => Some(Box::new(R::from_tree::<B>(node))),
        _ => {
            defaulted::<B>(item, record, key, R::NAME);
            None
        }
    }
}

/// Records are parsed straight into their slot of one contiguous buffer.
pub fn object_array<B: Backend, R: Record>(
    item: Option<&B::Node>,
    record: &str,
    key: &str,
) -> Vec<R> {
    let Some(node) = array_node::<B>(item, record, key) else {
        return Vec::new();
    };
    (0..B::array_size(node))
        .map(|index| {
            B::array_get(node, index).map_or_else(R::default, R::from_tree::<B>)
        })
        .collect()
}
