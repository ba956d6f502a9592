//! Record → tree.
//!
//! Serialization is best effort: a node that cannot be attached is logged and dropped,
//! and whatever was already attached stays in place.

use crate::backend::Backend;
use crate::record::Record;
use crate::types::Scalar;
use crate::value::DynamicValue;

pub(crate) fn serialize_record<B: Backend, R: Record>(record: &R) -> B::Node {
    let mut object = B::create_object();
    record.serialize_fields::<B>(&mut object);
    object
}

fn attach<B: Backend>(object: &mut B::Node, key: &str, value: B::Node) {
    if let Err(err) = B::object_add(object, key, value) {
        log::warn!("dropping field `{key}`: {err}");
    }
}

fn append<B: Backend>(array: &mut B::Node, key: &str, value: B::Node) {
    if let Err(err) = B::array_append(array, value) {
        log::warn!("dropping element of `{key}`: {err}");
    }
}

/// A `None` string becomes JSON null; the key is always present.
pub fn scalar<B: Backend, T: Scalar>(object: &mut B::Node, key: &str, value: &T) {
    attach::<B>(object, key, value.to_node::<B>());
}

pub fn array<B: Backend, T: Scalar>(object: &mut B::Node, key: &str, values: &[T]) {
    let mut array = B::create_array();
    for value in values {
        append::<B>(&mut array, key, value.to_node::<B>());
    }
    attach::<B>(object, key, array);
}

pub fn multi<B: Backend>(object: &mut B::Node, key: &str, values: &[DynamicValue]) {
    let mut array = B::create_array();
    for value in values {
        append::<B>(&mut array, key, value.to_node::<B>());
    }
    attach::<B>(object, key, array);
}

/// A missing nested record omits the key entirely rather than writing null.
pub fn object<B: Backend, R: Record>(object: &mut B::Node, key: &str, value: Option<&R>) {
    match value {
        Some(nested) => attach::<B>(object, key, nested.to_tree::<B>()),
        None => log::trace!("{key}: no {}, key omitted", R::NAME),
    }
}

/// Always emits an array, even an empty one.
pub fn object_array<B: Backend, R: Record>(object: &mut B::Node, key: &str, values: &[R]) {
    let mut array = B::create_array();
    for value in values {
        append::<B>(&mut array, key, value.to_tree::<B>());
    }
    attach::<B>(object, key, array);
}
