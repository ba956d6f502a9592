//! Per-kind field dispatch.
//!
//! Each of the five field kinds is a marker type implementing [`FieldShape`]. The
//! `record!` macro only decides which marker a field uses; how that kind is parsed,
//! serialized, printed and released lives here and nowhere else.

use crate::backend::Backend;
use crate::printer::Printer;
use crate::record::Record;
use crate::schema::FieldKind;
use crate::types::{Scalar, TypeRef};
use crate::value::DynamicValue;
use crate::{parser, serializer};
use std::fmt;
use std::marker::PhantomData;

pub trait FieldShape {
    /// How the field is stored inside the record.
    type Storage: Default + Clone + fmt::Debug + PartialEq;

    const KIND: FieldKind;
    const TYPE: TypeRef;

    /// Reads the field from the node found under its key, if any.
    fn parse<B: Backend>(item: Option<&B::Node>, record: &str, key: &str) -> Self::Storage;

    /// Adds the field to `object` under `key`.
    fn serialize<B: Backend>(value: &Self::Storage, object: &mut B::Node, key: &str);

    fn print(value: &Self::Storage, key: &str, printer: &mut Printer<'_>) -> fmt::Result;

    /// Releases everything the field owns, leaving it at its zero value.
    fn release(value: &mut Self::Storage);
}

pub struct ScalarField<T>(PhantomData<fn() -> T>);

pub struct ArrayField<T>(PhantomData<fn() -> T>);

pub struct MultiField;

pub struct ObjectField<R>(PhantomData<fn() -> R>);

pub struct ObjectArrayField<R>(PhantomData<fn() -> R>);

impl<T: Scalar> FieldShape for ScalarField<T> {
    type Storage = T;

    const KIND: FieldKind = FieldKind::Scalar;
    const TYPE: TypeRef = TypeRef::Base(T::BASE);

    fn parse<B: Backend>(item: Option<&B::Node>, record: &str, key: &str) -> T {
        parser::scalar::<B, T>(item, record, key)
    }

    fn serialize<B: Backend>(value: &T, object: &mut B::Node, key: &str) {
        serializer::scalar::<B, T>(object, key, value);
    }

    fn print(value: &T, key: &str, printer: &mut Printer<'_>) -> fmt::Result {
        printer.scalar(key, value)
    }

    fn release(value: &mut T) {
        *value = T::default();
    }
}

impl<T: Scalar> FieldShape for ArrayField<T> {
    type Storage = Vec<T>;

    const KIND: FieldKind = FieldKind::Array;
    const TYPE: TypeRef = TypeRef::Base(T::BASE);

    fn parse<B: Backend>(item: Option<&B::Node>, record: &str, key: &str) -> Vec<T> {
        parser::array::<B, T>(item, record, key)
    }

    fn serialize<B: Backend>(value: &Vec<T>, object: &mut B::Node, key: &str) {
        serializer::array::<B, T>(object, key, value);
    }

    fn print(value: &Vec<T>, key: &str, printer: &mut Printer<'_>) -> fmt::Result {
        printer.array(key, value)
    }

    fn release(value: &mut Vec<T>) {
        *value = Vec::new();
    }
}

impl FieldShape for MultiField {
    type Storage = Vec<DynamicValue>;

    const KIND: FieldKind = FieldKind::MultiArray;
    const TYPE: TypeRef = TypeRef::Dynamic;

    fn parse<B: Backend>(item: Option<&B::Node>, record: &str, key: &str) -> Vec<DynamicValue> {
        parser::multi::<B>(item, record, key)
    }

    fn serialize<B: Backend>(value: &Vec<DynamicValue>, object: &mut B::Node, key: &str) {
        serializer::multi::<B>(object, key, value);
    }

    fn print(value: &Vec<DynamicValue>, key: &str, printer: &mut Printer<'_>) -> fmt::Result {
        printer.multi(key, value)
    }

    fn release(value: &mut Vec<DynamicValue>) {
        *value = Vec::new();
    }
}

impl<R: Record> FieldShape for ObjectField<R> {
    type Storage = Option<Box<R>>;

    const KIND: FieldKind = FieldKind::Object;
    const TYPE: TypeRef = TypeRef::Record(R::NAME);

    fn parse<B: Backend>(item: Option<&B::Node>, record: &str, key: &str) -> Option<Box<R>> {
        parser::object::<B, R>(item, record, key)
    }

    fn serialize<B: Backend>(value: &Option<Box<R>>, object: &mut B::Node, key: &str) {
        serializer::object::<B, R>(object, key, value.as_deref());
    }

    fn print(value: &Option<Box<R>>, key: &str, printer: &mut Printer<'_>) -> fmt::Result {
        printer.object(key, value.as_deref())
    }

    fn release(value: &mut Option<Box<R>>) {
        if let Some(nested) = value.take() {
            (*nested).free();
        }
    }
}

impl<R: Record> FieldShape for ObjectArrayField<R> {
    type Storage = Vec<R>;

    const KIND: FieldKind = FieldKind::ArrayOfObjects;
    const TYPE: TypeRef = TypeRef::Record(R::NAME);

    fn parse<B: Backend>(item: Option<&B::Node>, record: &str, key: &str) -> Vec<R> {
        parser::object_array::<B, R>(item, record, key)
    }

    fn serialize<B: Backend>(value: &Vec<R>, object: &mut B::Node, key: &str) {
        serializer::object_array::<B, R>(object, key, value);
    }

    fn print(value: &Vec<R>, key: &str, printer: &mut Printer<'_>) -> fmt::Result {
        printer.object_array(key, value)
    }

    fn release(value: &mut Vec<R>) {
        // slots are not individually allocated: release their members, then the buffer
        for slot in value.iter_mut() {
            slot.free_members();
        }
        *value = Vec::new();
    }
}
