use crate::backend::Backend;
use crate::error::MasonError;
use crate::printer::{self, Printer};
use crate::schema::{FieldDescriptor, Schema};
use crate::{parser, serializer};
use std::fmt;

/// A record type generated by [`record!`](crate::record).
///
/// A record is only ever produced by parsing, is never mutated by this crate once
/// built, and is read-only to the serializer. The `*_fields` methods are the generated
/// per-field walks; everything else is provided on top of them.
pub trait Record: Default + Clone + fmt::Debug + PartialEq {
    const NAME: &'static str;

    /// One descriptor per field, in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    #[doc(hidden)]
    fn parse_fields<B: Backend>(node: &B::Node) -> Self;

    #[doc(hidden)]
    fn serialize_fields<B: Backend>(&self, object: &mut B::Node);

    #[doc(hidden)]
    fn print_fields(&self, printer: &mut Printer<'_>) -> fmt::Result;

    /// Releases every owned sub-resource (strings, buffers, nested records, captured
    /// sub-trees) and leaves the record at its zero value. The record itself stays
    /// usable, which is what array-of-objects slots rely on.
    fn free_members(&mut self);

    /// Releases the owned sub-resources, then the record itself.
    fn free(mut self) {
        self.free_members();
    }

    #[must_use]
    fn schema() -> Schema {
        Schema {
            name: Self::NAME,
            fields: Self::FIELDS,
        }
    }

    /// Builds a record from a tree node. Missing keys and values of the wrong JSON type
    /// leave their fields at the zero value; a node that is not an object therefore
    /// yields an all-default record.
    fn from_tree<B: Backend>(node: &B::Node) -> Self {
        parser::parse_record::<B, Self>(node)
    }

    /// Parses text with backend `B`, builds the record, and releases the tree.
    ///
    /// # Errors
    /// Returns a `ParseError` if the backend rejects the text.
    fn from_text<B: Backend>(text: &str) -> Result<Self, MasonError> {
        parser::parse_text::<B, Self>(text)
    }

    /// Like [`Record::from_text`] for a length-delimited buffer.
    ///
    /// # Errors
    /// Returns a `ParseError` if the backend rejects the buffer.
    fn from_slice<B: Backend>(bytes: &[u8]) -> Result<Self, MasonError> {
        parser::parse_slice::<B, Self>(bytes)
    }

    /// Builds a fresh object node holding every field.
    fn to_tree<B: Backend>(&self) -> B::Node {
        serializer::serialize_record::<B, Self>(self)
    }

    /// Serializes and stringifies in one step.
    ///
    /// # Errors
    /// Returns a `TreeError::Stringify` if the backend cannot render the tree.
    fn to_text<B: Backend>(&self) -> Result<String, MasonError> {
        let tree = self.to_tree::<B>();
        let text = B::stringify(&tree);
        B::delete(tree);
        text
    }

    /// Writes the diagnostic dump, every line indented by `indent` columns.
    ///
    /// # Errors
    /// Propagates errors from `out`.
    fn print_indent(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        printer::write_record(out, self, indent)
    }

    /// Writes the diagnostic dump to stdout.
    fn print(&self) {
        let mut out = String::new();
        if self.print_indent(&mut out, 0).is_ok() {
            print!("{out}");
        }
    }
}
