//! Indented diagnostic dump of a record.
//!
//! The layout mirrors the schema: one `key: value` line per scalar, `key[n]: [...]` for
//! arrays, and nested records indented by two more columns. It is meant for humans and
//! is not a stable format.

use crate::record::Record;
use crate::types::Scalar;
use crate::value::DynamicValue;
use std::fmt;

const INDENT_WIDTH: usize = 2;

pub struct Printer<'a> {
    out: &'a mut dyn fmt::Write,
    indent: usize,
}

impl<'a> Printer<'a> {
    pub fn new(out: &'a mut dyn fmt::Write, indent: usize) -> Self {
        Self { out, indent }
    }

    fn pad(&mut self) -> fmt::Result {
        write!(self.out, "{:width$}", "", width = self.indent)
    }

    pub fn scalar<T: Scalar>(&mut self, key: &str, value: &T) -> fmt::Result {
        self.pad()?;
        write!(self.out, "{key}: ")?;
        value.write_value(self.out)?;
        writeln!(self.out)
    }

    pub fn array<T: Scalar>(&mut self, key: &str, values: &[T]) -> fmt::Result {
        self.pad()?;
        write!(self.out, "{key}[{}]: [", values.len())?;
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
            }
            value.write_value(self.out)?;
        }
        writeln!(self.out, "]")
    }

    pub fn multi(&mut self, key: &str, values: &[DynamicValue]) -> fmt::Result {
        self.pad()?;
        write!(self.out, "{key}[{}]: [", values.len())?;
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
            }
            write!(self.out, "{value}")?;
        }
        writeln!(self.out, "]")
    }

    pub fn object<R: Record>(&mut self, key: &str, value: Option<&R>) -> fmt::Result {
        self.pad()?;
        write!(self.out, "{key}: ")?;
        match value {
            None => writeln!(self.out, "null"),
            Some(nested) => self.body(nested),
        }
    }

    pub fn object_array<R: Record>(&mut self, key: &str, values: &[R]) -> fmt::Result {
        self.pad()?;
        if values.is_empty() {
            return writeln!(self.out, "{key}[0]: []");
        }
        writeln!(self.out, "{key}[{}]: [", values.len())?;
        self.indent += INDENT_WIDTH;
        for value in values {
            self.record(value)?;
        }
        self.indent -= INDENT_WIDTH;
        self.pad()?;
        writeln!(self.out, "]")
    }

    /// Writes `Name {`, the fields one level deeper, and the closing brace. The opening
    /// line is not padded so it can follow a key.
    fn body<R: Record>(&mut self, record: &R) -> fmt::Result {
        writeln!(self.out, "{} {{", R::NAME)?;
        self.indent += INDENT_WIDTH;
        record.print_fields(self)?;
        self.indent -= INDENT_WIDTH;
        self.pad()?;
        writeln!(self.out, "}}")
    }

    pub fn record<R: Record>(&mut self, record: &R) -> fmt::Result {
        self.pad()?;
        self.body(record)
    }
}

/// Dumps `record` into `out`, starting at `indent` columns.
pub fn write_record<R: Record>(out: &mut dyn fmt::Write, record: &R, indent: usize) -> fmt::Result {
    Printer::new(out, indent).record(record)
}
