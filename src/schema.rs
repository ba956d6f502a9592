use crate::error::{MasonError, TreeError};
use crate::types::TypeRef;
use serde::Serialize;
use std::fmt;

/// The five shapes a record field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Scalar,
    Array,
    MultiArray,
    Object,
    ArrayOfObjects,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Scalar => "scalar",
            FieldKind::Array => "array",
            FieldKind::MultiArray => "multi_array",
            FieldKind::Object => "object",
            FieldKind::ArrayOfObjects => "array_of_objects",
        };
        f.write_str(name)
    }
}

/// One entry of a record's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// The JSON key.
    pub name: &'static str,
    pub kind: FieldKind,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// The field table of one record type, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl Schema {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Names of the record types this schema nests, in declaration order, without
    /// duplicates.
    #[must_use]
    pub fn nested_records(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        for field in self.fields {
            if let TypeRef::Record(name) = field.ty {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Renders the field table as pretty JSON.
    ///
    /// # Errors
    /// Returns `TreeError::Stringify` if serialization fails.
    pub fn to_json(&self) -> Result<String, MasonError> {
        serde_json::to_string_pretty(self).map_err(|err| {
            TreeError::Stringify {
                format: "json",
                message: err.to_string(),
            }
            .into()
        })
    }
}
