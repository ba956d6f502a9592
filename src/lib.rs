#[macro_use]
mod macros;

pub mod api;
pub mod backend;
pub mod error;
pub mod parser;
pub mod printer;
pub mod record;
pub mod schema;
pub mod serializer;
pub mod shape;
pub mod tree;
pub mod types;
pub mod utils;
pub mod value;

pub use api::{from_json, from_yaml, to_json, to_yaml};
pub use backend::{Backend, JsonBackend, NodeKind, YamlBackend};
pub use error::MasonError;
pub use record::Record;
pub use schema::{FieldDescriptor, FieldKind, Schema};
pub use types::{BaseKind, Scalar, TypeRef};
pub use value::{DynamicKind, DynamicValue};
