//! # Domain Schemas
//!
//! Structural definitions for each collection: field types, required-ness,
//! and cross-collection references (book -> author, book -> section).
//! Validation is presence-and-type only; the store itself stays
//! schema-flexible and undeclared fields pass through untouched.

mod catalog;
mod errors;
mod types;
mod validator;

pub use catalog::SchemaCatalog;
pub use errors::{SchemaError, SchemaResult};
pub use types::{CollectionSchema, FieldDef, FieldType};
pub use validator::SchemaValidator;
