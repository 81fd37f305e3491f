//! Error types for schema validation.

use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// No schema is declared for this collection.
    #[error("unknown collection '{0}'")]
    UnknownCollection(String),

    /// Document bodies must be JSON objects.
    #[error("document must be a JSON object")]
    NotAnObject,

    /// A required field is absent or null.
    #[error("{collection} validation failed: path `{field}` is required")]
    MissingField { collection: String, field: String },

    /// A required string field is present but empty.
    #[error("{collection} validation failed: path `{field}` must not be empty")]
    EmptyField { collection: String, field: String },

    /// A declared field carries a value of the wrong type.
    #[error("{collection} validation failed: `{field}` expects {expected}, got {actual}")]
    TypeMismatch {
        collection: String,
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl SchemaError {
    pub fn missing(collection: &str, field: &str) -> Self {
        Self::MissingField {
            collection: collection.to_string(),
            field: field.to_string(),
        }
    }

    pub fn empty(collection: &str, field: &str) -> Self {
        Self::EmptyField {
            collection: collection.to_string(),
            field: field.to_string(),
        }
    }

    pub fn type_mismatch(
        collection: &str,
        field: &str,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            collection: collection.to_string(),
            field: field.to_string(),
            expected,
            actual,
        }
    }
}
