//! Schema validator for incoming documents.
//!
//! Validation semantics:
//! - inserts: every required field present and non-null, required strings
//!   non-empty, declared fields type-checked
//! - patches: only the supplied declared fields are type-checked; the merged
//!   result is not re-validated
//!
//! Undeclared fields are never rejected; the store is schema-flexible.
//! The validator does not mutate documents and is deterministic.

use serde_json::Value;

use super::catalog::SchemaCatalog;
use super::errors::{SchemaError, SchemaResult};
use super::types::{CollectionSchema, FieldDef, FieldType};

/// Validator backed by the schema catalog.
pub struct SchemaValidator<'a> {
    catalog: &'a SchemaCatalog,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(catalog: &'a SchemaCatalog) -> Self {
        Self { catalog }
    }

    /// Validates a document before insert.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the collection is unknown, the body is not a
    /// JSON object, a required field is missing or empty, or a declared
    /// field carries the wrong type.
    pub fn validate_insert(&self, collection: &str, document: &Value) -> SchemaResult<()> {
        let schema = self.schema(collection)?;
        let obj = document.as_object().ok_or(SchemaError::NotAnObject)?;

        for field in &schema.fields {
            match obj.get(&field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        return Err(SchemaError::missing(&schema.collection, &field.name));
                    }
                }
                Some(value) => check_field(schema, field, value)?,
            }
        }

        Ok(())
    }

    /// Validates a partial update. Only the supplied declared fields are
    /// checked.
    pub fn validate_patch(&self, collection: &str, patch: &Value) -> SchemaResult<()> {
        let schema = self.schema(collection)?;
        let obj = patch.as_object().ok_or(SchemaError::NotAnObject)?;

        for (name, value) in obj {
            if value.is_null() {
                continue;
            }
            if let Some(field) = schema.field(name) {
                check_field(schema, field, value)?;
            }
        }

        Ok(())
    }

    fn schema(&self, collection: &str) -> SchemaResult<&CollectionSchema> {
        self.catalog
            .get(collection)
            .ok_or_else(|| SchemaError::UnknownCollection(collection.to_string()))
    }
}

fn check_field(schema: &CollectionSchema, field: &FieldDef, value: &Value) -> SchemaResult<()> {
    match &field.field_type {
        FieldType::String | FieldType::Reference { .. } => {
            let text = value.as_str().ok_or_else(|| {
                SchemaError::type_mismatch(
                    &schema.collection,
                    &field.name,
                    field.field_type.type_name(),
                    json_type_name(value),
                )
            })?;
            if field.required && text.is_empty() {
                return Err(SchemaError::empty(&schema.collection, &field.name));
            }
        }
        FieldType::Bool => {
            if !value.is_boolean() {
                return Err(SchemaError::type_mismatch(
                    &schema.collection,
                    &field.name,
                    "bool",
                    json_type_name(value),
                ));
            }
        }
    }
    Ok(())
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
