//! Field and collection schema definitions.

use serde::{Deserialize, Serialize};

/// Supported field types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Boolean
    Bool,
    /// Id of a document in another collection
    Reference {
        /// Target collection name
        collection: String,
    },
}

impl FieldType {
    /// Returns the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Bool => "bool",
            FieldType::Reference { .. } => "reference",
        }
    }
}

/// A named field with its type and required-ness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(flatten)]
    pub field_type: FieldType,
    pub required: bool,
}

impl FieldDef {
    /// Create a required string field.
    pub fn required_string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::String,
            required: true,
        }
    }

    /// Create an optional bool field.
    pub fn optional_bool(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Bool,
            required: false,
        }
    }

    /// Create a required reference field pointing at another collection.
    pub fn required_reference(name: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Reference {
                collection: collection.into(),
            },
            required: true,
        }
    }
}

/// Schema for one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSchema {
    pub collection: String,
    pub fields: Vec<FieldDef>,
}

impl CollectionSchema {
    pub fn new(collection: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            collection: collection.into(),
            fields,
        }
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The reference fields of this schema as (field name, target collection).
    pub fn references(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().filter_map(|f| match &f.field_type {
            FieldType::Reference { collection } => Some((f.name.as_str(), collection.as_str())),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_constructors() {
        let f = FieldDef::required_string("name");
        assert!(f.required);
        assert_eq!(f.field_type, FieldType::String);

        let f = FieldDef::optional_bool("checked");
        assert!(!f.required);
        assert_eq!(f.field_type, FieldType::Bool);
    }

    #[test]
    fn test_references_iterator() {
        let schema = CollectionSchema::new(
            "books",
            vec![
                FieldDef::required_string("name"),
                FieldDef::required_reference("author_id", "authors"),
                FieldDef::required_reference("section_id", "sections"),
            ],
        );

        let refs: Vec<_> = schema.references().collect();
        assert_eq!(refs, vec![("author_id", "authors"), ("section_id", "sections")]);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(FieldType::String.type_name(), "string");
        assert_eq!(FieldType::Bool.type_name(), "bool");
        assert_eq!(
            FieldType::Reference {
                collection: "authors".to_string()
            }
            .type_name(),
            "reference"
        );
    }
}
