//! The fixed set of schemas the service serves.

use std::collections::HashMap;

use crate::store::{AUTHORS, BOOKS, SECTIONS};

use super::types::{CollectionSchema, FieldDef};

/// Holds the schema for every known collection.
#[derive(Debug, Clone)]
pub struct SchemaCatalog {
    schemas: HashMap<String, CollectionSchema>,
}

impl SchemaCatalog {
    /// The authors/sections/books catalog.
    pub fn bookshelf() -> Self {
        let mut schemas = HashMap::new();

        for schema in [
            CollectionSchema::new(
                AUTHORS,
                vec![
                    FieldDef::required_string("first_name"),
                    FieldDef::required_string("last_name"),
                ],
            ),
            CollectionSchema::new(SECTIONS, vec![FieldDef::required_string("sectionName")]),
            CollectionSchema::new(
                BOOKS,
                vec![
                    FieldDef::required_string("name"),
                    FieldDef::required_string("body"),
                    FieldDef::required_reference("author_id", AUTHORS),
                    FieldDef::required_reference("section_id", SECTIONS),
                    FieldDef::optional_bool("checked"),
                ],
            ),
        ] {
            schemas.insert(schema.collection.clone(), schema);
        }

        Self { schemas }
    }

    /// Look up a collection schema by name.
    pub fn get(&self, collection: &str) -> Option<&CollectionSchema> {
        self.schemas.get(collection)
    }
}
