//! # Document Store
//!
//! In-process document store holding named collections of JSON documents.
//! One `Store` is opened during bootstrap and per-collection handles are
//! injected into the HTTP layer; handles are cheap clones sharing the same
//! underlying data.

mod collection;
mod errors;
mod filter;

pub use collection::{doc_id, Collection, ID_FIELD};
pub use errors::{StoreError, StoreResult};
pub use filter::{FilterExpr, FilterSet};

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Authors collection name.
pub const AUTHORS: &str = "authors";
/// Sections collection name.
pub const SECTIONS: &str = "sections";
/// Books collection name.
pub const BOOKS: &str = "books";

/// Process-wide document store.
///
/// Collections are created lazily on first access. Cloning a `Store` clones
/// the handle, not the data.
#[derive(Clone)]
pub struct Store {
    database: String,
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl Store {
    /// Open the named logical database.
    pub fn open(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The logical database name this store was opened with.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Get a handle to a collection, creating it on first access.
    pub fn collection(&self, name: &str) -> StoreResult<Collection> {
        {
            let collections = self
                .collections
                .read()
                .map_err(|_| StoreError::LockPoisoned(name.to_string()))?;
            if let Some(collection) = collections.get(name) {
                return Ok(collection.clone());
            }
        }

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned(name.to_string()))?;
        Ok(collections
            .entry(name.to_string())
            .or_insert_with(|| Collection::new(name))
            .clone())
    }
}
