//! Shared state injected into every handler.
//!
//! Built once at bootstrap from the opened store; no ambient globals.

use crate::schema::SchemaCatalog;
use crate::store::{Collection, Store, StoreResult, AUTHORS, BOOKS, SECTIONS};

use super::config::ServerConfig;

/// Per-collection handles plus the schema catalog.
pub struct AppState {
    pub authors: Collection,
    pub sections: Collection,
    pub books: Collection,
    pub schemas: SchemaCatalog,
    pub enforce_references: bool,
}

impl AppState {
    /// Build the handler state from an opened store.
    pub fn new(store: &Store, config: &ServerConfig) -> StoreResult<Self> {
        Ok(Self {
            authors: store.collection(AUTHORS)?,
            sections: store.collection(SECTIONS)?,
            books: store.collection(BOOKS)?,
            schemas: SchemaCatalog::bookshelf(),
            enforce_references: config.enforce_references,
        })
    }

    /// Resolve a collection handle by name. Used by the reference checks,
    /// which get target collection names from the schema catalog.
    pub fn collection_by_name(&self, name: &str) -> Option<&Collection> {
        match name {
            AUTHORS => Some(&self.authors),
            SECTIONS => Some(&self.sections),
            BOOKS => Some(&self.books),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_exposes_all_collections() {
        let store = Store::open("book");
        let state = AppState::new(&store, &ServerConfig::default()).unwrap();

        assert_eq!(state.authors.name(), AUTHORS);
        assert_eq!(state.sections.name(), SECTIONS);
        assert_eq!(state.books.name(), BOOKS);
        assert!(state.collection_by_name("comments").is_none());
    }
}
