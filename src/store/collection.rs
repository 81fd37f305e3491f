//! Collection handle and per-document operations.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::filter::FilterSet;

/// Primary key field of every document.
pub const ID_FIELD: &str = "_id";

/// Creation timestamp, stamped once on insert.
pub const CREATED_AT_FIELD: &str = "created_at";

/// Last-write timestamp, restamped on every merge.
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// Handle to one named collection of JSON documents.
///
/// Documents are kept in insertion order. Every operation takes the lock for
/// the duration of a single document touch; nothing spans two collections.
#[derive(Clone)]
pub struct Collection {
    name: Arc<str>,
    documents: Arc<RwLock<Vec<Value>>>,
}

impl Collection {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            documents: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// The collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert one document, assigning `_id` when absent and stamping
    /// `created_at`/`updated_at`. Returns the stored document.
    pub fn insert(&self, mut document: Value) -> StoreResult<Value> {
        let obj = document
            .as_object_mut()
            .ok_or_else(|| StoreError::NotAnObject(self.name.to_string()))?;

        if !obj.contains_key(ID_FIELD) {
            obj.insert(
                ID_FIELD.to_string(),
                Value::String(Uuid::new_v4().to_string()),
            );
        }

        let now = Value::String(Utc::now().to_rfc3339());
        obj.insert(CREATED_AT_FIELD.to_string(), now.clone());
        obj.insert(UPDATED_AT_FIELD.to_string(), now);

        let mut docs = self.write()?;
        docs.push(document.clone());
        Ok(document)
    }

    /// All documents, in insertion order.
    pub fn find_all(&self) -> StoreResult<Vec<Value>> {
        Ok(self.read()?.clone())
    }

    /// Find a document by `_id`. Absence is not an error.
    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<Value>> {
        Ok(self
            .read()?
            .iter()
            .find(|doc| doc_id(doc) == Some(id))
            .cloned())
    }

    /// All documents matching every filter, in insertion order.
    pub fn find_matching(&self, filters: &FilterSet) -> StoreResult<Vec<Value>> {
        Ok(self
            .read()?
            .iter()
            .filter(|doc| filters.matches(doc))
            .cloned()
            .collect())
    }

    /// Shallow-merge `updates` over the document with the given id.
    ///
    /// Last write wins; `_id` is immutable and skipped; `updated_at` is
    /// restamped. Returns the post-update document, or `None` when no
    /// document matches.
    pub fn update_merge(&self, id: &str, updates: Value) -> StoreResult<Option<Value>> {
        let mut docs = self.write()?;

        let Some(doc) = docs.iter_mut().find(|doc| doc_id(doc) == Some(id)) else {
            return Ok(None);
        };

        if let (Some(base), Some(patch)) = (doc.as_object_mut(), updates.as_object()) {
            for (key, value) in patch {
                if key == ID_FIELD {
                    continue;
                }
                base.insert(key.clone(), value.clone());
            }
            base.insert(
                UPDATED_AT_FIELD.to_string(),
                Value::String(Utc::now().to_rfc3339()),
            );
        }

        Ok(Some(doc.clone()))
    }

    /// Remove the document with the given id, returning its last state.
    pub fn delete(&self, id: &str) -> StoreResult<Option<Value>> {
        let mut docs = self.write()?;

        let Some(idx) = docs.iter().position(|doc| doc_id(doc) == Some(id)) else {
            return Ok(None);
        };

        Ok(Some(docs.remove(idx)))
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Value>>> {
        self.documents
            .read()
            .map_err(|_| StoreError::LockPoisoned(self.name.to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Value>>> {
        self.documents
            .write()
            .map_err(|_| StoreError::LockPoisoned(self.name.to_string()))
    }
}

/// Extract the `_id` of a document when present.
pub fn doc_id(document: &Value) -> Option<&str> {
    document.get(ID_FIELD).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection() -> Collection {
        Collection::new("books")
    }

    #[test]
    fn test_insert_assigns_id_and_timestamps() {
        let coll = collection();
        let doc = coll.insert(json!({"name": "Dune", "body": "..."})).unwrap();

        assert!(doc.get(ID_FIELD).and_then(Value::as_str).is_some());
        assert!(doc.get(CREATED_AT_FIELD).is_some());
        assert!(doc.get(UPDATED_AT_FIELD).is_some());
        assert_eq!(doc["name"], "Dune");
    }

    #[test]
    fn test_insert_keeps_caller_supplied_id() {
        let coll = collection();
        let doc = coll.insert(json!({"_id": "fixed", "name": "Dune"})).unwrap();
        assert_eq!(doc[ID_FIELD], "fixed");
    }

    #[test]
    fn test_insert_rejects_non_object() {
        let coll = collection();
        let result = coll.insert(json!(["not", "an", "object"]));
        assert!(matches!(result, Err(StoreError::NotAnObject(_))));
    }

    #[test]
    fn test_find_all_preserves_insertion_order() {
        let coll = collection();
        for i in 0..5 {
            coll.insert(json!({"_id": format!("id-{}", i), "idx": i}))
                .unwrap();
        }

        let all = coll.find_all().unwrap();
        let ids: Vec<_> = all.iter().filter_map(doc_id).collect();
        assert_eq!(ids, vec!["id-0", "id-1", "id-2", "id-3", "id-4"]);
    }

    #[test]
    fn test_find_by_id_absent_is_none() {
        let coll = collection();
        assert!(coll.find_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_update_merge_keeps_unsupplied_fields() {
        let coll = collection();
        coll.insert(json!({"_id": "b1", "name": "Dune", "body": "Old"}))
            .unwrap();

        let updated = coll
            .update_merge("b1", json!({"body": "New"}))
            .unwrap()
            .unwrap();

        assert_eq!(updated["name"], "Dune");
        assert_eq!(updated["body"], "New");
    }

    #[test]
    fn test_update_merge_ignores_id_changes() {
        let coll = collection();
        coll.insert(json!({"_id": "b1", "name": "Dune"})).unwrap();

        let updated = coll
            .update_merge("b1", json!({"_id": "hijack", "name": "Dune II"}))
            .unwrap()
            .unwrap();

        assert_eq!(updated[ID_FIELD], "b1");
        assert_eq!(updated["name"], "Dune II");
    }

    #[test]
    fn test_update_merge_absent_is_none() {
        let coll = collection();
        assert!(coll
            .update_merge("missing", json!({"name": "X"}))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_delete_returns_last_state_then_gone() {
        let coll = collection();
        coll.insert(json!({"_id": "b1", "name": "Dune"})).unwrap();

        let removed = coll.delete("b1").unwrap().unwrap();
        assert_eq!(removed["name"], "Dune");

        assert!(coll.find_by_id("b1").unwrap().is_none());
        assert!(coll.delete("b1").unwrap().is_none());
    }
}
