//! Reference expansion ("populate").
//!
//! Replaces a stored reference id with the full referenced document in read
//! responses. An id that resolves to nothing is left in place as the bare
//! value; dangling references are legal.

use serde_json::Value;

use crate::store::{Collection, StoreResult};

/// Expand one reference field across a batch of documents.
pub fn populate(documents: &mut [Value], field: &str, target: &Collection) -> StoreResult<()> {
    for document in documents.iter_mut() {
        populate_one(document, field, target)?;
    }
    Ok(())
}

fn populate_one(document: &mut Value, field: &str, target: &Collection) -> StoreResult<()> {
    let Some(id) = document.get(field).and_then(Value::as_str).map(String::from) else {
        return Ok(());
    };

    if let Some(resolved) = target.find_by_id(&id)? {
        if let Some(obj) = document.as_object_mut() {
            obj.insert(field.to_string(), resolved);
        }
    }

    Ok(())
}
