//! Error types for the document store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A writer panicked while holding a collection lock.
    #[error("collection '{0}' lock poisoned")]
    LockPoisoned(String),

    /// Document bodies must be JSON objects.
    #[error("document for collection '{0}' is not a JSON object")]
    NotAnObject(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::NotAnObject("books".to_string()).to_string(),
            "document for collection 'books' is not a JSON object"
        );
        assert_eq!(
            StoreError::LockPoisoned("books".to_string()).to_string(),
            "collection 'books' lock poisoned"
        );
    }
}
