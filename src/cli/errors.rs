//! Error types for the CLI bootstrap.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI bootstrap errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Store failed during bootstrap.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Bind or serve failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
