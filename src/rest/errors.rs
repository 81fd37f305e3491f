//! API error type and the wire-format failure body.
//!
//! Every handler failure is serialized as `{"message": ..., "status":
//! "Failed"}`. Validation and store failures keep the legacy HTTP 500
//! contract; absence of a document is never an error (handlers answer 200
//! with a null body instead).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::SchemaError;
use crate::store::StoreError;

/// Result type for REST handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Schema validation rejected the document.
    #[error("{0}")]
    Validation(#[from] SchemaError),

    /// Underlying store failure.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// A supplied reference points at no existing document. Only raised
    /// when reference enforcement is switched on.
    #[error("referenced {collection} '{id}' does not exist")]
    MissingReference { collection: String, id: String },
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Legacy contract: validation and store failures are 500.
            ApiError::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,

            // The opt-in reference check is new surface and reports a
            // client error.
            ApiError::MissingReference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Failure response body.
#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub message: String,
    pub status: &'static str,
}

impl From<&ApiError> for FailureBody {
    fn from(err: &ApiError) -> Self {
        Self {
            message: err.to_string(),
            status: "Failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(FailureBody::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(SchemaError::NotAnObject).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Store(StoreError::LockPoisoned("books".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::MissingReference {
                collection: "authors".to_string(),
                id: "a1".to_string()
            }
            .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_failure_body_shape() {
        let err = ApiError::Validation(SchemaError::missing("books", "name"));
        let body = serde_json::to_value(FailureBody::from(&err)).unwrap();
        assert_eq!(body["status"], "Failed");
        assert_eq!(body["message"], "books validation failed: path `name` is required");
    }
}
