//! Author routes.
//!
//! Plain CRUD; absence of a document answers 200 with a null body, matching
//! the system's not-found-is-success contract.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::schema::SchemaValidator;
use crate::store::AUTHORS;

use super::errors::ApiResult;
use super::state::AppState;

/// Build the /authors router.
pub fn author_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/authors", post(create_author))
        .route("/authors", get(list_authors))
        .route("/authors/{id}", get(get_author))
        .route("/authors/{id}", patch(update_author))
        .route("/authors/{id}", delete(delete_author))
        .with_state(state)
}

async fn create_author(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    SchemaValidator::new(&state.schemas).validate_insert(AUTHORS, &body)?;
    let created = state.authors.insert(body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_authors(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let authors = state.authors.find_all()?;
    Ok(Json(Value::Array(authors)))
}

async fn get_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let author = state.authors.find_by_id(&id)?;
    Ok(Json(author.unwrap_or(Value::Null)))
}

async fn update_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    SchemaValidator::new(&state.schemas).validate_patch(AUTHORS, &body)?;
    let updated = state.authors.update_merge(&id, body)?;
    Ok(Json(updated.unwrap_or(Value::Null)))
}

async fn delete_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let removed = state.authors.delete(&id)?;
    Ok(Json(removed.unwrap_or(Value::Null)))
}
