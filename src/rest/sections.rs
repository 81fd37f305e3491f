//! Section routes. Same CRUD set as authors.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::schema::SchemaValidator;
use crate::store::SECTIONS;

use super::errors::ApiResult;
use super::state::AppState;

/// Build the /sections router.
pub fn section_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sections", post(create_section))
        .route("/sections", get(list_sections))
        .route("/sections/{id}", get(get_section))
        .route("/sections/{id}", patch(update_section))
        .route("/sections/{id}", delete(delete_section))
        .with_state(state)
}

async fn create_section(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    SchemaValidator::new(&state.schemas).validate_insert(SECTIONS, &body)?;
    let created = state.sections.insert(body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_sections(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let sections = state.sections.find_all()?;
    Ok(Json(Value::Array(sections)))
}

async fn get_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let section = state.sections.find_by_id(&id)?;
    Ok(Json(section.unwrap_or(Value::Null)))
}

async fn update_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    SchemaValidator::new(&state.schemas).validate_patch(SECTIONS, &body)?;
    let updated = state.sections.update_merge(&id, body)?;
    Ok(Json(updated.unwrap_or(Value::Null)))
}

async fn delete_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let removed = state.sections.delete(&id)?;
    Ok(Json(removed.unwrap_or(Value::Null)))
}
