//! Book routes.
//!
//! Beyond the CRUD set, books expose filtered list endpoints by section, by
//! author, by author+section, and by checked flag. List responses expand the
//! author/section references into the full documents; the by-section listing
//! expands only the author.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::schema::SchemaValidator;
use crate::store::{FilterExpr, FilterSet, BOOKS};

use super::errors::{ApiError, ApiResult};
use super::populate::populate;
use super::state::AppState;

/// Build the /books router.
///
/// The static /books/checked segment takes priority over the /books/{id}
/// capture.
pub fn book_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/books", post(create_book))
        .route("/books", get(list_books))
        .route("/books/checked", get(list_books_by_checked))
        .route("/books/{id}", get(get_book))
        .route("/books/{id}", patch(update_book))
        .route("/books/{id}", delete(delete_book))
        .route("/books/sectionId/{section_id}", get(list_books_by_section))
        .route(
            "/books/sectionId/{section_id}/authorId/{author_id}",
            get(list_books_by_section_and_author),
        )
        .route("/books/authorId/{author_id}", get(list_books_by_author))
        .with_state(state)
}

async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    SchemaValidator::new(&state.schemas).validate_insert(BOOKS, &body)?;
    check_references(&state, &body)?;
    let created = state.books.insert(body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_books(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let mut books = state.books.find_all()?;
    populate(&mut books, "author_id", &state.authors)?;
    populate(&mut books, "section_id", &state.sections)?;
    Ok(Json(Value::Array(books)))
}

async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let book = state.books.find_by_id(&id)?;
    Ok(Json(book.unwrap_or(Value::Null)))
}

async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    SchemaValidator::new(&state.schemas).validate_patch(BOOKS, &body)?;
    check_references(&state, &body)?;
    let updated = state.books.update_merge(&id, body)?;
    Ok(Json(updated.unwrap_or(Value::Null)))
}

async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let removed = state.books.delete(&id)?;
    Ok(Json(removed.unwrap_or(Value::Null)))
}

async fn list_books_by_section(
    State(state): State<Arc<AppState>>,
    Path(section_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let filter = FilterSet::new().and(FilterExpr::eq("section_id", section_id));
    let mut books = state.books.find_matching(&filter)?;
    populate(&mut books, "author_id", &state.authors)?;
    Ok(Json(Value::Array(books)))
}

async fn list_books_by_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let filter = FilterSet::new().and(FilterExpr::eq("author_id", author_id));
    let mut books = state.books.find_matching(&filter)?;
    populate(&mut books, "author_id", &state.authors)?;
    populate(&mut books, "section_id", &state.sections)?;
    Ok(Json(Value::Array(books)))
}

async fn list_books_by_section_and_author(
    State(state): State<Arc<AppState>>,
    Path((section_id, author_id)): Path<(String, String)>,
) -> ApiResult<Json<Value>> {
    let filter = FilterSet::new()
        .and(FilterExpr::eq("author_id", author_id))
        .and(FilterExpr::eq("section_id", section_id));
    let mut books = state.books.find_matching(&filter)?;
    populate(&mut books, "author_id", &state.authors)?;
    populate(&mut books, "section_id", &state.sections)?;
    Ok(Json(Value::Array(books)))
}

/// Query parameters for /books/checked. The flag defaults to true: the
/// endpoint lists checked books unless told otherwise.
#[derive(Debug, Deserialize)]
struct CheckedQuery {
    #[serde(default = "default_checked")]
    checked: bool,
}

fn default_checked() -> bool {
    true
}

async fn list_books_by_checked(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CheckedQuery>,
) -> ApiResult<Json<Value>> {
    let filter = FilterSet::new().and(FilterExpr::eq("checked", query.checked));
    let mut books = state.books.find_matching(&filter)?;
    populate(&mut books, "author_id", &state.authors)?;
    populate(&mut books, "section_id", &state.sections)?;
    Ok(Json(Value::Array(books)))
}

/// When enforcement is on, every reference field supplied in the body must
/// resolve to an existing document. Off by default.
fn check_references(state: &AppState, body: &Value) -> ApiResult<()> {
    if !state.enforce_references {
        return Ok(());
    }

    let Some(schema) = state.schemas.get(BOOKS) else {
        return Ok(());
    };

    for (field, target_name) in schema.references() {
        let Some(id) = body.get(field).and_then(Value::as_str) else {
            continue;
        };
        let Some(target) = state.collection_by_name(target_name) else {
            continue;
        };
        if target.find_by_id(id)?.is_none() {
            return Err(ApiError::MissingReference {
                collection: target_name.to_string(),
                id: id.to_string(),
            });
        }
    }

    Ok(())
}
