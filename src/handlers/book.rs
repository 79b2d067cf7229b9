//! Book handlers: create, read, list, update, delete, page-count patch.

use crate::error::AppError;
use crate::extractors::{ApiJson, BookId};
use crate::model::{
    Book, BookInput, BookPage, ListRequest, PageCountPatch, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT,
};
use crate::response::{success_created, success_ok};
use crate::state::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use std::collections::HashMap;

pub const DELETED_MESSAGE: &str = "data successfully deleted";
pub const PAGE_COUNT_UPDATED_MESSAGE: &str = "page count successfully updated";

/// Build a [`ListRequest`] from raw query parameters. Absent keys take defaults; bad integers are rejected.
pub fn parse_list_request(params: &HashMap<String, String>) -> Result<ListRequest, AppError> {
    let page = parse_u32(params, "page", DEFAULT_PAGE)?;
    if page == 0 {
        return Err(AppError::BadRequest("page must be at least 1".into()));
    }
    let limit = parse_u32(params, "limit", DEFAULT_LIMIT)?.min(MAX_LIMIT);
    let search = params.get("search").filter(|s| !s.is_empty()).cloned();
    if search.as_deref().is_some_and(|s| s.contains('\0')) {
        return Err(AppError::BadRequest("search must not contain NUL bytes".into()));
    }
    Ok(ListRequest {
        page,
        limit,
        search,
    })
}

fn parse_u32(params: &HashMap<String, String>, key: &str, default: u32) -> Result<u32, AppError> {
    match params.get(key) {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| {
            AppError::BadRequest(format!("error while parsing {}: '{}' is not a non-negative integer", key, v))
        }),
    }
}

#[utoipa::path(
    post,
    path = "/book",
    tag = "book",
    request_body = BookInput,
    responses(
        (status = 201, description = "Created book, wrapped in the response envelope", body = Book),
        (status = 400, description = "Malformed or invalid body"),
        (status = 500, description = "Storage failure or timeout")
    )
)]
#[tracing::instrument(name = "create_book", skip_all)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<BookInput>,
) -> Result<impl IntoResponse, AppError> {
    let book = state.bounded(state.service.create(input)).await?;
    Ok(success_created(book))
}

#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "book",
    params(("id" = uuid::Uuid, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book, wrapped in the response envelope", body = Book),
        (status = 400, description = "Id is not a UUID"),
        (status = 404, description = "No book with this id"),
        (status = 500, description = "Storage failure or timeout")
    )
)]
#[tracing::instrument(name = "get_book", skip_all, fields(id = %id))]
pub async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<impl IntoResponse, AppError> {
    let book = state.bounded(state.service.get(id)).await?;
    Ok(success_ok(book))
}

#[utoipa::path(
    get,
    path = "/books",
    tag = "book",
    params(
        ("page" = Option<u32>, Query, description = "1-based page number, default 1"),
        ("limit" = Option<u32>, Query, description = "Page size, default 10, at most 1000"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring of title or author")
    ),
    responses(
        (status = 200, description = "Page of books with the total match count", body = BookPage),
        (status = 400, description = "page or limit is not a valid integer"),
        (status = 500, description = "Storage failure or timeout")
    )
)]
#[tracing::instrument(name = "list_books", skip_all)]
pub async fn list_books(
    State(state): State<AppState>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let req = parse_list_request(&params)?;
    tracing::debug!(page = req.page, limit = req.limit, search = ?req.search, "listing books");
    let page = state.bounded(state.service.list(req)).await?;
    Ok(success_ok(page))
}

#[utoipa::path(
    put,
    path = "/book/{id}",
    tag = "book",
    params(("id" = uuid::Uuid, Path, description = "Book id")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Updated book, wrapped in the response envelope", body = Book),
        (status = 400, description = "Invalid id or body"),
        (status = 404, description = "No book with this id"),
        (status = 500, description = "Storage failure or timeout")
    )
)]
#[tracing::instrument(name = "update_book", skip_all, fields(id = %id))]
pub async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    ApiJson(input): ApiJson<BookInput>,
) -> Result<impl IntoResponse, AppError> {
    let book = state.bounded(state.service.update(id, input)).await?;
    Ok(success_ok(book))
}

#[utoipa::path(
    delete,
    path = "/book/{id}",
    tag = "book",
    params(("id" = uuid::Uuid, Path, description = "Book id")),
    responses(
        (status = 200, description = "Deleted, or there was nothing to delete"),
        (status = 400, description = "Id is not a UUID"),
        (status = 500, description = "Storage failure or timeout")
    )
)]
#[tracing::instrument(name = "delete_book", skip_all, fields(id = %id))]
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<impl IntoResponse, AppError> {
    state.bounded(state.service.delete(id)).await?;
    Ok(success_ok(DELETED_MESSAGE))
}

/// The response carries a confirmation message rather than the patched book.
#[utoipa::path(
    patch,
    path = "/book/{id}",
    tag = "book",
    params(("id" = uuid::Uuid, Path, description = "Book id")),
    request_body = PageCountPatch,
    responses(
        (status = 200, description = "Page count updated"),
        (status = 400, description = "Invalid id or body"),
        (status = 404, description = "No book with this id"),
        (status = 500, description = "Storage failure or timeout")
    )
)]
#[tracing::instrument(name = "patch_page_count", skip_all, fields(id = %id))]
pub async fn patch_page_count(
    State(state): State<AppState>,
    BookId(id): BookId,
    ApiJson(patch): ApiJson<PageCountPatch>,
) -> Result<impl IntoResponse, AppError> {
    state
        .bounded(state.service.update_page_count(id, patch))
        .await?;
    Ok(success_ok(PAGE_COUNT_UPDATED_MESSAGE))
}
