//! Book record and request/response payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author_name: String,
    pub page_count: i32,
}

/// Body for create and full update. The id always comes from the path or the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookInput {
    pub title: String,
    pub author_name: String,
    pub page_count: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageCountPatch {
    pub page_count: i32,
}

/// One page of a list query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookPage {
    pub books: Vec<Book>,
    /// Total rows matching the search, across all pages.
    pub count: i64,
}

impl BookPage {
    pub fn empty() -> Self {
        BookPage {
            books: Vec::new(),
            count: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRequest {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
}

impl Default for ListRequest {
    fn default() -> Self {
        ListRequest {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
        }
    }
}

impl ListRequest {
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.limit)
    }
}
