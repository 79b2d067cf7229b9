//! PostgreSQL-backed [`BookStore`].

use super::BookStore;
use crate::error::{AppError, StoreError};
use crate::model::{Book, BookInput, BookPage, ListRequest};
use crate::sql::{
    count_books, select_books_page, DELETE_BOOK, INSERT_BOOK, SELECT_BOOK_BY_ID, UPDATE_BOOK,
    UPDATE_PAGE_COUNT,
};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use uuid::Uuid;

/// Owns a handle to the shared connection pool; clones share the pool.
#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        PgBookStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn create(&self, input: &BookInput) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        tracing::debug!(sql = INSERT_BOOK, %id, "query");
        sqlx::query(INSERT_BOOK)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author_name)
            .bind(input.page_count)
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Book, StoreError> {
        tracing::debug!(sql = SELECT_BOOK_BY_ID, %id, "query");
        let book = sqlx::query_as::<_, Book>(SELECT_BOOK_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(book)
    }

    async fn list(&self, req: &ListRequest) -> Result<BookPage, StoreError> {
        // text columns cannot hold NUL, and PostgreSQL rejects it as a parameter
        if req.search.as_deref().is_some_and(|s| s.contains('\0')) {
            return Ok(BookPage::empty());
        }
        let count_q = count_books(req);
        tracing::debug!(sql = %count_q.sql, params = ?count_q.params, "query");
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_q.sql);
        for p in count_q.params {
            count_query = count_query.bind(p);
        }
        let count = count_query.fetch_one(&self.pool).await?;

        let page_q = select_books_page(req);
        tracing::debug!(sql = %page_q.sql, params = ?page_q.params, "query");
        let mut page_query = sqlx::query_as::<_, Book>(&page_q.sql);
        for p in page_q.params {
            page_query = page_query.bind(p);
        }
        let books = page_query.fetch_all(&self.pool).await?;
        Ok(BookPage { books, count })
    }

    async fn update(&self, id: Uuid, input: &BookInput) -> Result<Uuid, StoreError> {
        tracing::debug!(sql = UPDATE_BOOK, %id, "query");
        sqlx::query(UPDATE_BOOK)
            .bind(&input.title)
            .bind(&input.author_name)
            .bind(input.page_count)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        tracing::debug!(sql = DELETE_BOOK, %id, "query");
        let result = sqlx::query(DELETE_BOOK).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_page_count(&self, id: Uuid, page_count: i32) -> Result<Uuid, StoreError> {
        tracing::debug!(sql = UPDATE_PAGE_COUNT, %id, page_count, "query");
        sqlx::query(UPDATE_PAGE_COUNT)
            .bind(page_count)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create the target database if missing. Connects to the `postgres` maintenance database to check.
pub async fn ensure_database_exists(opts: &PgConnectOptions) -> Result<(), AppError> {
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let admin = opts.clone().database("postgres");
    let mut conn = admin.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
