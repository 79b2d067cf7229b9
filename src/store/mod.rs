//! Storage capability for book records, plus database bootstrap helpers.

mod memory;
mod postgres;

pub use memory::MemoryBookStore;
pub use postgres::{ensure_database_exists, PgBookStore};

use crate::error::StoreError;
use crate::model::{Book, BookInput, BookPage, ListRequest};
use async_trait::async_trait;
use uuid::Uuid;

/// One method per book operation. Implementations hold no business rules.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Inserts a new row under a freshly generated id and returns that id.
    async fn create(&self, input: &BookInput) -> Result<Uuid, StoreError>;

    /// Fails with [`StoreError::NotFound`] when no row has this id.
    async fn get(&self, id: Uuid) -> Result<Book, StoreError>;

    async fn list(&self, req: &ListRequest) -> Result<BookPage, StoreError>;

    /// Overwrites every mutable field. Returns the id whether or not a row matched.
    async fn update(&self, id: Uuid, input: &BookInput) -> Result<Uuid, StoreError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn update_page_count(&self, id: Uuid, page_count: i32) -> Result<Uuid, StoreError>;

    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}
