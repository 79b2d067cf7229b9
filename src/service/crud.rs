//! Book operations over an injected [`BookStore`].

use super::RequestValidator;
use crate::error::{AppError, StoreError};
use crate::model::{Book, BookInput, BookPage, ListRequest, PageCountPatch};
use crate::store::BookStore;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        BookService { store }
    }

    /// Insert, then read back by the generated id. A failed read-back fails the call.
    pub async fn create(&self, input: BookInput) -> Result<Book, AppError> {
        RequestValidator::validate(&input)?;
        let id = self.store.create(&input).await?;
        tracing::info!(%id, "book created");
        self.read(id).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Book, AppError> {
        self.read(id).await
    }

    /// A "no rows" outcome is an empty page, not an error.
    pub async fn list(&self, req: ListRequest) -> Result<BookPage, AppError> {
        match self.store.list(&req).await {
            Ok(page) => Ok(page),
            Err(StoreError::NotFound) => Ok(BookPage::empty()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update(&self, id: Uuid, input: BookInput) -> Result<Book, AppError> {
        RequestValidator::validate(&input)?;
        let id = self.store.update(id, &input).await?;
        self.read(id).await
    }

    /// Returns whether a row existed. Deleting an unknown id is not an error.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let existed = self.store.delete(id).await?;
        tracing::info!(%id, existed, "book deleted");
        Ok(existed)
    }

    pub async fn update_page_count(&self, id: Uuid, patch: PageCountPatch) -> Result<Book, AppError> {
        RequestValidator::validate_patch(&patch)?;
        let id = self.store.update_page_count(id, patch.page_count).await?;
        self.read(id).await
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await?;
        Ok(())
    }

    async fn read(&self, id: Uuid) -> Result<Book, AppError> {
        self.store.get(id).await.map_err(|e| match e {
            StoreError::NotFound => AppError::NotFound(format!("book {}", id)),
            other => other.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBookStore;
    use async_trait::async_trait;

    fn service() -> BookService {
        BookService::new(Arc::new(MemoryBookStore::new()))
    }

    fn input(title: &str, author: &str, pages: i32) -> BookInput {
        BookInput {
            title: title.into(),
            author_name: author.into(),
            page_count: pages,
        }
    }

    #[tokio::test]
    async fn create_reads_back_the_row() {
        let svc = service();
        let book = svc.create(input("Dune", "Frank Herbert", 412)).await.unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(svc.get(book.id).await.unwrap(), book);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let err = service().get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn patch_changes_only_page_count() {
        let svc = service();
        let book = svc.create(input("Emma", "Jane Austen", 300)).await.unwrap();
        let patched = svc
            .update_page_count(book.id, PageCountPatch { page_count: 474 })
            .await
            .unwrap();
        assert_eq!(patched.page_count, 474);
        assert_eq!(patched.title, book.title);
        assert_eq!(patched.author_name, book.author_name);
    }

    #[tokio::test]
    async fn update_of_unknown_id_fails_on_read_back() {
        let err = service()
            .update(Uuid::new_v4(), input("X", "Y", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_store() {
        let svc = service();
        assert!(matches!(
            svc.create(input("Dune", "Frank Herbert", -1)).await,
            Err(AppError::Validation(_))
        ));
        let page = svc.list(ListRequest::default()).await.unwrap();
        assert_eq!(page.count, 0);
    }

    /// Store whose inserts succeed but whose reads always fail.
    struct BrokenReads;

    #[async_trait]
    impl BookStore for BrokenReads {
        async fn create(&self, _input: &BookInput) -> Result<Uuid, StoreError> {
            Ok(Uuid::new_v4())
        }
        async fn get(&self, _id: Uuid) -> Result<Book, StoreError> {
            Err(StoreError::Db(sqlx::Error::PoolClosed))
        }
        async fn list(&self, _req: &ListRequest) -> Result<BookPage, StoreError> {
            Err(StoreError::NotFound)
        }
        async fn update(&self, id: Uuid, _input: &BookInput) -> Result<Uuid, StoreError> {
            Ok(id)
        }
        async fn delete(&self, _id: Uuid) -> Result<bool, StoreError> {
            Ok(false)
        }
        async fn update_page_count(&self, id: Uuid, _page_count: i32) -> Result<Uuid, StoreError> {
            Ok(id)
        }
        async fn ping(&self) -> Result<(), StoreError> {
            Err(StoreError::Db(sqlx::Error::PoolClosed))
        }
    }

    #[tokio::test]
    async fn create_propagates_read_back_failure() {
        let svc = BookService::new(Arc::new(BrokenReads));
        let err = svc.create(input("Dune", "Frank Herbert", 1)).await.unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Db(_))));
    }

    #[tokio::test]
    async fn list_no_rows_is_empty_page() {
        let svc = BookService::new(Arc::new(BrokenReads));
        assert_eq!(svc.list(ListRequest::default()).await.unwrap(), BookPage::empty());
    }
}
