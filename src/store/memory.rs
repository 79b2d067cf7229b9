//! In-process [`BookStore`] with the same ordering and search semantics as the SQL queries.

use super::BookStore;
use crate::error::StoreError;
use crate::model::{Book, BookInput, BookPage, ListRequest};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryBookStore {
    rows: RwLock<HashMap<Uuid, Book>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, Book>> {
        self.rows.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, Book>> {
        self.rows.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn matches_search(book: &Book, term: &str) -> bool {
    let term = term.to_lowercase();
    book.title.to_lowercase().contains(&term) || book.author_name.to_lowercase().contains(&term)
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn create(&self, input: &BookInput) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let book = Book {
            id,
            title: input.title.clone(),
            author_name: input.author_name.clone(),
            page_count: input.page_count,
        };
        self.write().insert(id, book);
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Book, StoreError> {
        self.read().get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn list(&self, req: &ListRequest) -> Result<BookPage, StoreError> {
        let mut matching: Vec<Book> = {
            let rows = self.read();
            rows.values()
                .filter(|b| match req.search.as_deref() {
                    Some(term) if !term.is_empty() => matches_search(b, term),
                    _ => true,
                })
                .cloned()
                .collect()
        };
        matching.sort_by(|a, b| b.title.cmp(&a.title).then(a.id.cmp(&b.id)));
        let count = matching.len() as i64;
        let offset = usize::try_from(req.offset()).unwrap_or(usize::MAX);
        let books = matching
            .into_iter()
            .skip(offset)
            .take(req.limit as usize)
            .collect();
        Ok(BookPage { books, count })
    }

    async fn update(&self, id: Uuid, input: &BookInput) -> Result<Uuid, StoreError> {
        if let Some(book) = self.write().get_mut(&id) {
            book.title = input.title.clone();
            book.author_name = input.author_name.clone();
            book.page_count = input.page_count;
        }
        Ok(id)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.write().remove(&id).is_some())
    }

    async fn update_page_count(&self, id: Uuid, page_count: i32) -> Result<Uuid, StoreError> {
        if let Some(book) = self.write().get_mut(&id) {
            book.page_count = page_count;
        }
        Ok(id)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
