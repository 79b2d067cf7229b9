//! Book CRUD routes.

use crate::handlers::book::{
    create_book, delete_book, get_book, list_books, patch_page_count, update_book,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/book", post(create_book))
        .route(
            "/book/:id",
            get(get_book)
                .put(update_book)
                .delete(delete_book)
                .patch(patch_page_count),
        )
        .route("/books", get(list_books))
        .with_state(state)
}
