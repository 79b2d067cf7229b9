//! Bookshelf: CRUD service for book records over HTTP, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::Settings;
pub use error::{AppError, ConfigError, StoreError};
pub use migration::{applied_migrations, apply_migrations};
pub use model::{Book, BookInput, BookPage, ListRequest, PageCountPatch};
pub use response::{success_created, success_ok, Envelope};
pub use routes::{book_routes, common_routes, common_routes_with_ready, router};
pub use service::BookService;
pub use state::AppState;
pub use store::{ensure_database_exists, BookStore, MemoryBookStore, PgBookStore};
