//! BookService: orchestrates store calls and read-backs.

mod crud;
mod validation;
pub use crud::BookService;
pub use validation::RequestValidator;
