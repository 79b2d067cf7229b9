//! HTTP handlers for book CRUD and service health.

pub mod book;
pub mod common;
pub use book::*;
pub use common::*;
