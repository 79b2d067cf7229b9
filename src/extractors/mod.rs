//! Extractors whose rejections use the response envelope.

mod book_id;
mod json;

pub use book_id::BookId;
pub use json::ApiJson;
