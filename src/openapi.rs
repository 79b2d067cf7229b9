//! OpenAPI document for the book endpoints.

use crate::handlers::book;
use crate::model::{Book, BookInput, BookPage, PageCountPatch};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "bookshelf", description = "Book records: create, read, list, update, delete"),
    paths(
        book::create_book,
        book::get_book,
        book::list_books,
        book::update_book,
        book::delete_book,
        book::patch_page_count
    ),
    components(schemas(Book, BookInput, BookPage, PageCountPatch)),
    tags((name = "book", description = "Book records"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_book_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/book"));
        assert!(paths.contains_key("/books"));
        let by_id = paths["/book/{id}"].as_object().unwrap();
        for method in ["get", "put", "delete", "patch"] {
            assert!(by_id.contains_key(method), "missing {}", method);
        }
        assert!(doc["components"]["schemas"].get("Book").is_some());
    }
}
