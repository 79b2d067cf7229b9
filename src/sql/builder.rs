//! Builds the book statements. The list and count queries share one WHERE composition.

use super::PgBindValue;
use crate::model::ListRequest;

pub const BOOK_COLUMNS: &str = "id, title, author_name, page_count";

pub const INSERT_BOOK: &str =
    "INSERT INTO books (id, title, author_name, page_count) VALUES ($1, $2, $3, $4)";

pub const SELECT_BOOK_BY_ID: &str =
    "SELECT id, title, author_name, page_count FROM books WHERE id = $1";

pub const UPDATE_BOOK: &str =
    "UPDATE books SET title = $1, author_name = $2, page_count = $3 WHERE id = $4";

pub const UPDATE_PAGE_COUNT: &str = "UPDATE books SET page_count = $1 WHERE id = $2";

pub const DELETE_BOOK: &str = "DELETE FROM books WHERE id = $1";

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// ILIKE pattern matching `term` as a literal substring. `\`, `%` and `_` are escaped.
pub fn contains_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('%');
    out
}

/// Appends the filter placeholders to `q` and returns the clause (empty, or starting with " WHERE ").
fn where_clause(q: &mut QueryBuf, req: &ListRequest) -> String {
    let mut where_parts = Vec::new();
    if let Some(term) = req.search.as_deref().filter(|s| !s.is_empty()) {
        let n = q.push_param(PgBindValue::Text(contains_pattern(term)));
        where_parts.push(format!(
            "(title ILIKE ${n} ESCAPE '\\' OR author_name ILIKE ${n} ESCAPE '\\')"
        ));
    }
    if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    }
}

/// SELECT COUNT over every row matching the request's search.
pub fn count_books(req: &ListRequest) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = where_clause(&mut q, req);
    q.sql = format!("SELECT COUNT(1) FROM books{}", where_clause);
    q
}

/// SELECT one page ordered by title descending; id breaks ties so pages stay disjoint.
pub fn select_books_page(req: &ListRequest) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = where_clause(&mut q, req);
    let limit = q.push_param(PgBindValue::I64(i64::from(req.limit)));
    let offset = q.push_param(PgBindValue::I64(req.offset()));
    q.sql = format!(
        "SELECT {} FROM books{} ORDER BY title DESC, id LIMIT ${} OFFSET ${}",
        BOOK_COLUMNS, where_clause, limit, offset
    );
    q
}
