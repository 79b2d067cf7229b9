//! Request validation for book payloads.

use crate::error::AppError;
use crate::model::{BookInput, PageCountPatch};

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a full book body (create and full update).
    pub fn validate(input: &BookInput) -> Result<(), AppError> {
        require_text("title", &input.title)?;
        require_text("author_name", &input.author_name)?;
        validate_page_count(input.page_count)
    }

    pub fn validate_patch(patch: &PageCountPatch) -> Result<(), AppError> {
        validate_page_count(patch.page_count)
    }
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    if value.contains('\0') {
        return Err(AppError::Validation(format!("{} must not contain NUL bytes", field)));
    }
    Ok(())
}

fn validate_page_count(page_count: i32) -> Result<(), AppError> {
    if page_count < 0 {
        return Err(AppError::Validation(
            "page_count must be a non-negative integer".into(),
        ));
    }
    Ok(())
}
