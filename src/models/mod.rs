//! Data models for Bookshelf

use validator::ValidationErrors;

use crate::error::ValidationError;

pub mod author;
pub mod book;
pub mod catalog;
pub mod cover;

// Re-export commonly used types
pub use author::{Author, CreateAuthor, NewAuthor};
pub use book::{Book, BookDeletion, CreateBook, NewBook};
pub use catalog::{CatalogEntry, CatalogQuery, SortKey};
pub use cover::{cover_url, CoverSize};

/// Trim an optional form value, mapping blank input to `None`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Turn `validator` failures into the first input error, checking fields in
/// the order the form declares them.
///
/// Missing fields are reported together; length limits only once every
/// required field is present.
pub(crate) fn input_error(errors: &ValidationErrors, order: &[&'static str]) -> ValidationError {
    let field_errors = errors.field_errors();
    let failed = |field: &str, code: &str| {
        field_errors
            .get(field)
            .and_then(|errs| errs.iter().find(|e| e.code == code))
    };

    let missing: Vec<&'static str> = order
        .iter()
        .copied()
        .filter(|field| failed(*field, "required").is_some())
        .collect();
    if !missing.is_empty() {
        return ValidationError::MissingField(missing);
    }

    for field in order.iter().copied() {
        if let Some(err) = failed(field, "length") {
            let max = err.params.get("max").and_then(|v| v.as_u64()).unwrap_or_default();
            return ValidationError::TooLong { field, max };
        }
    }

    ValidationError::MissingField(
        order
            .iter()
            .copied()
            .filter(|field| field_errors.contains_key(field))
            .collect(),
    )
}
