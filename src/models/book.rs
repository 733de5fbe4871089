//! Book model and related types

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::ValidationError;

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub book_id: i64,
    pub isbn: String,
    pub book_title: String,
    pub publication_year: Option<i32>,
    pub author_id: i64,
}

/// Create book request, as submitted by the form or the API
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateBook {
    #[validate(required)]
    pub title: Option<String>,
    #[validate(required, length(max = 20))]
    pub isbn: Option<String>,
    /// Accepts a number or a numeric string
    #[serde(deserialize_with = "deserialize_year")]
    #[schema(value_type = Option<i32>)]
    pub publication_year: Option<String>,
    /// Exact name of an existing author
    pub author_name: Option<String>,
}

impl CreateBook {
    pub const FIELDS: &'static [&'static str] = &["title", "isbn"];

    /// Trim every field; blank values become absent.
    pub fn normalized(self) -> Self {
        Self {
            title: super::non_blank(self.title),
            isbn: super::non_blank(self.isbn),
            publication_year: super::non_blank(self.publication_year),
            author_name: super::non_blank(self.author_name),
        }
    }
}

/// Parse the optional publication year.
pub fn parse_publication_year(raw: Option<&str>) -> Result<Option<i32>, ValidationError> {
    raw.map(|value| {
        value
            .parse::<i32>()
            .map_err(|_| ValidationError::MalformedPublicationYear(value.to_string()))
    })
    .transpose()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearField {
    Number(i64),
    Text(String),
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<YearField>::deserialize(deserializer)?.map(|year| match year {
        YearField::Number(n) => n.to_string(),
        YearField::Text(s) => s,
    }))
}

/// Validated book, ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
    pub publication_year: Option<i32>,
    pub author_id: i64,
}

/// Result of a book deletion, including the cascading author cleanup
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDeletion {
    pub book_id: i64,
    pub book_title: String,
    pub author_id: i64,
    pub author_name: String,
    /// True when the author had no other books and was removed as well
    pub author_deleted: bool,
    pub message: String,
}

impl BookDeletion {
    pub fn new(book: &Book, author_name: String, author_deleted: bool) -> Self {
        let message = if author_deleted {
            format!(
                "Book '{}' and its author '{}' deleted successfully.",
                book.book_title, author_name
            )
        } else {
            format!("Book '{}' deleted successfully.", book.book_title)
        };

        Self {
            book_id: book.book_id,
            book_title: book.book_title.clone(),
            author_id: book.author_id,
            author_name,
            author_deleted,
            message,
        }
    }
}
