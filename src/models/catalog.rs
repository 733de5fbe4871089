//! Catalog listing rows and query parameters

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::cover::{cover_url, CoverSize};

/// Catalog ordering requested by the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Insertion order
    #[default]
    None,
    Title,
    Author,
}

impl SortKey {
    /// Unknown values fall back to insertion order.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("title") => SortKey::Title,
            Some("author") => SortKey::Author,
            _ => SortKey::None,
        }
    }
}

/// Catalog search query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct CatalogQuery {
    /// Case-insensitive search in book titles and author names
    pub q: Option<String>,
    /// `title` or `author`; ignored when `q` is set
    pub sort: Option<String>,
}

impl CatalogQuery {
    pub fn search_term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::parse(self.sort.as_deref())
    }
}

/// Book joined with its author, as read from the database
#[derive(Debug, Clone, FromRow)]
pub struct CatalogRow {
    pub book_id: i64,
    pub isbn: String,
    pub book_title: String,
    pub publication_year: Option<i32>,
    pub author_id: i64,
    pub author_name: String,
}

/// Catalog entry shown in listings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CatalogEntry {
    pub id: i64,
    pub title: String,
    pub isbn: String,
    pub year: Option<i32>,
    pub author_id: i64,
    pub author_name: String,
    pub cover_url: Option<String>,
}

impl From<CatalogRow> for CatalogEntry {
    fn from(row: CatalogRow) -> Self {
        let cover_url = cover_url(&row.isbn, CoverSize::default());
        Self {
            id: row.book_id,
            title: row.book_title,
            isbn: row.isbn,
            year: row.publication_year,
            author_id: row.author_id,
            author_name: row.author_name,
            cover_url,
        }
    }
}

/// Lower-case (ASCII, like SQLite `LOWER`) and escape LIKE wildcards for `ESCAPE '\'`.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_ascii_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
