//! Cover image URLs served by Open Library

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const COVERS_BASE_URL: &str = "https://covers.openlibrary.org/b/isbn";

/// Cover image size code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CoverSize {
    S,
    #[default]
    M,
    L,
}

impl CoverSize {
    pub fn as_str(self) -> &'static str {
        match self {
            CoverSize::S => "S",
            CoverSize::M => "M",
            CoverSize::L => "L",
        }
    }
}

/// Build the cover image URL for an ISBN. Returns `None` for an empty ISBN.
///
/// Only the URL is built; the image itself is never fetched.
pub fn cover_url(isbn: &str, size: CoverSize) -> Option<String> {
    if isbn.is_empty() {
        return None;
    }
    Some(format!("{}/{}-{}.jpg", COVERS_BASE_URL, isbn, size.as_str()))
}
