//! Error types for Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Numeric error codes returned in API error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    DbFailure = 3,
    NoSuchAuthor = 4,
    NoSuchBook = 5,
    Duplicate = 8,
    MissingField = 14,
    BadValue = 18,
}

/// Rejected user input, detected before anything is written
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingField(Vec<&'static str>),

    #[error("Invalid date format for {field}: '{value}' (expected YYYY-MM-DD)")]
    MalformedDate { field: &'static str, value: String },

    #[error("Birth date cannot be in the future")]
    FutureBirthDate,

    #[error("Date of death cannot be in the future")]
    FutureDeathDate,

    #[error("Date of death cannot be before birth date")]
    DeathBeforeBirth,

    #[error("Author '{0}' already exists")]
    DuplicateAuthor(String),

    #[error("A book with ISBN '{0}' already exists")]
    DuplicateIsbn(String),

    #[error("Invalid publication year: '{0}'")]
    MalformedPublicationYear(String),

    #[error("{field} is too long (at most {max} characters)")]
    TooLong { field: &'static str, max: u64 },
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Author '{0}' not found in the database. Please add the author first.")]
    AuthorNotFound(String),

    #[error("Book {0} does not exist in the database.")]
    BookNotFound(i64),

    #[error("Author {0} does not exist in the database.")]
    UnknownAuthorId(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(ValidationError::DuplicateAuthor(_))
            | AppError::Validation(ValidationError::DuplicateIsbn(_)) => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::AuthorNotFound(_) => StatusCode::BAD_REQUEST,
            AppError::BookNotFound(_) | AppError::UnknownAuthorId(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Template(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(ValidationError::MissingField(_)) => ErrorCode::MissingField,
            AppError::Validation(ValidationError::DuplicateAuthor(_))
            | AppError::Validation(ValidationError::DuplicateIsbn(_)) => ErrorCode::Duplicate,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::AuthorNotFound(_) | AppError::UnknownAuthorId(_) => ErrorCode::NoSuchAuthor,
            AppError::BookNotFound(_) => ErrorCode::NoSuchBook,
            AppError::Database(_) => ErrorCode::DbFailure,
            AppError::Template(_) | AppError::Internal(_) => ErrorCode::Failure,
        }
    }

    /// Message safe to show to the person who submitted the request.
    ///
    /// Server-side failures are logged here and replaced by a generic text.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error: the operation was rolled back and nothing was changed.".to_string()
            }
            AppError::Template(msg) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message: self.user_message(),
        });

        (status, body).into_response()
    }
}

impl From<handlebars::RenderError> for AppError {
    fn from(e: handlebars::RenderError) -> Self {
        AppError::Template(e.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
