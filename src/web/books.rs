//! Add-book form

use axum::{extract::State, http::StatusCode, response::Response, Form};
use serde::Serialize;

use crate::{
    error::AppResult,
    models::{author::Author, book::CreateBook},
    AppState,
};

use super::{outcome, Flash};

#[derive(Serialize)]
struct AddBookPage {
    page_title: &'static str,
    /// Known authors, offered as suggestions
    authors: Vec<Author>,
    form: Option<CreateBook>,
    flash: Option<Flash>,
}

/// Empty add-book form
pub async fn add_book_form(State(state): State<AppState>) -> AppResult<Response> {
    let authors = state.services.authors.list().await?;
    state.views.page(
        StatusCode::OK,
        "add_book",
        &AddBookPage {
            page_title: "Add book",
            authors,
            form: None,
            flash: None,
        },
    )
}

/// Submit the add-book form
pub async fn add_book(
    State(state): State<AppState>,
    Form(input): Form<CreateBook>,
) -> AppResult<Response> {
    let submitted = input.clone();
    let result = state.services.books.create(input).await;
    let (status, flash) = outcome(&result, |book| {
        format!("Book '{}' added successfully!", book.book_title)
    });
    let form = result.is_err().then_some(submitted);

    let authors = state.services.authors.list().await?;
    state.views.page(
        status,
        "add_book",
        &AddBookPage {
            page_title: "Add book",
            authors,
            form,
            flash: Some(flash),
        },
    )
}
