//! Add-author form

use axum::{extract::State, http::StatusCode, response::Response, Form};
use serde::Serialize;

use crate::{error::AppResult, models::author::CreateAuthor, AppState};

use super::{outcome, Flash};

#[derive(Serialize)]
struct AddAuthorPage {
    page_title: &'static str,
    form: Option<CreateAuthor>,
    flash: Option<Flash>,
}

/// Empty add-author form
pub async fn add_author_form(State(state): State<AppState>) -> AppResult<Response> {
    state.views.page(
        StatusCode::OK,
        "add_author",
        &AddAuthorPage {
            page_title: "Add author",
            form: None,
            flash: None,
        },
    )
}

/// Submit the add-author form
pub async fn add_author(
    State(state): State<AppState>,
    Form(input): Form<CreateAuthor>,
) -> AppResult<Response> {
    let submitted = input.clone();
    let result = state.services.authors.create(input).await;
    let (status, flash) = outcome(&result, |author| {
        format!("Author '{}' added successfully!", author.author_name)
    });

    // Keep the submitted values when the form has to be corrected
    let form = result.is_err().then_some(submitted);

    state.views.page(
        status,
        "add_author",
        &AddAuthorPage {
            page_title: "Add author",
            form,
            flash: Some(flash),
        },
    )
}
