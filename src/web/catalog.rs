//! Catalog page and book deletion

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{
        catalog::{CatalogEntry, CatalogQuery},
        non_blank,
    },
    AppState,
};

use super::Flash;

/// Message left by a redirect back to the catalog
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Notice {
    notice: Option<String>,
}

#[derive(Serialize)]
struct HomePage<'a> {
    page_title: &'static str,
    books: Vec<CatalogEntry>,
    count: usize,
    q: Option<&'a str>,
    flash: Option<Flash>,
}

/// Redirect the site root to the catalog
pub async fn index() -> Redirect {
    Redirect::to("/home")
}

/// Catalog page with search and sorting
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
    Query(notice): Query<Notice>,
) -> AppResult<Response> {
    let flash = non_blank(notice.notice).map(Flash::success);
    render_home(&state, &query, StatusCode::OK, flash).await
}

/// Delete a book from the catalog page.
///
/// Success redirects back to the catalog with the outcome as a notice, so
/// reloading the page does not resubmit the delete.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    match state.services.books.delete(id).await {
        Ok(deletion) => {
            let location = format!("/home?notice={}", urlencoding::encode(&deletion.message));
            Ok(Redirect::to(&location).into_response())
        }
        Err(err) => {
            tracing::debug!("Delete rejected: {}", err);
            let flash = Flash::error(&err);
            render_home(&state, &CatalogQuery::default(), err.status_code(), Some(flash)).await
        }
    }
}

async fn render_home(
    state: &AppState,
    query: &CatalogQuery,
    status: StatusCode,
    flash: Option<Flash>,
) -> AppResult<Response> {
    let books = state.services.catalog.list(query).await?;
    state.views.page(
        status,
        "home",
        &HomePage {
            page_title: "Catalog",
            count: books.len(),
            books,
            q: query.search_term(),
            flash,
        },
    )
}
