//! Server-rendered HTML pages
//!
//! Templates are compiled into the binary and rendered with handlebars,
//! which escapes every interpolated value.

pub mod authors;
pub mod books;
pub mod catalog;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{AppError, AppResult};

const TEMPLATES: &[(&str, &str)] = &[
    ("base", include_str!("../../templates/base.hbs")),
    ("home", include_str!("../../templates/home.hbs")),
    ("add_author", include_str!("../../templates/add_author.hbs")),
    ("add_book", include_str!("../../templates/add_book.hbs")),
];

/// Compiled page templates
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> AppResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, source)
                .map_err(|e| AppError::Template(format!("{}: {}", name, e)))?;
        }
        Ok(Self { registry })
    }

    /// Render a page with the given status code
    pub fn page<T: Serialize>(
        &self,
        status: StatusCode,
        name: &str,
        data: &T,
    ) -> AppResult<Response> {
        let html = self.registry.render(name, data)?;
        Ok((status, Html(html)).into_response())
    }
}

/// One-off message shown at the top of a page
#[derive(Debug, Clone, Serialize)]
pub struct Flash {
    pub kind: &'static str,
    pub text: String,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: "success",
            text: text.into(),
        }
    }

    pub fn error(err: &AppError) -> Self {
        Self {
            kind: "error",
            text: err.user_message(),
        }
    }
}

/// Status and flash for the outcome of a form submission
pub(crate) fn outcome<T>(
    result: &AppResult<T>,
    success: impl FnOnce(&T) -> String,
) -> (StatusCode, Flash) {
    match result {
        Ok(value) => (StatusCode::OK, Flash::success(success(value))),
        Err(err) => {
            tracing::debug!("Form rejected: {}", err);
            (err.status_code(), Flash::error(err))
        }
    }
}
