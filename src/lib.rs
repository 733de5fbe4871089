//! Bookshelf Library Catalog
//!
//! Authors and books stored in SQLite, managed through server-rendered HTML
//! forms and a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub views: Arc<web::Views>,
}

impl AppState {
    pub fn new(config: AppConfig, services: services::Services) -> AppResult<Self> {
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
            views: Arc::new(web::Views::new()?),
        })
    }
}
