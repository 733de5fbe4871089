//! HTTP routing

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{api, web, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // HTML pages
    let pages = Router::new()
        .route("/", get(web::catalog::index))
        .route("/home", get(web::catalog::home))
        .route(
            "/add_author",
            get(web::authors::add_author_form).post(web::authors::add_author),
        )
        .route(
            "/add_book",
            get(web::books::add_book_form).post(web::books::add_book),
        )
        .route("/book/:id/delete", post(web::catalog::delete_book))
        .with_state(state.clone());

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authors
        .route(
            "/authors",
            get(api::authors::list_authors).post(api::authors::create_author),
        )
        .route("/authors/:id", get(api::authors::get_author))
        .route("/authors/:id/books", get(api::authors::list_author_books))
        // Books
        .route(
            "/books",
            get(api::books::list_books).post(api::books::create_book),
        )
        .route(
            "/books/:id",
            get(api::books::get_book).delete(api::books::delete_book),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(pages)
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
