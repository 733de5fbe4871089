//! Shared helpers for integration tests

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use bookshelf_server::{
    config::AppConfig,
    models::{Author, Book, CreateAuthor, CreateBook},
    repository::Repository,
    routes::create_router,
    services::Services,
    AppState,
};

pub fn services(pool: SqlitePool) -> Services {
    Services::new(Repository::new(pool))
}

/// Build the full application router on the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let state = AppState::new(AppConfig::default(), services(pool)).expect("templates compile");
    create_router(state)
}

pub fn new_author(name: &str, birth_date: &str, date_of_death: Option<&str>) -> CreateAuthor {
    CreateAuthor {
        name: Some(name.to_string()),
        birth_date: Some(birth_date.to_string()),
        date_of_death: date_of_death.map(str::to_string),
    }
}

pub fn new_book(title: &str, isbn: &str, author_name: &str) -> CreateBook {
    CreateBook {
        title: Some(title.to_string()),
        isbn: Some(isbn.to_string()),
        publication_year: None,
        author_name: Some(author_name.to_string()),
    }
}

pub async fn seed_author(services: &Services, name: &str) -> Author {
    services
        .authors
        .create(new_author(name, "1903-06-25", None))
        .await
        .expect("author created")
}

pub async fn seed_book(services: &Services, title: &str, isbn: &str, author_name: &str) -> Book {
    services
        .books
        .create(new_book(title, isbn, author_name))
        .await
        .expect("book created")
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
