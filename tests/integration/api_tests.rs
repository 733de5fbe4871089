//! JSON API tests driven through the router

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;

use crate::common::{body_json, build_test_app, delete, get, post_json};

#[sqlx::test]
async fn health_check_returns_ok(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/api/v1/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[sqlx::test]
async fn readiness_check_pings_database(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/api/v1/ready").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "ok");
}

#[sqlx::test]
async fn author_and_book_lifecycle(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/authors",
        json!({ "name": "George Orwell", "birth_date": "1903-06-25" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let author = body_json(response).await;
    let author_id = author["author_id"].as_i64().expect("author id");
    assert_eq!(author["birth_date"], "1903-06-25");
    assert!(author["date_of_death"].is_null());

    let response = post_json(
        app.clone(),
        "/api/v1/books",
        json!({
            "title": "1984",
            "isbn": "9780451524935",
            "publication_year": 1949,
            "author_name": "George Orwell"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let book = body_json(response).await;
    assert_eq!(book["author_id"], author_id);
    assert_eq!(book["publication_year"], 1949);
    let book_id = book["book_id"].as_i64().expect("book id");

    let response = get(app.clone(), "/api/v1/books?q=orwell").await;
    assert_eq!(response.status(), StatusCode::OK);
    let rows = body_json(response).await;
    assert_eq!(rows.as_array().map(Vec::len), Some(1));
    assert_eq!(rows[0]["author_name"], "George Orwell");
    assert_eq!(
        rows[0]["cover_url"],
        "https://covers.openlibrary.org/b/isbn/9780451524935-M.jpg"
    );

    let response = get(app.clone(), &format!("/api/v1/authors/{}/books", author_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().map(Vec::len), Some(1));

    let response = delete(app.clone(), &format!("/api/v1/books/{}", book_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let outcome = body_json(response).await;
    assert_eq!(outcome["author_deleted"], true);

    let response = get(app.clone(), &format!("/api/v1/authors/{}", author_id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/api/v1/books").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test]
async fn unknown_author_is_bad_request(pool: SqlitePool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/books",
        json!({ "title": "1984", "isbn": "9780451524935", "author_name": "Unknown" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 4);
    assert_eq!(body["error"], "NoSuchAuthor");
}

#[sqlx::test]
async fn duplicate_isbn_is_conflict(pool: SqlitePool) {
    let app = build_test_app(pool);
    post_json(
        app.clone(),
        "/api/v1/authors",
        json!({ "name": "George Orwell", "birth_date": "1903-06-25" }),
    )
    .await;
    let book = json!({ "title": "1984", "isbn": "9780451524935", "author_name": "George Orwell" });

    let first = post_json(app.clone(), "/api/v1/books", book.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, "/api/v1/books", book).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["error"], "Duplicate");
}

#[sqlx::test]
async fn future_birth_date_is_bad_request(pool: SqlitePool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/authors",
        json!({ "name": "Time Traveller", "birth_date": "2999-01-01" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Birth date cannot be in the future"
    );
}

#[sqlx::test]
async fn missing_book_is_not_found(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = get(app.clone(), "/api/v1/books/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, "/api/v1/books/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "NoSuchBook");
}

#[sqlx::test]
async fn missing_author_is_not_found(pool: SqlitePool) {
    let app = build_test_app(pool);

    for uri in ["/api/v1/authors/999", "/api/v1/authors/999/books"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["code"], 4);
        assert_eq!(body["error"], "NoSuchAuthor");
    }
}

#[sqlx::test]
async fn overlong_input_is_bad_request(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/authors",
        json!({ "name": "a".repeat(201), "birth_date": "1903-06-25" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "BadValue");
    assert_eq!(body["message"], "name is too long (at most 200 characters)");

    post_json(
        app.clone(),
        "/api/v1/authors",
        json!({ "name": "George Orwell", "birth_date": "1903-06-25" }),
    )
    .await;
    let response = post_json(
        app,
        "/api/v1/books",
        json!({ "title": "1984", "isbn": "1".repeat(21), "author_name": "George Orwell" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "isbn is too long (at most 20 characters)"
    );
}

#[sqlx::test]
async fn openapi_document_is_served(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/api-docs/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/books"].is_object());
    assert!(doc["paths"]["/authors"].is_object());
}
