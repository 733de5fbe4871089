//! Books repository
//!
//! Listing queries join the author so each catalog row carries its author
//! name without a lookup per row.

use sqlx::SqliteConnection;

use crate::{
    error::AppResult,
    models::{
        book::{Book, NewBook},
        catalog::{like_pattern, CatalogRow, SortKey},
    },
};

/// Column list for books queries.
const COLUMNS: &str = "book_id, isbn, book_title, publication_year, author_id";

/// Joined column list for catalog queries.
const CATALOG_SELECT: &str = r#"
    SELECT b.book_id, b.isbn, b.book_title, b.publication_year, b.author_id, a.author_name
    FROM books b
    JOIN authors a ON a.author_id = b.author_id
"#;

#[derive(Clone, Copy, Default)]
pub struct BooksRepository;

impl BooksRepository {
    // =========================================================================
    // READ
    // =========================================================================

    /// Get book by ID
    pub async fn find_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> AppResult<Option<Book>> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE book_id = $1");
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(book)
    }

    /// Whether a book with this ISBN is already stored
    pub async fn isbn_exists(&self, conn: &mut SqliteConnection, isbn: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)")
            .bind(isbn)
            .fetch_one(conn)
            .await?;
        Ok(exists)
    }

    /// Number of books written by an author
    pub async fn count_by_author(
        &self,
        conn: &mut SqliteConnection,
        author_id: i64,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(conn)
            .await?;
        Ok(count)
    }

    /// Books written by an author, in insertion order
    pub async fn list_by_author(
        &self,
        conn: &mut SqliteConnection,
        author_id: i64,
    ) -> AppResult<Vec<Book>> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE author_id = $1 ORDER BY book_id");
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(author_id)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    /// Catalog row for one book
    pub async fn catalog_entry(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> AppResult<Option<CatalogRow>> {
        let query = format!("{CATALOG_SELECT} WHERE b.book_id = $1");
        let row = sqlx::query_as::<_, CatalogRow>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(row)
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Books whose title OR author name contains `term`, ignoring case
    pub async fn search(
        &self,
        conn: &mut SqliteConnection,
        term: &str,
    ) -> AppResult<Vec<CatalogRow>> {
        let query = format!(
            r#"{CATALOG_SELECT}
            WHERE LOWER(b.book_title) LIKE $1 ESCAPE '\'
               OR LOWER(a.author_name) LIKE $2 ESCAPE '\'
            ORDER BY b.book_id
            "#
        );
        let pattern = like_pattern(term);
        let rows = sqlx::query_as::<_, CatalogRow>(&query)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    /// All books in the requested order
    pub async fn list(
        &self,
        conn: &mut SqliteConnection,
        sort: SortKey,
    ) -> AppResult<Vec<CatalogRow>> {
        let order_by = match sort {
            SortKey::Title => "b.book_title COLLATE NOCASE, b.book_id",
            SortKey::Author => "a.author_name COLLATE NOCASE, b.book_id",
            SortKey::None => "b.book_id",
        };
        let query = format!("{CATALOG_SELECT} ORDER BY {order_by}");
        let rows = sqlx::query_as::<_, CatalogRow>(&query)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Insert a book
    pub async fn create(&self, conn: &mut SqliteConnection, data: &NewBook) -> AppResult<Book> {
        let query = format!(
            r#"
            INSERT INTO books (isbn, book_title, publication_year, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, Book>(&query)
            .bind(&data.isbn)
            .bind(&data.title)
            .bind(data.publication_year)
            .bind(data.author_id)
            .fetch_one(conn)
            .await?;
        Ok(row)
    }

    /// Delete a book. Returns false when no row matched.
    pub async fn delete(&self, conn: &mut SqliteConnection, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
