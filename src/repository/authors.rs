//! Authors repository

use sqlx::SqliteConnection;

use crate::{
    error::AppResult,
    models::author::{Author, NewAuthor},
};

/// Column list for authors queries.
const COLUMNS: &str = "author_id, author_name, birth_date, date_of_death";

#[derive(Clone, Copy, Default)]
pub struct AuthorsRepository;

impl AuthorsRepository {
    /// List all authors ordered by name
    pub async fn list(&self, conn: &mut SqliteConnection) -> AppResult<Vec<Author>> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY author_name, author_id");
        let rows = sqlx::query_as::<_, Author>(&query)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    /// Get author by ID
    pub async fn find_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> AppResult<Option<Author>> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE author_id = $1");
        let author = sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(author)
    }

    /// First author whose name matches exactly (lowest id wins)
    pub async fn find_by_name(
        &self,
        conn: &mut SqliteConnection,
        name: &str,
    ) -> AppResult<Option<Author>> {
        let query = format!(
            "SELECT {COLUMNS} FROM authors WHERE author_name = $1 ORDER BY author_id LIMIT 1"
        );
        let author = sqlx::query_as::<_, Author>(&query)
            .bind(name)
            .fetch_optional(conn)
            .await?;
        Ok(author)
    }

    /// Insert an author
    pub async fn create(&self, conn: &mut SqliteConnection, data: &NewAuthor) -> AppResult<Author> {
        let query = format!(
            r#"
            INSERT INTO authors (author_name, birth_date, date_of_death)
            VALUES ($1, $2, $3)
            RETURNING {COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, Author>(&query)
            .bind(&data.name)
            .bind(data.birth_date)
            .bind(data.date_of_death)
            .fetch_one(conn)
            .await?;
        Ok(row)
    }

    /// Delete an author. Returns false when no row matched.
    pub async fn delete(&self, conn: &mut SqliteConnection, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM authors WHERE author_id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
