//! Catalog listing and search service

use crate::{
    error::{AppError, AppResult},
    models::catalog::{CatalogEntry, CatalogQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the catalog.
    ///
    /// A search term takes precedence over the sort key.
    pub async fn list(&self, query: &CatalogQuery) -> AppResult<Vec<CatalogEntry>> {
        let mut conn = self.repository.connection().await?;
        let rows = match query.search_term() {
            Some(term) => self.repository.books.search(&mut conn, term).await?,
            None => self.repository.books.list(&mut conn, query.sort_key()).await?,
        };
        Ok(rows.into_iter().map(CatalogEntry::from).collect())
    }

    /// Catalog entry for one book
    pub async fn get(&self, id: i64) -> AppResult<CatalogEntry> {
        let mut conn = self.repository.connection().await?;
        self.repository
            .books
            .catalog_entry(&mut conn, id)
            .await?
            .map(CatalogEntry::from)
            .ok_or(AppError::BookNotFound(id))
    }
}
