//! Business logic services

pub mod authors;
pub mod books;
pub mod catalog;

use chrono::NaiveDate;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub catalog: catalog::CatalogService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            authors: authors::AuthorsService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            repository,
        }
    }
}

/// Current local date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
