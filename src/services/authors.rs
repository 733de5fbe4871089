//! Author management service

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    error::{AppError, AppResult, ValidationError},
    models::{
        author::{Author, CreateAuthor, LifeDates, NewAuthor},
        input_error,
    },
    repository::Repository,
};

use super::today;

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
    today: fn() -> NaiveDate,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            today,
        }
    }

    /// Use a fixed notion of "today" for the date checks
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// List all authors
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let mut conn = self.repository.connection().await?;
        self.repository.authors.list(&mut conn).await
    }

    /// Get author by ID
    pub async fn get(&self, id: i64) -> AppResult<Author> {
        let mut conn = self.repository.connection().await?;
        self.repository
            .authors
            .find_by_id(&mut conn, id)
            .await?
            .ok_or(AppError::UnknownAuthorId(id))
    }

    /// Validate and create an author.
    ///
    /// The name duplicate check and the insert share one transaction; any
    /// failure before `commit` leaves the database untouched.
    pub async fn create(&self, input: CreateAuthor) -> AppResult<Author> {
        let input = input.normalized();
        if let Err(errors) = input.validate() {
            return Err(input_error(&errors, CreateAuthor::FIELDS).into());
        }
        let (Some(name), Some(birth_date)) = (input.name, input.birth_date) else {
            return Err(ValidationError::MissingField(CreateAuthor::FIELDS.to_vec()).into());
        };

        let mut tx = self.repository.begin().await?;

        if self
            .repository
            .authors
            .find_by_name(&mut tx, &name)
            .await?
            .is_some()
        {
            tracing::debug!("Rejected duplicate author '{}'", name);
            return Err(ValidationError::DuplicateAuthor(name).into());
        }

        let dates = LifeDates::parse(&birth_date, input.date_of_death.as_deref(), (self.today)())?;

        let author = self
            .repository
            .authors
            .create(
                &mut tx,
                &NewAuthor {
                    name,
                    birth_date: dates.birth_date,
                    date_of_death: dates.date_of_death,
                },
            )
            .await?;

        tx.commit().await?;

        tracing::info!(
            "Created author id={} name='{}'",
            author.author_id,
            author.author_name
        );
        Ok(author)
    }
}
