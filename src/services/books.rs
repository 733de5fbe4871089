//! Book management service: creation and deletion with author cleanup

use validator::Validate;

use crate::{
    error::{AppError, AppResult, ValidationError},
    models::{
        book::{parse_publication_year, Book, BookDeletion, CreateBook, NewBook},
        input_error,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Books written by an author
    pub async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        let mut conn = self.repository.connection().await?;
        self.repository.books.list_by_author(&mut conn, author_id).await
    }

    /// Validate and create a book linked to an existing author.
    ///
    /// Checks run in order: required fields, ISBN not taken, author exists,
    /// publication year is a number.
    pub async fn create(&self, input: CreateBook) -> AppResult<Book> {
        let input = input.normalized();
        if let Err(errors) = input.validate() {
            return Err(input_error(&errors, CreateBook::FIELDS).into());
        }
        let (Some(title), Some(isbn)) = (input.title, input.isbn) else {
            return Err(ValidationError::MissingField(CreateBook::FIELDS.to_vec()).into());
        };

        let mut tx = self.repository.begin().await?;

        if self.repository.books.isbn_exists(&mut tx, &isbn).await? {
            tracing::debug!("Rejected duplicate ISBN {}", isbn);
            return Err(ValidationError::DuplicateIsbn(isbn).into());
        }

        let author_name = input.author_name.unwrap_or_default();
        let author = match self
            .repository
            .authors
            .find_by_name(&mut tx, &author_name)
            .await?
        {
            Some(author) => author,
            None => {
                tracing::debug!("Book '{}' refers to unknown author '{}'", title, author_name);
                return Err(AppError::AuthorNotFound(author_name));
            }
        };

        let publication_year = parse_publication_year(input.publication_year.as_deref())?;

        let book = self
            .repository
            .books
            .create(
                &mut tx,
                &NewBook {
                    title,
                    isbn,
                    publication_year,
                    author_id: author.author_id,
                },
            )
            .await?;

        tx.commit().await?;

        tracing::info!(
            "Created book id={} isbn={} author_id={}",
            book.book_id,
            book.isbn,
            book.author_id
        );
        Ok(book)
    }

    /// Delete a book, and its author when that was the author's last book.
    ///
    /// Both deletes run in a single transaction: either the book (and
    /// possibly its author) are gone, or nothing changed.
    pub async fn delete(&self, id: i64) -> AppResult<BookDeletion> {
        let mut tx = self.repository.begin().await?;

        // Snapshot what the messages need before the rows disappear
        let book = self
            .repository
            .books
            .find_by_id(&mut tx, id)
            .await?
            .ok_or(AppError::BookNotFound(id))?;
        let author = self
            .repository
            .authors
            .find_by_id(&mut tx, book.author_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Book {} references missing author {}",
                    book.book_id, book.author_id
                ))
            })?;

        self.repository.books.delete(&mut tx, book.book_id).await?;

        let remaining = self
            .repository
            .books
            .count_by_author(&mut tx, author.author_id)
            .await?;
        let author_deleted = if remaining == 0 {
            self.repository.authors.delete(&mut tx, author.author_id).await?
        } else {
            false
        };

        tx.commit().await?;

        if author_deleted {
            tracing::info!(
                "Deleted book id={} and its last author id={}",
                book.book_id,
                author.author_id
            );
        } else {
            tracing::info!(
                "Deleted book id={} ({} left by author id={})",
                book.book_id,
                remaining,
                author.author_id
            );
        }

        Ok(BookDeletion::new(&book, author.author_name, author_deleted))
    }
}
