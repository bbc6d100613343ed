//! Catalog management service

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, PUBLICATION_DATE_FORMAT},
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

    /// List the whole catalog, most recently registered first
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        let books = self.repository.books.list().await?;
        tracing::debug!("Catalog listing: {} books", books.len());
        Ok(books)
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Register a new book; its registration time is the time of the call
    pub async fn add_book(&self, book: CreateBook) -> AppResult<Book> {
        let book = book.trimmed();
        book.validate()?;

        let publication_date = book.parse_publication_date().ok_or_else(|| {
            AppError::Validation(format!(
                "Invalid publication date '{}', expected {}",
                book.publication_date, PUBLICATION_DATE_FORMAT
            ))
        })?;

        let created = self
            .repository
            .books
            .create(&book.title, &book.author, publication_date, Utc::now())
            .await?;

        tracing::info!("Book registered: id={} title={:?}", created.id, created.title);
        Ok(created)
    }

    /// Remove a book from the catalog. Books with loans on record are kept.
    pub async fn remove_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Book removed: id={}", id);
        Ok(())
    }

    pub async fn count_books(&self) -> AppResult<i64> {
        self.repository.books.count().await
    }
}
