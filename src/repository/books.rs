//! Books repository for database operations

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all books, most recently registered first
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books ORDER BY registered_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Insert a new book
    pub async fn create(
        &self,
        title: &str,
        author: &str,
        publication_date: NaiveDate,
        registered_at: DateTime<Utc>,
    ) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, publication_date, registered_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(author)
        .bind(publication_date)
        .bind(registered_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    /// Delete a book that no loan refers to.
    ///
    /// The existence check, the reference check and the delete share one
    /// transaction so a loan cannot be attached in between.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = ?)")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        if !exists {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        let loan_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans WHERE book_id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        if loan_count > 0 {
            return Err(AppError::Conflict(format!(
                "Book {} has {} loan(s) on record and cannot be removed",
                id, loan_count
            )));
        }

        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Count books in the catalog
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
