//! Loans repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::loan::{due_date, CreateLoan, Loan, LoanDetails},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Sqlite>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// List all loans with their book title, most recent first
    pub async fn list(&self) -> AppResult<Vec<LoanDetails>> {
        let loans = sqlx::query_as::<_, LoanDetails>(
            r#"
            SELECT l.id, l.book_id, b.title AS book_title, l.student_name, l.student_ra,
                   l.loaned_at, l.due_at, l.returned_at, l.returned
            FROM loans l
            JOIN books b ON l.book_id = b.id
            ORDER BY l.loaned_at DESC, l.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(loans)
    }

    /// Create a new loan of `book_id` made at `loaned_at`
    pub async fn create(
        &self,
        book_id: i64,
        loan: &CreateLoan,
        loaned_at: DateTime<Utc>,
    ) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let book_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = ?)")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await?;

        if !book_exists {
            return Err(AppError::NotFound(format!("Book with id {} not found", book_id)));
        }

        let created = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (book_id, student_name, student_ra, loaned_at, due_at, returned)
            VALUES (?, ?, ?, ?, ?, 0)
            RETURNING *
            "#,
        )
        .bind(book_id)
        .bind(&loan.student_name)
        .bind(&loan.student_ra)
        .bind(loaned_at)
        .bind(due_date(loaned_at))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Mark a loan as returned at `returned_at`.
    ///
    /// Only an active loan can be returned; the conditional update keeps two
    /// concurrent returns from both succeeding.
    pub async fn return_loan(&self, loan_id: i64, returned_at: DateTime<Utc>) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let returned: Option<bool> = sqlx::query_scalar("SELECT returned FROM loans WHERE id = ?")
            .bind(loan_id)
            .fetch_optional(&mut *tx)
            .await?;

        match returned {
            None => {
                return Err(AppError::NotFound(format!("Loan with id {} not found", loan_id)));
            }
            Some(true) => {
                return Err(AppError::Conflict(format!("Loan {} already returned", loan_id)));
            }
            Some(false) => {}
        }

        let updated = sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans SET returned = 1, returned_at = ?
            WHERE id = ? AND returned = 0
            RETURNING *
            "#,
        )
        .bind(returned_at)
        .bind(loan_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::Conflict(format!("Loan {} already returned", loan_id)))?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Count active loans
    pub async fn count_active(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans WHERE returned = 0")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count loans past their due date and not yet returned
    pub async fn count_overdue(&self, now: DateTime<Utc>) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM loans WHERE returned = 0 AND due_at < ?",
        )
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
