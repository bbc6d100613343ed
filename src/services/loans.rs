//! Loan management service

use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan, LoanDetails},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Lend a book to a student for the standard loan period
    pub async fn create_loan(&self, book_id: i64, loan: CreateLoan) -> AppResult<Loan> {
        let loan = loan.trimmed();
        loan.validate()?;

        let created = self.repository.loans.create(book_id, &loan, Utc::now()).await?;

        tracing::info!(
            "Loan created: id={} book_id={} ra={} due={}",
            created.id,
            created.book_id,
            created.student_ra,
            created.due_at
        );
        Ok(created)
    }

    /// List all loans, most recent first
    pub async fn list_loans(&self) -> AppResult<Vec<LoanDetails>> {
        let loans = self.repository.loans.list().await?;
        tracing::debug!("Loan listing: {} loans", loans.len());
        Ok(loans)
    }

    /// Return a borrowed book
    pub async fn return_loan(&self, loan_id: i64) -> AppResult<Loan> {
        let loan = self.repository.loans.return_loan(loan_id, Utc::now()).await?;
        tracing::info!("Loan returned: id={} book_id={}", loan.id, loan.book_id);
        Ok(loan)
    }

    /// Count active loans
    pub async fn count_active(&self) -> AppResult<i64> {
        self.repository.loans.count_active().await
    }

    /// Count overdue loans
    pub async fn count_overdue(&self) -> AppResult<i64> {
        self.repository.loans.count_overdue(Utc::now()).await
    }
}
