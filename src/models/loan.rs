//! Loan (borrow) model and related types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Every loan is due this many days after it was made
pub const LOAN_DURATION_DAYS: i64 = 14;

/// Due date for a loan made at `loaned_at`
pub fn due_date(loaned_at: DateTime<Utc>) -> DateTime<Utc> {
    loaned_at + Duration::days(LOAN_DURATION_DAYS)
}

/// Loan model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i64,
    pub book_id: i64,
    pub student_name: String,
    /// Student registration number
    pub student_ra: String,
    pub loaned_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub returned: bool,
}

/// Loan joined with the title of its book, for listings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LoanDetails {
    pub id: i64,
    pub book_id: i64,
    pub book_title: String,
    pub student_name: String,
    pub student_ra: String,
    pub loaned_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub returned: bool,
}

/// Display status of a loan, derived at read time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Overdue,
    Returned,
}

impl LoanStatus {
    pub fn compute(returned: bool, due_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if returned {
            LoanStatus::Returned
        } else if due_at < now {
            LoanStatus::Overdue
        } else {
            LoanStatus::Active
        }
    }

    /// Label shown on the loan list page
    pub fn label(self) -> &'static str {
        match self {
            LoanStatus::Active => "Ativo",
            LoanStatus::Overdue => "Atrasado",
            LoanStatus::Returned => "Devolvido",
        }
    }
}

impl Loan {
    pub fn status(&self, now: DateTime<Utc>) -> LoanStatus {
        LoanStatus::compute(self.returned, self.due_at, now)
    }
}

impl LoanDetails {
    pub fn status(&self, now: DateTime<Utc>) -> LoanStatus {
        LoanStatus::compute(self.returned, self.due_at, now)
    }
}

/// Loan form, field names match the loan page
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLoan {
    #[serde(rename = "nome_aluno")]
    #[validate(length(min = 1, max = 200, message = "Student name is required"))]
    pub student_name: String,
    #[serde(rename = "ra")]
    #[validate(length(min = 1, max = 20, message = "Registration number must be 1-20 characters"))]
    pub student_ra: String,
}

impl CreateLoan {
    pub fn new(student_name: &str, student_ra: &str) -> Self {
        Self {
            student_name: student_name.to_string(),
            student_ra: student_ra.to_string(),
        }
    }

    pub fn trimmed(self) -> Self {
        Self {
            student_name: self.student_name.trim().to_string(),
            student_ra: self.student_ra.trim().to_string(),
        }
    }
}
