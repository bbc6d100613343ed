//! Data models for Biblioteca

pub mod book;
pub mod loan;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use loan::{CreateLoan, Loan, LoanDetails, LoanStatus, LOAN_DURATION_DAYS};
