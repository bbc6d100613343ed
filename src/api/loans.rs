//! Loan pages

use axum::{
    extract::State,
    response::{Html, Redirect},
};
use chrono::Utc;

use crate::{models::loan::CreateLoan, views, AppState};

use super::{PageForm, PagePath, PageResult};

/// Loan form for one book
pub async fn loan_form(
    State(state): State<AppState>,
    PagePath(book_id): PagePath<i64>,
) -> PageResult<Html<String>> {
    let book = state.services.catalog.get_book(book_id).await?;
    Ok(Html(views::loans::render_form(&book)))
}

/// Lend a book, then go back to the catalog
pub async fn create_loan(
    State(state): State<AppState>,
    PagePath(book_id): PagePath<i64>,
    PageForm(loan): PageForm<CreateLoan>,
) -> PageResult<Redirect> {
    state.services.loans.create_loan(book_id, loan).await?;
    Ok(Redirect::to("/"))
}

/// Loan list with overdue status as of now
pub async fn list_loans(State(state): State<AppState>) -> PageResult<Html<String>> {
    let loans = state.services.loans.list_loans().await?;
    Ok(Html(views::loans::render_list(&loans, Utc::now())))
}

/// Mark a loan returned, then go back to the loan list
pub async fn return_loan(
    State(state): State<AppState>,
    PagePath(loan_id): PagePath<i64>,
) -> PageResult<Redirect> {
    state.services.loans.return_loan(loan_id).await?;
    Ok(Redirect::to("/emprestimos"))
}
