//! Read-only JSON views of the catalog and loans

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Book, LoanDetails, LoanStatus},
    AppState,
};

/// Loan with its display status
#[derive(Serialize, ToSchema)]
pub struct LoanEntry {
    #[serde(flatten)]
    pub loan: LoanDetails,
    pub status: LoanStatus,
}

#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub books: i64,
    pub active_loans: i64,
    pub overdue_loans: i64,
}

/// List the catalog
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, most recently registered first", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// List loans with computed status
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "All loans, most recent first", body = Vec<LoanEntry>)
    )
)]
pub async fn list_loans(State(state): State<AppState>) -> AppResult<Json<Vec<LoanEntry>>> {
    let now = Utc::now();
    let loans = state
        .services
        .loans
        .list_loans()
        .await?
        .into_iter()
        .map(|loan| LoanEntry {
            status: loan.status(now),
            loan,
        })
        .collect();
    Ok(Json(loans))
}

/// Catalog and loan counters
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Counters", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    Ok(Json(StatsResponse {
        books: state.services.catalog.count_books().await?,
        active_loans: state.services.loans.count_active().await?,
        overdue_loans: state.services.loans.count_overdue().await?,
    }))
}
