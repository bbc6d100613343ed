//! OpenAPI documentation

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    api::{health, rest},
    error::ErrorResponse,
    models::{Book, LoanDetails, LoanStatus},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "0.1.0",
        description = "Library loan tracker JSON API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        health::health_check,
        health::readiness_check,
        rest::list_books,
        rest::list_loans,
        rest::get_stats,
    ),
    components(schemas(
        health::HealthResponse,
        rest::LoanEntry,
        rest::StatsResponse,
        Book,
        LoanDetails,
        LoanStatus,
        ErrorResponse,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "books", description = "Catalog"),
        (name = "loans", description = "Loans"),
        (name = "stats", description = "Counters")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
