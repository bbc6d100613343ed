//! HTTP handlers: HTML pages and the JSON API

pub mod catalog;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod rest;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;

use crate::{error::AppError, views, AppState};

/// Error returned by page handlers, rendered as an HTML error page
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _, message) = self.0.parts();
        tracing::warn!("Request failed with {}: {}", status, message);
        (status, Html(views::render_error(status, &message))).into_response()
    }
}

pub type PageResult<T> = Result<T, PageError>;

/// Form body for page handlers; a malformed or incomplete form is a validation error
pub struct PageForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for PageForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(PageForm(value))
    }
}

/// Path parameters for page handlers; an id that does not parse names no record
pub struct PagePath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for PagePath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::NotFound(rejection.body_text()))?;
        Ok(PagePath(value))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // Server-rendered pages
    let pages = Router::new()
        .route("/", get(catalog::index))
        .route("/adicionar_livro", post(catalog::add_book))
        .route("/remover/:book_id", get(catalog::remove_book))
        .route("/emprestar/:book_id", get(loans::loan_form))
        .route("/realizar_emprestimo/:book_id", post(loans::create_loan))
        .route("/emprestimos", get(loans::list_loans))
        .route("/devolver/:loan_id", get(loans::return_loan));

    // API v1 routes
    let api_v1 = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/books", get(rest::list_books))
        .route("/loans", get(rest::list_loans))
        .route("/stats", get(rest::get_stats));

    Router::new()
        .merge(pages)
        .nest("/api/v1", api_v1)
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
