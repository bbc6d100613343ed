//! Catalog pages

use axum::{
    extract::State,
    response::{Html, Redirect},
};

use crate::{models::book::CreateBook, views, AppState};

use super::{PageForm, PagePath, PageResult};

/// Catalog view: all books plus the add form
pub async fn index(State(state): State<AppState>) -> PageResult<Html<String>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Html(views::catalog::render(&books)))
}

/// Add a book from the catalog form
pub async fn add_book(
    State(state): State<AppState>,
    PageForm(book): PageForm<CreateBook>,
) -> PageResult<Redirect> {
    state.services.catalog.add_book(book).await?;
    Ok(Redirect::to("/"))
}

/// Remove a book and go back to the catalog
pub async fn remove_book(
    State(state): State<AppState>,
    PagePath(book_id): PagePath<i64>,
) -> PageResult<Redirect> {
    state.services.catalog.remove_book(book_id).await?;
    Ok(Redirect::to("/"))
}
