//! Biblioteca Library Loan Tracker
//!
//! Catalog books, lend them to students for a fixed period and record their
//! return, through server-rendered HTML pages backed by SQLite.

use std::sync::Arc;

use sqlx::SqlitePool;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let repository = repository::Repository::new(pool);
        Self {
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
