//! Shared test fixtures

use biblioteca_server::{
    config::DatabaseConfig,
    repository, AppState,
};

/// Fresh application state over an empty in-memory database
pub async fn test_state() -> AppState {
    let database = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };

    let pool = repository::connect(&database)
        .await
        .expect("Failed to open in-memory database");

    AppState::new(pool)
}
