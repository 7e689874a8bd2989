//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared state cloned into each request handler via Axum's state extraction.
///
/// `DatabaseConnection` is a connection pool; clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
