//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources handed to every handler through Axum's state extraction.
///
/// Cloned once per request. `DatabaseConnection` is a pool handle, so clones share
/// the same connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates the application state from an open database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
