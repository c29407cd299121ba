use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test environment holding an in-memory SQLite connection and an optional session.
///
/// The session is stored in the same in-memory database as the application tables, so
/// anything a test writes through the session is visible to code reading the database.
/// Both are created lazily and live as long as the context.
pub struct TestContext {
    /// In-memory SQLite connection, created on first call to `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the `tower-sessions` SQLite store, created on first call to
    /// `session()`.
    pub session: Option<Session>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates an empty context with neither database nor session.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the in-memory database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        match self.db {
            Some(ref db) => Ok(db),
            None => unreachable!("database connection initialized above"),
        }
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the test session.
    ///
    /// On first call the session table is migrated into the test database and a fresh
    /// session with a seven day inactivity expiry is created.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session
    /// - `Err(TestError::Database)` - Failed to connect or to create the session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        match self.session {
            Some(ref session) => Ok(session),
            None => unreachable!("session initialized above"),
        }
    }

    /// Gets or creates both the database and the session.
    ///
    /// Avoids the double mutable borrow that calling `database()` and `session()`
    /// separately would need.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (&self.db, &self.session) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => unreachable!("database and session initialized above"),
        }
    }
}
