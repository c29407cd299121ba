use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Sessions expire after this long without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's own Sqlite pool.
///
/// The session table is created on first start.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer issuing the session cookie
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(config.session_secure)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            SESSION_INACTIVITY_DAYS,
        ))))
}

/// Builds the CORS layer.
///
/// With `CORS_ALLOWED_ORIGIN` set, that origin may send credentialed requests. Without
/// it the layer allows no origin, so browsers only reach the API same-origin.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let Some(origin) = &config.cors_allowed_origin else {
        return Ok(CorsLayer::new());
    };

    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOWED_ORIGIN".to_string(),
        value: origin.clone(),
        reason: e.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}
