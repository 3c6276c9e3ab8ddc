//! Database Connection Management
//!
//! Utilities for creating SQLite connection pools and applying the schema.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::config::DatabaseConfig;
use crate::shared::errors::RepositoryError;

/// Create a SQLite connection pool from configuration
///
/// The database file is created if missing and foreign keys are enforced on
/// every connection, which cascade deletes rely on. An in-memory database
/// lives only as long as its connection, so its pool holds exactly one
/// connection that never expires.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is malformed or the store cannot be opened.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections);
    if config.url.contains(":memory:") {
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    pool_options.connect_with(options).await
}

/// Apply the embedded schema migrations
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` if a migration fails.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Classify a failed write: rows rejected by a foreign key or check
/// constraint are a caller error, anything else is a storage fault.
pub(crate) fn map_write_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() || db.is_check_violation() => {
            RepositoryError::ConstraintViolation(db.message().to_string())
        }
        other => RepositoryError::Database(other),
    }
}
