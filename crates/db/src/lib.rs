//! Persistence layer for the marquee catalog.
//!
//! Holds the SQLite pool helpers, entity models, one repository per table,
//! the [`catalog::Catalog`] query handle, and the reset-and-reseed operation.

use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod catalog;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use error::{DbError, DbResult};

pub type DbPool = sqlx::SqlitePool;

/// Embedded, reversible schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create a connection pool from a `sqlite:` database URL.
///
/// The database file is created if it does not exist, and foreign keys are
/// enforced on every connection.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Revert every applied migration, dropping all catalog tables.
pub async fn drop_schema(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.undo(pool, 0).await
}
