//! Persistence layer: pool setup, schema bootstrap, record models and
//! repositories for the `students` and `scores` tables.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// A single pooled connection, held for the duration of one request.
pub type DbConnection = sqlx::pool::PoolConnection<sqlx::Sqlite>;

/// DDL for both tables. Every statement is `IF NOT EXISTS`.
const SCHEMA: &str = include_str!("../schema.sql");

/// Connection settings for [`create_pool`].
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// SQLite URL, e.g. `sqlite://roster.db` or `sqlite::memory:`.
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Turn on `PRAGMA foreign_keys`. Off by default so scores may reference
    /// students that do not (or no longer) exist.
    pub enforce_foreign_keys: bool,
}

impl DbConfig {
    /// A private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` opens its own empty database,
    /// so the pool is pinned to a single connection that is never reaped.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            enforce_foreign_keys: false,
        }
    }

    fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Create a connection pool, creating the database file if it is missing.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(config.enforce_foreign_keys);

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout);

    if config.is_in_memory() {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    pool_options.connect_with(options).await
}

/// Create the `students` and `scores` tables if they do not exist yet.
///
/// Must run once before the server starts accepting requests.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    tracing::debug!("Schema initialised");
    Ok(())
}

/// Run a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
