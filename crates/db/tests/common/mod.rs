#![allow(dead_code)]

use roster_db::{DbConfig, DbPool};

/// Fresh in-memory database with the schema applied.
pub async fn test_pool() -> DbPool {
    pool_with(DbConfig::in_memory()).await
}

/// Same as [`test_pool`] but with `PRAGMA foreign_keys` turned on.
pub async fn test_pool_enforcing_fks() -> DbPool {
    pool_with(DbConfig {
        enforce_foreign_keys: true,
        ..DbConfig::in_memory()
    })
    .await
}

async fn pool_with(config: DbConfig) -> DbPool {
    let pool = roster_db::create_pool(&config).await.unwrap();
    roster_db::init_schema(&pool).await.unwrap();
    pool
}
