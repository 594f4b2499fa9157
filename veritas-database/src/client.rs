//! Connection pooling and pragma setup.
//!
//! Built against `sqlx::SqlitePool` for a single-file WAL store, rather
//! than a server-backed pool.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::schema::{CREATE_TABLES, SESSION_PRAGMAS};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: std::path::PathBuf,
    pub pool_max: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into(), pool_max: 10, connect_timeout: Duration::from_secs(10) }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseClient {
    pool: SqlitePool,
}

impl DatabaseClient {
    /// Open (creating if absent) the single audit database file, issue
    /// the WAL session pragmas, and run table/index creation.
    pub async fn connect(config: DatabaseConfig) -> Result<Self> {
        if let Some(parent) = config.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("failed to create database directory")?;
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", config.path.display()))
            .context("invalid database path")?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_max)
            .acquire_timeout(config.connect_timeout)
            .connect_with(options)
            .await
            .context("failed to open audit database")?;

        for pragma in SESSION_PRAGMAS {
            sqlx::query(pragma).execute(&pool).await.context("failed to apply session pragma")?;
        }

        sqlx::query(CREATE_TABLES).execute(&pool).await.context("failed to create schema")?;

        info!(path = %config.path.display(), "audit database ready");
        Ok(Self { pool })
    }

    /// In-memory pool for tests; still WAL-capable pragmas are applied
    /// where meaningful, but `journal_mode=WAL` is a no-op on `:memory:`.
    #[cfg(test)]
    pub async fn connect_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .context("failed to open in-memory database")?;
        sqlx::query(CREATE_TABLES).execute(&pool).await.context("failed to create schema")?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
