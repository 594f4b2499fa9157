//! Schema migration tracking, reduced to what a single-file embedded
//! store needs: one idempotent baseline migration plus a tracking table
//! so future schema changes have somewhere to register.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use crate::client::DatabaseClient;
use crate::schema::CREATE_TABLES;

const TRACKING_TABLE: &str = "schema_migrations";

pub struct MigrationRunner<'a> {
    client: &'a DatabaseClient,
}

impl<'a> MigrationRunner<'a> {
    pub fn new(client: &'a DatabaseClient) -> Self {
        Self { client }
    }

    /// Applies the baseline schema (idempotent `CREATE TABLE IF NOT
    /// EXISTS`) and records it in the tracking table if not already
    /// present. Safe to call on every startup.
    pub async fn run(&self) -> Result<()> {
        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {TRACKING_TABLE} (
                id TEXT PRIMARY KEY,
                applied_at TEXT NOT NULL
            )"
        ))
        .execute(self.client.pool())
        .await
        .context("failed to create migration tracking table")?;

        sqlx::query(CREATE_TABLES)
            .execute(self.client.pool())
            .await
            .context("failed to apply baseline schema")?;

        let already_recorded: Option<(String,)> =
            sqlx::query_as(&format!("SELECT id FROM {TRACKING_TABLE} WHERE id = ?"))
                .bind("0001_baseline")
                .fetch_optional(self.client.pool())
                .await
                .context("failed to query migration tracking table")?;

        if already_recorded.is_none() {
            sqlx::query(&format!("INSERT INTO {TRACKING_TABLE} (id, applied_at) VALUES (?, ?)"))
                .bind("0001_baseline")
                .bind(Utc::now().to_rfc3339())
                .execute(self.client.pool())
                .await
                .context("failed to record baseline migration")?;
            info!("applied baseline schema migration");
        }

        Ok(())
    }
}
