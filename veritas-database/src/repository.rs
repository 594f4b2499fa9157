//! `AuditRepository` contract.
//!
//! Free functions against a pool plus a thin async-trait facade, rather
//! than an ORM.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;
use veritas_core::{AuditId, VeritasError};

use crate::client::DatabaseClient;
use crate::models::{AuditRow, AuditWithAssociations, EventRow, FindingRow, NewAudit, ScreenshotRow};

const MAX_RETRIES: u32 = 3;

#[async_trait]
pub trait AuditRepository: Send + Sync {
    async fn get_by_id(&self, audit_id: &AuditId) -> Result<Option<AuditWithAssociations>>;
    async fn create(&self, new_audit: NewAudit) -> Result<AuditRow>;
    async fn update(&self, audit: &AuditRow) -> Result<AuditRow>;
    async fn update_status(
        &self,
        audit_id: &AuditId,
        status: &str,
        error_message: Option<&str>,
    ) -> Result<()>;
    async fn list_recent(
        &self,
        limit: i64,
        offset: i64,
        status_filter: Option<&str>,
    ) -> Result<Vec<AuditRow>>;
    async fn get_by_url(&self, url: &str, limit: i64) -> Result<Vec<AuditRow>>;

    async fn insert_finding(&self, finding: FindingRow) -> Result<()>;
    async fn insert_screenshot(&self, screenshot: ScreenshotRow) -> Result<()>;
    async fn insert_event(&self, event: EventRow) -> Result<()>;
}

pub struct SqliteAuditRepository {
    client: DatabaseClient,
}

impl SqliteAuditRepository {
    pub fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// WAL readers/writers occasionally collide under load; recoverable
    /// via bounded retry before escalating to a fatal persistence
    /// conflict.
    async fn with_retry<T, F, Fut>(&self, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, sqlx::Error>>,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(sqlx::Error::Database(db_err))
                    if attempt < MAX_RETRIES && db_err.message().contains("locked") =>
                {
                    attempt += 1;
                    warn!(attempt, "database locked, retrying");
                    tokio::time::sleep(std::time::Duration::from_millis(20 * attempt as u64)).await;
                }
                Err(err) => {
                    return Err(VeritasError::PersistenceConflict(err.to_string()).into());
                }
            }
        }
    }
}

#[async_trait]
impl AuditRepository for SqliteAuditRepository {
    async fn get_by_id(&self, audit_id: &AuditId) -> Result<Option<AuditWithAssociations>> {
        let audit: Option<AuditRow> = sqlx::query_as("SELECT * FROM audits WHERE id = ?")
            .bind(audit_id.as_str())
            .fetch_optional(self.client.pool())
            .await
            .context("failed to load audit")?;

        let Some(audit) = audit else { return Ok(None) };

        let findings: Vec<FindingRow> =
            sqlx::query_as("SELECT * FROM audit_findings WHERE audit_id = ? ORDER BY created_at ASC")
                .bind(audit_id.as_str())
                .fetch_all(self.client.pool())
                .await
                .context("failed to load findings")?;

        let screenshots: Vec<ScreenshotRow> =
            sqlx::query_as("SELECT * FROM audit_screenshots WHERE audit_id = ? ORDER BY created_at ASC")
                .bind(audit_id.as_str())
                .fetch_all(self.client.pool())
                .await
                .context("failed to load screenshots")?;

        Ok(Some(AuditWithAssociations { audit, findings, screenshots }))
    }

    async fn create(&self, new_audit: NewAudit) -> Result<AuditRow> {
        let now = Utc::now();
        self.with_retry(|| async {
            sqlx::query(
                "INSERT INTO audits (id, url, status, tier, verdict_mode, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&new_audit.id)
            .bind(&new_audit.url)
            .bind(&new_audit.status)
            .bind(&new_audit.tier)
            .bind(&new_audit.verdict_mode)
            .bind(now.to_rfc3339())
            .bind(now.to_rfc3339())
            .execute(self.client.pool())
            .await
        })
        .await?;

        sqlx::query_as("SELECT * FROM audits WHERE id = ?")
            .bind(&new_audit.id)
            .fetch_one(self.client.pool())
            .await
            .context("failed to re-read newly created audit")
    }

    async fn update(&self, audit: &AuditRow) -> Result<AuditRow> {
        let now = Utc::now();
        self.with_retry(|| async {
            sqlx::query(
                "UPDATE audits SET url = ?, status = ?, tier = ?, verdict_mode = ?, trust_score = ?,
                 risk_level = ?, site_type = ?, narrative = ?, error_message = ?, updated_at = ?,
                 completed_at = ? WHERE id = ?",
            )
            .bind(&audit.url)
            .bind(&audit.status)
            .bind(&audit.tier)
            .bind(&audit.verdict_mode)
            .bind(audit.trust_score)
            .bind(&audit.risk_level)
            .bind(&audit.site_type)
            .bind(&audit.narrative)
            .bind(&audit.error_message)
            .bind(now.to_rfc3339())
            .bind(audit.completed_at.map(|t| t.to_rfc3339()))
            .bind(&audit.id)
            .execute(self.client.pool())
            .await
        })
        .await?;

        sqlx::query_as("SELECT * FROM audits WHERE id = ?")
            .bind(&audit.id)
            .fetch_one(self.client.pool())
            .await
            .context("failed to re-read updated audit")
    }

    async fn update_status(
        &self,
        audit_id: &AuditId,
        status: &str,
        error_message: Option<&str>,
    ) -> Result<()> {
        let now = Utc::now();
        self.with_retry(|| async {
            sqlx::query(
                "UPDATE audits SET status = ?, error_message = COALESCE(?, error_message),
                 updated_at = ? WHERE id = ?",
            )
            .bind(status)
            .bind(error_message)
            .bind(now.to_rfc3339())
            .bind(audit_id.as_str())
            .execute(self.client.pool())
            .await
        })
        .await?;
        Ok(())
    }

    async fn list_recent(
        &self,
        limit: i64,
        offset: i64,
        status_filter: Option<&str>,
    ) -> Result<Vec<AuditRow>> {
        let rows = match status_filter {
            Some(status) => {
                sqlx::query_as(
                    "SELECT * FROM audits WHERE status = ? ORDER BY created_at DESC LIMIT ? OFFSET ?",
                )
                .bind(status)
                .bind(limit)
                .bind(offset)
                .fetch_all(self.client.pool())
                .await
            }
            None => {
                sqlx::query_as("SELECT * FROM audits ORDER BY created_at DESC LIMIT ? OFFSET ?")
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(self.client.pool())
                    .await
            }
        };
        rows.context("failed to list recent audits")
    }

    async fn get_by_url(&self, url: &str, limit: i64) -> Result<Vec<AuditRow>> {
        sqlx::query_as("SELECT * FROM audits WHERE url = ? ORDER BY created_at DESC LIMIT ?")
            .bind(url)
            .bind(limit)
            .fetch_all(self.client.pool())
            .await
            .context("failed to query audits by url")
    }

    async fn insert_finding(&self, finding: FindingRow) -> Result<()> {
        self.with_retry(|| async {
            sqlx::query(
                "INSERT INTO audit_findings
                 (id, audit_id, agent_type, pattern_type, severity, description, evidence, confidence, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&finding.id)
            .bind(&finding.audit_id)
            .bind(&finding.agent_type)
            .bind(&finding.pattern_type)
            .bind(&finding.severity)
            .bind(&finding.description)
            .bind(&finding.evidence)
            .bind(finding.confidence)
            .bind(finding.created_at.to_rfc3339())
            .execute(self.client.pool())
            .await
        })
        .await?;
        Ok(())
    }

    async fn insert_screenshot(&self, screenshot: ScreenshotRow) -> Result<()> {
        self.with_retry(|| async {
            sqlx::query(
                "INSERT INTO audit_screenshots (id, audit_id, filepath, label, size_bytes, created_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(&screenshot.id)
            .bind(&screenshot.audit_id)
            .bind(&screenshot.filepath)
            .bind(&screenshot.label)
            .bind(screenshot.size_bytes)
            .bind(screenshot.created_at.to_rfc3339())
            .execute(self.client.pool())
            .await
        })
        .await?;
        Ok(())
    }

    async fn insert_event(&self, event: EventRow) -> Result<()> {
        self.with_retry(|| async {
            sqlx::query(
                "INSERT INTO audit_events (id, audit_id, event_type, payload, created_at)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&event.id)
            .bind(&event.audit_id)
            .bind(&event.event_type)
            .bind(&event.payload)
            .bind(event.created_at.to_rfc3339())
            .execute(self.client.pool())
            .await
        })
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_core::AuditId;

    async fn repo() -> SqliteAuditRepository {
        let client = DatabaseClient::connect_in_memory().await.unwrap();
        SqliteAuditRepository::new(client)
    }

    #[tokio::test]
    async fn create_then_get_by_id_round_trips() {
        let repo = repo().await;
        let id = AuditId::generate();
        let created = repo
            .create(NewAudit {
                id: id.as_str().to_string(),
                url: "https://example.com".into(),
                status: "queued".into(),
                tier: "standard_audit".into(),
                verdict_mode: "expert".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.status, "queued");

        let loaded = repo.get_by_id(&id).await.unwrap().expect("audit should exist");
        assert_eq!(loaded.audit.url, "https://example.com");
        assert!(loaded.findings.is_empty());
    }

    #[tokio::test]
    async fn update_status_is_idempotent_and_partial() {
        let repo = repo().await;
        let id = AuditId::generate();
        repo.create(NewAudit {
            id: id.as_str().to_string(),
            url: "https://example.com".into(),
            status: "queued".into(),
            tier: "standard_audit".into(),
            verdict_mode: "expert".into(),
        })
        .await
        .unwrap();

        repo.update_status(&id, "running", None).await.unwrap();
        repo.update_status(&id, "error", Some("node fatal")).await.unwrap();

        let loaded = repo.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(loaded.audit.status, "error");
        assert_eq!(loaded.audit.error_message.as_deref(), Some("node fatal"));
    }

    #[tokio::test]
    async fn list_recent_orders_descending_by_created_at() {
        let repo = repo().await;
        for i in 0..3 {
            let id = AuditId::generate();
            repo.create(NewAudit {
                id: id.as_str().to_string(),
                url: format!("https://example{i}.com"),
                status: "queued".into(),
                tier: "standard_audit".into(),
                verdict_mode: "expert".into(),
            })
            .await
            .unwrap();
        }
        let recent = repo.list_recent(10, 0, None).await.unwrap();
        assert_eq!(recent.len(), 3);
    }

    #[tokio::test]
    async fn cascade_delete_removes_findings_with_audit() {
        let repo = repo().await;
        let id = AuditId::generate();
        repo.create(NewAudit {
            id: id.as_str().to_string(),
            url: "https://example.com".into(),
            status: "queued".into(),
            tier: "standard_audit".into(),
            verdict_mode: "expert".into(),
        })
        .await
        .unwrap();
        repo.insert_finding(FindingRow {
            id: "f1".into(),
            audit_id: id.as_str().to_string(),
            agent_type: "security".into(),
            pattern_type: "insecure_headers".into(),
            severity: "medium".into(),
            description: "missing CSP".into(),
            evidence: None,
            confidence: 0.7,
            created_at: Utc::now(),
        })
        .await
        .unwrap();

        sqlx::query("DELETE FROM audits WHERE id = ?")
            .bind(id.as_str())
            .execute(repo.client.pool())
            .await
            .unwrap();

        let remaining: Vec<FindingRow> = sqlx::query_as("SELECT * FROM audit_findings")
            .fetch_all(repo.client.pool())
            .await
            .unwrap();
        assert!(remaining.is_empty(), "ON DELETE CASCADE should have removed findings too");
    }
}
