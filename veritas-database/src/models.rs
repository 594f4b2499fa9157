//! Row models returned by the repository layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuditRow {
    pub id: String,
    pub url: String,
    pub status: String,
    pub tier: String,
    pub verdict_mode: String,
    pub trust_score: Option<f64>,
    pub risk_level: Option<String>,
    pub site_type: Option<String>,
    pub narrative: Option<String>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FindingRow {
    pub id: String,
    pub audit_id: String,
    pub agent_type: String,
    pub pattern_type: String,
    pub severity: String,
    pub description: String,
    pub evidence: Option<String>,
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScreenshotRow {
    pub id: String,
    pub audit_id: String,
    pub filepath: String,
    pub label: Option<String>,
    pub size_bytes: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRow {
    pub id: String,
    pub audit_id: String,
    pub event_type: String,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OsintCacheRow {
    pub id: String,
    pub query_key: String,
    pub source: String,
    pub category: String,
    pub result: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// An audit together with its eager-loaded associations, as returned by
/// `AuditRepository::get_by_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditWithAssociations {
    pub audit: AuditRow,
    pub findings: Vec<FindingRow>,
    pub screenshots: Vec<ScreenshotRow>,
}

/// Fields accepted on `create`; the row's `id`/timestamps are assigned by
/// the repository.
#[derive(Debug, Clone)]
pub struct NewAudit {
    pub id: String,
    pub url: String,
    pub status: String,
    pub tier: String,
    pub verdict_mode: String,
}
