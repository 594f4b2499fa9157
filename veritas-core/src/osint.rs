//! OSINT result shapes shared between the orchestrator, database, and
//! consensus crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsintCategory {
    Dns,
    Whois,
    Ssl,
    ThreatIntel,
    Reputation,
    Social,
}

impl OsintCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            OsintCategory::Dns => "dns",
            OsintCategory::Whois => "whois",
            OsintCategory::Ssl => "ssl",
            OsintCategory::ThreatIntel => "threat_intel",
            OsintCategory::Reputation => "reputation",
            OsintCategory::Social => "social",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OsintStatus {
    Success,
    Error,
    Timeout,
    RateLimited,
}

/// One OSINT source's answer for one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsintResult {
    pub source: String,
    pub category: OsintCategory,
    pub query_type: String,
    pub query_value: String,
    pub status: OsintStatus,
    pub data: serde_json::Value,
    pub confidence_score: f64,
    pub cached_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
}

impl OsintResult {
    pub fn success(
        source: impl Into<String>,
        category: OsintCategory,
        query_type: impl Into<String>,
        query_value: impl Into<String>,
        data: serde_json::Value,
        confidence_score: f64,
    ) -> Self {
        Self {
            source: source.into(),
            category,
            query_type: query_type.into(),
            query_value: query_value.into(),
            status: OsintStatus::Success,
            data,
            confidence_score: confidence_score.clamp(0.0, 1.0),
            cached_at: None,
            error_message: None,
        }
    }

    pub fn failed(
        source: impl Into<String>,
        category: OsintCategory,
        query_type: impl Into<String>,
        query_value: impl Into<String>,
        status: OsintStatus,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            category,
            query_type: query_type.into(),
            query_value: query_value.into(),
            status,
            data: serde_json::Value::Null,
            confidence_score: 0.0,
            cached_at: None,
            error_message: Some(error_message.into()),
        }
    }
}
