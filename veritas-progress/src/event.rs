//! Progress event envelope and the closed set of event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lower numeric value = higher priority. Ordered so that sorting a
/// `Vec<Priority>` ascending yields highest-priority-first, matching the
/// teacher's convention of priority-as-rank seen in `orchestration`'s
/// scheduling code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Priority {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum EventPayload {
    Progress { pct: f32, eta_seconds: Option<f64>, message: String },
    PhaseStart { phase: String, message: String },
    PhaseComplete { phase: String, summary: serde_json::Value },
    PhaseError { phase: String, error: String },
    LogEntry { agent: String, message: String, level: String },
    Screenshot { url: String, label: String, index: u32 },
    Finding { finding: serde_json::Value },
    FindingsBatch { findings: Vec<serde_json::Value> },
    SecurityResult { module: String, result: serde_json::Value },
    SiteType { site_type: String, confidence: f64 },
    StatsUpdate { stats: serde_json::Value },
    AuditResult { result: serde_json::Value },
    AuditComplete { elapsed: f64 },
    AuditError { error: String },
    Heartbeat,
    Highlight { message: String },
}

impl EventPayload {
    /// The default priority a bare payload carries absent an explicit
    /// override: terminal/error events outrank routine progress chatter.
    pub fn default_priority(&self) -> Priority {
        match self {
            EventPayload::AuditError { .. }
            | EventPayload::AuditComplete { .. }
            | EventPayload::AuditResult { .. }
            | EventPayload::PhaseError { .. } => Priority::Critical,
            EventPayload::Finding { .. }
            | EventPayload::FindingsBatch { .. }
            | EventPayload::SecurityResult { .. }
            | EventPayload::SiteType { .. }
            | EventPayload::PhaseStart { .. }
            | EventPayload::PhaseComplete { .. } => Priority::High,
            EventPayload::Progress { .. } | EventPayload::StatsUpdate { .. } => Priority::Medium,
            EventPayload::LogEntry { .. } | EventPayload::Screenshot { .. } | EventPayload::Highlight { .. } => {
                Priority::Low
            }
            EventPayload::Heartbeat => Priority::Low,
        }
    }
}

/// A fully-ordered event in one audit's progress stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub seq: u64,
    pub timestamp: DateTime<Utc>,
    pub priority: Priority,
    pub payload: EventPayload,
}

impl ProgressEvent {
    pub fn new(seq: u64, payload: EventPayload) -> Self {
        let priority = payload.default_priority();
        Self { seq, timestamp: Utc::now(), priority, payload }
    }
}

pub const STDOUT_SENTINEL: &str = "##PROGRESS:";
