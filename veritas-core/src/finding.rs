//! Findings and their provenance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The severity of a single finding, ordered least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// The weight used by the consensus engine's confidence scoring.
    pub fn weight(self) -> f64 {
        match self {
            Severity::Critical => 1.0,
            Severity::High => 0.8,
            Severity::Medium => 0.6,
            Severity::Low => 0.4,
            Severity::Info => 0.2,
        }
    }

    /// Threat/safe classification used by conflict detection: CRITICAL/HIGH/MEDIUM/LOW are a "threat", INFO is "safe".
    pub fn is_threat(self) -> bool {
        !matches!(self, Severity::Info)
    }

    /// Upgrade by exactly one tier, saturating at CRITICAL. Used by the
    /// darknet "paranoia mode" strategy.
    pub fn upgrade_one_tier(self) -> Severity {
        match self {
            Severity::Info => Severity::Low,
            Severity::Low => Severity::Medium,
            Severity::Medium => Severity::High,
            Severity::High => Severity::Critical,
            Severity::Critical => Severity::Critical,
        }
    }
}

/// The agent type that produced a finding or an OSINT/consensus source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    Vision,
    Osint,
    Security,
}

const MAX_EVIDENCE_LEN: usize = 500;

/// A single explainable observation about the target, attributable to
/// exactly one source agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub category_id: String,
    pub pattern_type: String,
    pub severity: Severity,
    pub confidence: f64,
    pub description: String,
    pub evidence: String,
    pub source_agent: AgentType,
    pub cwe_id: Option<String>,
    pub cvss_score: Option<f64>,
    pub recommendation: Option<String>,
}

impl Finding {
    pub fn new(
        id: impl Into<String>,
        category_id: impl Into<String>,
        pattern_type: impl Into<String>,
        severity: Severity,
        confidence: f64,
        description: impl Into<String>,
        evidence: impl Into<String>,
        source_agent: AgentType,
    ) -> Self {
        let mut evidence = evidence.into();
        if evidence.len() > MAX_EVIDENCE_LEN {
            evidence.truncate(MAX_EVIDENCE_LEN);
        }
        Self {
            id: id.into(),
            category_id: category_id.into(),
            pattern_type: pattern_type.into(),
            severity,
            confidence: confidence.clamp(0.0, 1.0),
            description: description.into(),
            evidence,
            source_agent,
            cwe_id: None,
            cvss_score: None,
            recommendation: None,
        }
    }
}

/// Consensus-engine input derived from a `Finding`: just enough to
/// aggregate across agents without re-parsing the whole finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingSource {
    pub agent_type: AgentType,
    pub finding_id: String,
    pub severity: Severity,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl FindingSource {
    pub fn new(agent_type: AgentType, finding_id: impl Into<String>, severity: Severity, confidence: f64) -> Self {
        Self {
            agent_type,
            finding_id: finding_id.into(),
            severity,
            confidence: confidence.clamp(0.0, 1.0),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_is_truncated() {
        let long = "x".repeat(600);
        let f = Finding::new("f1", "cat", "pt", Severity::Low, 0.5, "d", long, AgentType::Security);
        assert_eq!(f.evidence.len(), MAX_EVIDENCE_LEN);
    }

    #[test]
    fn severity_ordering_is_ascending() {
        assert!(Severity::Info < Severity::Low);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn upgrade_saturates_at_critical() {
        assert_eq!(Severity::Critical.upgrade_one_tier(), Severity::Critical);
        assert_eq!(Severity::Info.upgrade_one_tier(), Severity::Low);
    }
}
