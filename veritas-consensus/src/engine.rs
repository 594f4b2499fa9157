//! Multi-source finding consensus;
//! grounded on `examples/original_source/veritas/quality/consensus_engine.py`.

use dashmap::DashMap;
use veritas_core::finding::AgentType;
use veritas_core::{ConfidenceBreakdown, ConsensusResult, ConsensusStatus, FindingSource, Severity};

pub struct ConsensusEngine {
    min_sources: usize,
    findings: DashMap<String, ConsensusResult>,
}

impl ConsensusEngine {
    pub fn new(min_sources: usize) -> Self {
        Self { min_sources, findings: DashMap::new() }
    }

    /// Add one agent's observation of `finding_key`, returning the
    /// resulting status: build the source, check for conflict, append,
    /// then recompute status and confidence.
    pub fn add_finding(
        &self,
        finding_key: &str,
        agent_type: AgentType,
        finding_id: impl Into<String>,
        severity: Severity,
        confidence: f64,
    ) -> ConsensusStatus {
        let source = FindingSource::new(agent_type, finding_id, severity, confidence);

        let mut result = self.findings.entry(finding_key.to_string()).or_insert_with(|| ConsensusResult::new(finding_key));

        if detect_conflict(&result.sources, &source) {
            result.status = ConsensusStatus::Conflicted;
            result.conflict_notes.push(format!(
                "Conflict detected: {:?} reports {:?} while existing sources disagree",
                source.agent_type, source.severity
            ));
            result.sources.push(source);
            return result.status;
        }

        result.sources.push(source);

        let unique_agents = result.distinct_agent_count();
        let next_status = if unique_agents >= self.min_sources {
            ConsensusStatus::Confirmed
        } else if unique_agents == 1 {
            ConsensusStatus::Unconfirmed
        } else {
            ConsensusStatus::Pending
        };

        debug_assert!(result.status.can_transition_to(next_status));
        result.status = next_status;

        if matches!(next_status, ConsensusStatus::Confirmed | ConsensusStatus::Unconfirmed) {
            let (confidence, breakdown) = compute_confidence(&result, self.min_sources);
            result.aggregated_confidence = confidence;
            result.confidence_breakdown = breakdown;
        } else {
            result.aggregated_confidence = 0.0;
        }

        result.status
    }

    pub fn get_result(&self, finding_key: &str) -> Option<ConsensusResult> {
        self.findings.get(finding_key).map(|entry| entry.value().clone())
    }

    pub fn get_confirmed_findings(&self) -> Vec<ConsensusResult> {
        self.findings.iter().filter(|e| e.status == ConsensusStatus::Confirmed).map(|e| e.value().clone()).collect()
    }

    pub fn get_conflicted_findings(&self) -> Vec<ConsensusResult> {
        self.findings.iter().filter(|e| e.status == ConsensusStatus::Conflicted).map(|e| e.value().clone()).collect()
    }
}

/// A conflict occurs when one source indicates a threat
/// (CRITICAL/HIGH/MEDIUM/LOW) and another indicates safe (INFO).
fn detect_conflict(existing_sources: &[FindingSource], new_source: &FindingSource) -> bool {
    let new_is_threat = new_source.severity.is_threat();
    existing_sources.iter().any(|s| s.severity.is_threat() != new_is_threat)
}

/// Weighted base score, clamped into a tier-specific range keyed by
/// source count and max severity, rounded to one decimal.
fn compute_confidence(result: &ConsensusResult, min_sources: usize) -> (f64, ConfidenceBreakdown) {
    let source_count = result.distinct_agent_count();
    let max_severity_weight = if result.sources.is_empty() {
        0.5
    } else {
        result.sources.iter().map(|s| s.severity.weight()).fold(f64::MIN, f64::max)
    };

    let avg_confidence = if result.sources.is_empty() {
        0.0
    } else {
        result.sources.iter().map(|s| s.confidence).sum::<f64>() / result.sources.len() as f64
    };

    let source_agreement_factor = (source_count as f64 / min_sources as f64).min(1.0);
    let severity_factor = max_severity_weight;
    let context_factor = avg_confidence;

    let base = 60.0 * source_agreement_factor + 25.0 * severity_factor + 15.0 * context_factor;

    let final_score = if source_count >= min_sources {
        if severity_factor >= 0.8 {
            base.max(75.0).min(100.0)
        } else {
            base.clamp(50.0, 75.0)
        }
    } else if severity_factor >= 0.8 {
        base.clamp(40.0, 60.0).min(49.0)
    } else {
        base.clamp(20.0, 40.0).min(49.0)
    };

    let final_score = (final_score * 10.0).round() / 10.0;

    let breakdown = ConfidenceBreakdown {
        source_agreement: (source_agreement_factor * 100.0 * 10.0).round() / 10.0,
        severity_factor: (severity_factor * 100.0 * 10.0).round() / 10.0,
        context_confidence: (context_factor * 100.0 * 10.0).round() / 10.0,
        source_count,
    };

    (final_score, breakdown)
}

/// Display tier for an aggregated confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    HighConfidence,
    MediumConfidence,
    UnconfirmedHigh,
    UnconfirmedMedium,
    LowConfidence,
}

pub fn confidence_tier(score: f64) -> ConfidenceTier {
    if score >= 75.0 {
        ConfidenceTier::HighConfidence
    } else if score >= 50.0 {
        ConfidenceTier::MediumConfidence
    } else if score >= 40.0 {
        ConfidenceTier::UnconfirmedHigh
    } else if score >= 20.0 {
        ConfidenceTier::UnconfirmedMedium
    } else {
        ConfidenceTier::LowConfidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_source_is_unconfirmed_and_capped_at_49() {
        let engine = ConsensusEngine::new(2);
        let status = engine.add_finding("k1", AgentType::Vision, "f1", Severity::Critical, 0.9);
        assert_eq!(status, ConsensusStatus::Unconfirmed);
        let result = engine.get_result("k1").unwrap();
        assert!(result.aggregated_confidence <= 49.0);
    }

    #[test]
    fn two_distinct_agents_confirm_and_score_at_least_75_for_high_severity() {
        let engine = ConsensusEngine::new(2);
        engine.add_finding("k1", AgentType::Vision, "f1", Severity::Critical, 0.9);
        let status = engine.add_finding("k1", AgentType::Security, "f2", Severity::Critical, 0.9);
        assert_eq!(status, ConsensusStatus::Confirmed);
        let result = engine.get_result("k1").unwrap();
        assert!(result.aggregated_confidence >= 75.0);
    }

    #[test]
    fn threat_vs_safe_disagreement_conflicts() {
        let engine = ConsensusEngine::new(2);
        engine.add_finding("k1", AgentType::Vision, "f1", Severity::High, 0.9);
        let status = engine.add_finding("k1", AgentType::Security, "f2", Severity::Info, 0.9);
        assert_eq!(status, ConsensusStatus::Conflicted);
        let result = engine.get_result("k1").unwrap();
        assert_eq!(result.conflict_notes.len(), 1);
    }

    #[test]
    fn conflicted_is_terminal_even_with_further_agreement() {
        let engine = ConsensusEngine::new(2);
        engine.add_finding("k1", AgentType::Vision, "f1", Severity::High, 0.9);
        engine.add_finding("k1", AgentType::Security, "f2", Severity::Info, 0.9);
        let status = engine.add_finding("k1", AgentType::Osint, "f3", Severity::High, 0.9);
        assert_eq!(status, ConsensusStatus::Conflicted);
    }

    #[test]
    fn same_agent_reporting_twice_stays_unconfirmed() {
        let engine = ConsensusEngine::new(2);
        engine.add_finding("k1", AgentType::Vision, "f1", Severity::Medium, 0.6);
        let status = engine.add_finding("k1", AgentType::Vision, "f2", Severity::Medium, 0.6);
        assert_eq!(status, ConsensusStatus::Unconfirmed);
    }
}
