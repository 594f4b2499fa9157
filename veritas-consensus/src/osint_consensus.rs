//! OSINT-specific consensus: per-category verdict classification across
//! sources, dominant-verdict determination, and status tiering; grounded on `compute_osint_consensus` /
//! `_osint_result_to_verdict` / `_determine_osint_status` /
//! `_generate_osint_reasoning` in
//! `examples/original_source/veritas/quality/consensus_engine.py`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use veritas_core::{OsintCategory, OsintResult, OsintStatus};

/// The per-source verdict an OSINT result is classified into before
/// aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsintVerdict {
    Malicious,
    Suspicious,
    Safe,
    Unknown,
}

/// A source name that carries enough reputation to confirm a verdict
/// from only two agreeing sources instead of the usual three.
const HIGH_TRUST_SOURCES: [&str; 2] = ["threat_intel", "reputation"];
const DEFAULT_MIN_SOURCES_FOR_CONFIRM: usize = 3;
const HIGH_TRUST_MIN_SOURCES_FOR_CONFIRM: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsintConsensusStatus {
    Confirmed,
    Conflicted,
    Likely,
    Possible,
    Insufficient,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsintConsensusResult {
    pub category: OsintCategory,
    pub status: OsintConsensusStatus,
    pub dominant_verdict: OsintVerdict,
    pub agreement_count: usize,
    pub total_sources: usize,
    pub reasoning: String,
}

fn data_f64(data: &serde_json::Value, key: &str, default: f64) -> f64 {
    data.get(key).and_then(|v| v.as_f64()).unwrap_or(default)
}

fn data_bool(data: &serde_json::Value, key: &str, default: bool) -> bool {
    data.get(key).and_then(|v| v.as_bool()).unwrap_or(default)
}

fn data_str_lower(data: &serde_json::Value, key: &str) -> String {
    data.get(key).and_then(|v| v.as_str()).unwrap_or("").to_lowercase()
}

/// Classifies a single successful OSINT result into a verdict, reading
/// the category-specific fields out of `result.data` rather than the
/// generic `confidence_score`.
fn result_to_verdict(result: &OsintResult) -> OsintVerdict {
    if result.status != OsintStatus::Success {
        return OsintVerdict::Unknown;
    }

    let data = &result.data;

    match result.category {
        OsintCategory::ThreatIntel => {
            let abuse_confidence = data_f64(data, "abuse_confidence", 0.0);
            let reports = data_f64(data, "reports", 0.0);
            if abuse_confidence > 50.0 || reports > 5.0 {
                OsintVerdict::Malicious
            } else if abuse_confidence > 20.0 || reports > 2.0 {
                OsintVerdict::Suspicious
            } else {
                OsintVerdict::Safe
            }
        }
        OsintCategory::Reputation => {
            let detections = data_f64(data, "detections", 0.0);
            let risk = data_str_lower(data, "risk");
            if detections > 3.0 || risk == "high" {
                OsintVerdict::Malicious
            } else if detections > 0.0 || risk == "low" || risk == "medium" {
                OsintVerdict::Suspicious
            } else {
                OsintVerdict::Safe
            }
        }
        OsintCategory::Whois | OsintCategory::Ssl => {
            let age_days = data_f64(data, "age_days", 999.0);
            let is_valid = data_bool(data, "is_valid", true);
            if age_days < 30.0 || !is_valid {
                OsintVerdict::Suspicious
            } else {
                OsintVerdict::Safe
            }
        }
        OsintCategory::Dns | OsintCategory::Social => OsintVerdict::Unknown,
    }
}

fn min_sources_for_category(results: &[OsintResult]) -> usize {
    if results.iter().any(|r| HIGH_TRUST_SOURCES.contains(&r.source.as_str())) {
        HIGH_TRUST_MIN_SOURCES_FOR_CONFIRM
    } else {
        DEFAULT_MIN_SOURCES_FOR_CONFIRM
    }
}

/// Aggregate every OSINT result gathered for one category into a single
/// consensus verdict. `results` must already be filtered to one
/// `OsintCategory`.
pub fn compute_osint_consensus(category: OsintCategory, results: &[OsintResult]) -> OsintConsensusResult {
    let verdicts: Vec<OsintVerdict> = results.iter().map(result_to_verdict).collect();
    let successful: Vec<&OsintVerdict> = verdicts.iter().filter(|v| **v != OsintVerdict::Unknown).collect();
    let total_sources = successful.len();

    if total_sources == 0 {
        return OsintConsensusResult {
            category,
            status: OsintConsensusStatus::Insufficient,
            dominant_verdict: OsintVerdict::Unknown,
            agreement_count: 0,
            total_sources: 0,
            reasoning: "No successful OSINT sources returned a result for this category.".to_string(),
        };
    }

    let mut counts: HashMap<OsintVerdict, usize> = HashMap::new();
    for verdict in &successful {
        *counts.entry(**verdict).or_insert(0) += 1;
    }

    let has_malicious = counts.contains_key(&OsintVerdict::Malicious);
    let has_safe = counts.contains_key(&OsintVerdict::Safe);
    let is_conflict = has_malicious && has_safe;

    // Dominant verdict by mode; malicious/suspicious wins ties over safe
    // when both are present without an outright conflict, since silent
    // agreement on safety should not outrank an active threat signal.
    let dominant_verdict = if is_conflict {
        *counts.iter().max_by_key(|(_, count)| **count).map(|(v, _)| v).unwrap()
    } else if has_malicious {
        OsintVerdict::Malicious
    } else if counts.contains_key(&OsintVerdict::Suspicious) {
        OsintVerdict::Suspicious
    } else {
        *counts.iter().max_by_key(|(_, count)| **count).map(|(v, _)| v).unwrap()
    };

    let agreement_count = counts.get(&dominant_verdict).copied().unwrap_or(0);
    let min_sources = min_sources_for_category(results);

    let status = determine_status(is_conflict, agreement_count, total_sources, min_sources);
    let reasoning = generate_reasoning(status, dominant_verdict, agreement_count, total_sources, min_sources);

    OsintConsensusResult { category, status, dominant_verdict, agreement_count, total_sources, reasoning }
}

fn determine_status(
    is_conflict: bool,
    agreement_count: usize,
    total_sources: usize,
    min_sources: usize,
) -> OsintConsensusStatus {
    if is_conflict {
        return OsintConsensusStatus::Conflicted;
    }
    let agreement_pct = agreement_count as f64 / total_sources as f64;
    if agreement_count >= min_sources {
        OsintConsensusStatus::Confirmed
    } else if agreement_pct >= 0.5 && total_sources >= 2 {
        OsintConsensusStatus::Likely
    } else if agreement_pct >= 0.33 && total_sources >= 2 {
        OsintConsensusStatus::Possible
    } else {
        OsintConsensusStatus::Insufficient
    }
}

fn generate_reasoning(
    status: OsintConsensusStatus,
    verdict: OsintVerdict,
    agreement: usize,
    total: usize,
    min_sources: usize,
) -> String {
    let agreement_pct = if total > 0 { (agreement as f64 / total as f64) * 100.0 } else { 0.0 };
    match status {
        OsintConsensusStatus::Confirmed => format!(
            "CONFIRMED {verdict:?}: {agreement}/{total} sources agree ({agreement_pct:.0}%) - meets {min_sources}+ source consensus threshold. "
        ),
        OsintConsensusStatus::Conflicted => format!(
            "CONFLICTED: sources disagree on verdict ({agreement}/{total} agree on the dominant {verdict:?} classification, {agreement_pct:.0}%). Manual review recommended. "
        ),
        OsintConsensusStatus::Likely => format!(
            "LIKELY {verdict:?}: {agreement}/{total} sources agree ({agreement_pct:.0}%), below the {min_sources}-source confirmation threshold but a clear majority. "
        ),
        OsintConsensusStatus::Possible => format!(
            "POSSIBLE {verdict:?}: only {agreement}/{total} source(s) reported, insufficient corroboration for a confident verdict. "
        ),
        OsintConsensusStatus::Insufficient if total == 0 => {
            "INSUFFICIENT DATA: no OSINT sources returned a usable result. ".to_string()
        }
        OsintConsensusStatus::Insufficient => format!(
            "INSUFFICIENT DATA: only {agreement}/{total} source(s) lean {verdict:?} ({agreement_pct:.0}%), too few to corroborate a verdict. "
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_core::OsintResult;

    fn success(source: &str, category: OsintCategory, data: serde_json::Value) -> OsintResult {
        OsintResult::success(source, category, "domain", "example.com", data, 0.5)
    }

    #[test]
    fn no_results_is_insufficient() {
        let result = compute_osint_consensus(OsintCategory::Dns, &[]);
        assert_eq!(result.status, OsintConsensusStatus::Insufficient);
    }

    #[test]
    fn three_agreeing_threat_intel_sources_confirm() {
        let results = vec![
            success("threat_intel", OsintCategory::ThreatIntel, serde_json::json!({"abuse_confidence": 90, "reports": 10})),
            success("reputation", OsintCategory::ThreatIntel, serde_json::json!({"abuse_confidence": 80, "reports": 8})),
            success("urlvoid", OsintCategory::ThreatIntel, serde_json::json!({"abuse_confidence": 75, "reports": 6})),
        ];
        let result = compute_osint_consensus(OsintCategory::ThreatIntel, &results);
        assert_eq!(result.status, OsintConsensusStatus::Confirmed);
        assert_eq!(result.dominant_verdict, OsintVerdict::Malicious);
    }

    #[test]
    fn high_trust_pair_confirms_at_two_sources() {
        let results = vec![
            success("threat_intel", OsintCategory::ThreatIntel, serde_json::json!({"abuse_confidence": 90})),
            success("reputation", OsintCategory::ThreatIntel, serde_json::json!({"abuse_confidence": 85})),
        ];
        let result = compute_osint_consensus(OsintCategory::ThreatIntel, &results);
        assert_eq!(result.status, OsintConsensusStatus::Confirmed);
    }

    #[test]
    fn malicious_and_safe_present_conflicts() {
        let results = vec![
            success("threat_intel", OsintCategory::ThreatIntel, serde_json::json!({"abuse_confidence": 90})),
            success("urlvoid", OsintCategory::ThreatIntel, serde_json::json!({"abuse_confidence": 5, "reports": 0})),
        ];
        let result = compute_osint_consensus(OsintCategory::ThreatIntel, &results);
        assert_eq!(result.status, OsintConsensusStatus::Conflicted);
    }

    #[test]
    fn single_source_is_insufficient_not_confirmed() {
        let results = vec![success("whois", OsintCategory::Whois, serde_json::json!({"age_days": 10}))];
        let result = compute_osint_consensus(OsintCategory::Whois, &results);
        assert_eq!(result.status, OsintConsensusStatus::Insufficient);
    }

    #[test]
    fn two_of_two_agreeing_below_min_sources_is_likely() {
        let results = vec![
            success("whois", OsintCategory::Whois, serde_json::json!({"age_days": 10})),
            success("ssl", OsintCategory::Whois, serde_json::json!({"age_days": 5})),
        ];
        let result = compute_osint_consensus(OsintCategory::Whois, &results);
        assert_eq!(result.status, OsintConsensusStatus::Likely);
    }

    #[test]
    fn one_of_three_agreeing_on_the_dominant_verdict_is_possible() {
        // No `safe` verdict present (so no malicious/safe conflict); one
        // malicious source among three, below both the confirm and
        // likely thresholds but above the 0.33 possible floor.
        let results = vec![
            success("intel1", OsintCategory::ThreatIntel, serde_json::json!({"abuse_confidence": 90})),
            success("intel2", OsintCategory::ThreatIntel, serde_json::json!({"abuse_confidence": 30})),
            success("intel3", OsintCategory::ThreatIntel, serde_json::json!({"abuse_confidence": 25})),
        ];
        let result = compute_osint_consensus(OsintCategory::ThreatIntel, &results);
        assert_eq!(result.status, OsintConsensusStatus::Possible);
        assert_eq!(result.dominant_verdict, OsintVerdict::Malicious);
        assert_eq!(result.agreement_count, 1);
        assert_eq!(result.total_sources, 3);
    }

    #[test]
    fn dns_results_always_classify_as_unknown() {
        let results = vec![success("dns", OsintCategory::Dns, serde_json::json!({"addresses": ["1.2.3.4"]}))];
        let result = compute_osint_consensus(OsintCategory::Dns, &results);
        assert_eq!(result.status, OsintConsensusStatus::Insufficient, "dns never contributes a classified verdict");
    }
}
