//! Weighted signal aggregation into a final trust verdict. Signals are
//! combined through a weight table and bucketed into risk tiers once
//! enough distinct signals have reported.

use std::collections::HashMap;

use veritas_core::scoring::{CustomFinding, RiskLevel, ScoringAdjustment, SignalName, TrustScoreResult};

/// Minimum number of distinct signals required before a risk level can
/// be anything other than `unknown`.
const MIN_SIGNALS_FOR_VERDICT: usize = 2;

pub struct TrustScorer;

impl TrustScorer {
    /// `signal_scores` are raw per-signal scores in 0-100. `adjustment`
    /// supplies the site-type strategy's weights and overrides.
    pub fn score(signal_scores: &HashMap<SignalName, f64>, adjustment: &ScoringAdjustment) -> TrustScoreResult {
        let normalized: HashMap<SignalName, f64> =
            signal_scores.iter().map(|(signal, score)| (*signal, score.clamp(0.0, 100.0))).collect();

        let mut confidence_breakdown = HashMap::new();
        let mut weighted_total = 0.0;
        let mut weight_total = 0.0;

        for (signal, score) in &normalized {
            let weight = adjustment.weight_adjustments.get(signal).copied().unwrap_or(0.0);
            let contribution = score * weight;
            confidence_breakdown.insert(*signal, contribution);
            weighted_total += contribution;
            weight_total += weight;
        }

        let base_score = if weight_total > 0.0 { weighted_total / weight_total } else { 0.0 };

        let mut applied_overrides = Vec::new();
        let mut score_after_overrides = base_score;
        for finding in &adjustment.custom_findings {
            score_after_overrides -= finding.auto_deduct_points;
            applied_overrides.push(finding.clone());
        }

        let final_score = score_after_overrides.clamp(0.0, 100.0).round() as u8;

        let risk_level =
            if normalized.len() < MIN_SIGNALS_FOR_VERDICT { RiskLevel::Unknown } else { risk_level_for(final_score) };

        TrustScoreResult {
            final_score,
            risk_level,
            signal_scores: normalized,
            applied_overrides,
            confidence_breakdown,
        }
    }
}

/// Fixed thresholds: >=80 trustworthy, >=60 suspicious, else
/// untrustworthy.
fn risk_level_for(final_score: u8) -> RiskLevel {
    if final_score >= 80 {
        RiskLevel::Trustworthy
    } else if final_score >= 60 {
        RiskLevel::Suspicious
    } else {
        RiskLevel::Untrustworthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjustment(weights: &[(SignalName, f64)]) -> ScoringAdjustment {
        ScoringAdjustment { weight_adjustments: weights.iter().cloned().collect(), ..Default::default() }
    }

    #[test]
    fn weighted_average_of_two_signals() {
        let scores = HashMap::from([(SignalName::Visual, 90.0), (SignalName::Security, 70.0)]);
        let adj = adjustment(&[(SignalName::Visual, 0.5), (SignalName::Security, 0.5)]);
        let result = TrustScorer::score(&scores, &adj);
        assert_eq!(result.final_score, 80);
        assert_eq!(result.risk_level, RiskLevel::Trustworthy);
    }

    #[test]
    fn too_few_signals_is_unknown() {
        let scores = HashMap::from([(SignalName::Visual, 90.0)]);
        let adj = adjustment(&[(SignalName::Visual, 1.0)]);
        let result = TrustScorer::score(&scores, &adj);
        assert_eq!(result.risk_level, RiskLevel::Unknown);
    }

    #[test]
    fn override_deductions_are_additive_and_clamped() {
        let scores = HashMap::from([(SignalName::Visual, 100.0), (SignalName::Security, 100.0)]);
        let mut adj = adjustment(&[(SignalName::Visual, 0.5), (SignalName::Security, 0.5)]);
        adj.custom_findings = vec![
            CustomFinding { name: "missing_ssl".to_string(), severity: veritas_core::Severity::Critical, auto_deduct_points: 60.0 },
            CustomFinding { name: "phishing".to_string(), severity: veritas_core::Severity::Critical, auto_deduct_points: 60.0 },
        ];
        let result = TrustScorer::score(&scores, &adj);
        assert_eq!(result.final_score, 0);
    }

    #[test]
    fn a_small_override_only_nudges_the_score_not_the_tier() {
        let scores = HashMap::from([(SignalName::Visual, 100.0), (SignalName::Security, 100.0)]);
        let mut adj = adjustment(&[(SignalName::Visual, 0.5), (SignalName::Security, 0.5)]);
        adj.custom_findings = vec![CustomFinding {
            name: "missing_credentials".to_string(),
            severity: veritas_core::Severity::High,
            auto_deduct_points: 10.0,
        }];
        let result = TrustScorer::score(&scores, &adj);
        assert_eq!(result.final_score, 90);
        assert_eq!(result.risk_level, RiskLevel::Trustworthy);
    }

    #[test]
    fn suspicious_tier_between_sixty_and_eighty() {
        let scores = HashMap::from([(SignalName::Visual, 65.0), (SignalName::Security, 65.0)]);
        let adj = adjustment(&[(SignalName::Visual, 0.5), (SignalName::Security, 0.5)]);
        let result = TrustScorer::score(&scores, &adj);
        assert_eq!(result.risk_level, RiskLevel::Suspicious);
    }
}
