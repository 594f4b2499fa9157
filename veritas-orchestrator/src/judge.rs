//! Judge node: site-type detection, consensus routing, and the final
//! trust verdict.

use std::collections::HashMap;

use veritas_consensus::{compute_osint_consensus, ConsensusEngine, OsintConsensusStatus};
use veritas_core::scoring::{ScoringContext, SignalName, SiteType};
use veritas_core::state::JudgeDecision;
use veritas_core::{AuditState, OsintCategory, RiskLevel};
use veritas_scoring::TrustScorer;
use veritas_strategies::{strategy_for, DARK_PATTERN_TAXONOMY};

/// Minimum distinct agent types required to confirm a finding.
const MIN_SOURCES_FOR_CONFIRM: usize = 2;

pub struct JudgeNode;

impl JudgeNode {
    /// Detect the site type from the URL's static shape alone. The
    /// detection heuristic is this crate's own choice; see DESIGN.md
    /// for the reasoning. Returns the detected type and a confidence
    /// in [0,1].
    pub fn detect_site_type(url: &str) -> (SiteType, f64) {
        let lower = url.to_ascii_lowercase();
        let hits: &[(&[&str], SiteType, f64)] = &[
            (&[".onion"], SiteType::DarknetSuspicious, 0.95),
            (&["gov."], SiteType::Government, 0.8),
            (&["bank", "pay", "invest", "capital", "credit"], SiteType::Financial, 0.7),
            (&["shop", "store", "cart", "checkout"], SiteType::Ecommerce, 0.7),
            (&["health", "clinic", "hospital", "medical"], SiteType::Healthcare, 0.7),
            (&["edu.", "university", "school", "academy"], SiteType::Education, 0.7),
            (&["app.", "saas", "subscription", "pricing"], SiteType::SaasSubscription, 0.6),
            (&["news", "blog", "magazine"], SiteType::NewsBlog, 0.6),
            (&["social", "community", "forum"], SiteType::SocialMedia, 0.6),
            (&["game", "play", "arcade"], SiteType::Gaming, 0.6),
        ];

        for (needles, site_type, confidence) in hits {
            if needles.iter().any(|n| lower.contains(n)) {
                return (site_type.clone(), *confidence);
            }
        }
        (SiteType::CompanyPortfolio, 0.3)
    }

    /// Run the full judge pass: consensus aggregation, signal scoring,
    /// site-type strategy adjustment, trust score. Returns the detected
    /// site type, its confidence, and the resulting `JudgeDecision`.
    pub fn run(state: &AuditState) -> (SiteType, f64, JudgeDecision) {
        let (site_type, site_type_confidence) = Self::detect_site_type(&state.url);

        let consensus = ConsensusEngine::new(MIN_SOURCES_FOR_CONFIRM);
        for finding in state.vision_result.iter().flat_map(|v| v.findings.iter()) {
            consensus.add_finding(&finding.pattern_type, finding.source_agent, &finding.id, finding.severity, finding.confidence);
        }
        for result in state.security_results.values() {
            for finding in &result.findings {
                consensus.add_finding(
                    &finding.pattern_type,
                    finding.source_agent,
                    &finding.id,
                    finding.severity,
                    finding.confidence,
                );
            }
        }
        let conflicted = consensus.get_conflicted_findings();
        let confirmed = consensus.get_confirmed_findings();

        let signal_scores = build_signal_scores(state);
        let has_valid_ssl = ssl_is_valid(state);
        let domain_age_days = whois_domain_age_days(state);
        let is_phishing_flagged =
            state.security_results.values().flat_map(|r| r.findings.iter()).any(|f| f.pattern_type == "phishing");
        let js_risk_score = state.security_results.get("js_analysis").map(|r| (1.0 - r.score) * 100.0).unwrap_or(0.0);
        let form_risk_score = state.security_results.get("form_validation").map(|r| (1.0 - r.score) * 100.0).unwrap_or(0.0);
        let has_onion_link = state.url.contains(".onion");
        let dark_pattern_types = collect_dark_pattern_types(state);

        let context = ScoringContext {
            url: state.url.clone(),
            site_type: site_type.clone(),
            signal_scores: signal_scores.clone(),
            has_valid_ssl,
            domain_age_days,
            dark_pattern_types,
            js_risk_score,
            form_risk_score,
            is_phishing_flagged,
            has_onion_link,
        };

        let adjustment = strategy_for(site_type.clone()).calculate_adjustments(&context);
        let trust_score_result = TrustScorer::score(&signal_scores, &adjustment);

        let narrative = build_narrative(&trust_score_result.risk_level, confirmed.len(), conflicted.len(), &site_type);
        let mut recommendations: Vec<String> =
            adjustment.custom_findings.iter().map(|f| format!("Address {}: {}", f.name, f.severity_label())).collect();
        if !conflicted.is_empty() {
            recommendations.push("Manually review conflicting findings before trusting the verdict.".to_string());
        }
        if recommendations.is_empty() {
            recommendations.push("No further action required.".to_string());
        }

        (site_type, site_type_confidence, JudgeDecision { trust_score_result, narrative, recommendations })
    }
}

trait SeverityLabel {
    fn severity_label(&self) -> String;
}
impl SeverityLabel for veritas_core::CustomFinding {
    fn severity_label(&self) -> String {
        format!("{:?}", self.severity)
    }
}

/// Collect the dark-pattern names a strategy can act on from whatever
/// findings Vision and Security actually produced this run, narrowed
/// to the taxonomy the strategies match against (`pattern_type`s
/// outside that list carry no dark-pattern-specific scoring and are
/// left to the generic signal scores instead).
fn collect_dark_pattern_types(state: &AuditState) -> Vec<String> {
    let mut patterns: Vec<String> = state
        .vision_result
        .iter()
        .flat_map(|v| v.findings.iter())
        .chain(state.security_results.values().flat_map(|r| r.findings.iter()))
        .filter_map(|finding| {
            DARK_PATTERN_TAXONOMY
                .iter()
                .find(|known| finding.pattern_type == **known)
                .map(|known| known.to_string())
        })
        .collect();
    patterns.sort();
    patterns.dedup();
    patterns
}

fn build_signal_scores(state: &AuditState) -> HashMap<SignalName, f64> {
    let mut scores = HashMap::new();

    if let Some(vision) = &state.vision_result {
        let penalty: f64 = vision.findings.iter().map(|f| f.severity.weight() * 40.0).sum();
        scores.insert(SignalName::Visual, (100.0 - penalty).clamp(0.0, 100.0));
    }

    if !state.scout_results.is_empty() {
        let mut structural = 100.0;
        for scout in &state.scout_results {
            if scout.dom_metadata.admin_panel_detected {
                structural -= 20.0;
            }
            if !scout.dom_metadata.idor_patterns.is_empty() {
                structural -= 15.0;
            }
        }
        scores.insert(SignalName::Structural, structural.clamp(0.0, 100.0));
    }

    if let Some(age) = whois_domain_age_days(state) {
        let temporal = if age < 30 { 30.0 } else if age < 180 { 60.0 } else { 95.0 };
        scores.insert(SignalName::Temporal, temporal);
    }

    let graph_categories =
        [OsintCategory::ThreatIntel, OsintCategory::Reputation, OsintCategory::Dns, OsintCategory::Whois, OsintCategory::Ssl];
    let graph_results: Vec<_> =
        state.osint_results.values().filter(|r| graph_categories.contains(&r.category)).cloned().collect();
    if !graph_results.is_empty() {
        let mut by_category: HashMap<OsintCategory, Vec<veritas_core::OsintResult>> = HashMap::new();
        for result in graph_results {
            by_category.entry(result.category).or_default().push(result);
        }
        let mut graph_score = 100.0;
        for (category, results) in by_category {
            let consensus = compute_osint_consensus(category, &results);
            graph_score = graph_score.min(match consensus.status {
                OsintConsensusStatus::Confirmed => 10.0,
                OsintConsensusStatus::Conflicted => 50.0,
                OsintConsensusStatus::Likely => 30.0,
                OsintConsensusStatus::Possible => 70.0,
                OsintConsensusStatus::Insufficient => 80.0,
            });
        }
        scores.insert(SignalName::Graph, graph_score);
    }

    scores.insert(SignalName::Meta, if ssl_is_valid(state) { 90.0 } else { 30.0 });

    if !state.security_results.is_empty() {
        let total: f64 = state.security_results.values().map(|r| r.score).sum();
        let security = (total / state.security_results.len() as f64) * 100.0;
        scores.insert(SignalName::Security, security.clamp(0.0, 100.0));
    }

    scores
}

fn ssl_is_valid(state: &AuditState) -> bool {
    if let Some(ssl) = state.osint_results.get("ssl") {
        if let Some(valid) = ssl.data.get("is_valid").and_then(|v| v.as_bool()) {
            return valid;
        }
    }
    state.url.starts_with("https://")
}

fn whois_domain_age_days(state: &AuditState) -> Option<u32> {
    state.osint_results.get("whois")?.data.get("age_days")?.as_u64().map(|n| n as u32)
}

fn build_narrative(risk_level: &RiskLevel, confirmed: usize, conflicted: usize, site_type: &SiteType) -> String {
    let tier = match risk_level {
        RiskLevel::Trustworthy => "appears trustworthy",
        RiskLevel::Suspicious => "shows suspicious indicators",
        RiskLevel::Untrustworthy => "shows strong indicators of untrustworthiness",
        RiskLevel::Unknown => "could not be confidently assessed",
    };
    format!(
        "Detected as a {site_type:?} site, the target {tier}. {confirmed} finding(s) reached multi-source \
         consensus and {conflicted} finding(s) carried conflicting agent verdicts."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_core::{AuditTier, VerdictMode};

    #[test]
    fn onion_url_is_darknet_suspicious() {
        let (site_type, confidence) = JudgeNode::detect_site_type("http://example.onion");
        assert_eq!(site_type, SiteType::DarknetSuspicious);
        assert!(confidence > 0.9);
    }

    #[test]
    fn unmatched_url_falls_back_to_company_portfolio() {
        let (site_type, _) = JudgeNode::detect_site_type("https://example.com");
        assert_eq!(site_type, SiteType::CompanyPortfolio);
    }

    #[test]
    fn run_produces_a_judge_decision_with_a_final_score() {
        let state = AuditState::new("https://example.com", AuditTier::QuickScan, VerdictMode::Simple);
        let (_site_type, _confidence, decision) = JudgeNode::run(&state);
        assert!(decision.trust_score_result.final_score <= 100);
    }

    #[test]
    fn a_vision_findings_pattern_type_in_the_taxonomy_reaches_the_strategy() {
        use veritas_core::state::VisionResult;
        use veritas_core::{AgentType, Finding, Severity};

        let mut state = AuditState::new("https://example-game.com", AuditTier::QuickScan, VerdictMode::Simple);
        state.vision_result = Some(VisionResult {
            findings: vec![Finding::new(
                "f1",
                "dark_pattern",
                "loot_box",
                Severity::High,
                0.9,
                "loot box mechanics detected",
                "screenshot shows paid loot crates",
                AgentType::Vision,
            )],
        });

        let dark_patterns = collect_dark_pattern_types(&state);
        assert_eq!(dark_patterns, vec!["loot_box".to_string()]);

        let (_site_type, _confidence, decision) = JudgeNode::run(&state);
        assert!(decision.recommendations.iter().any(|r| r.contains("loot_box_manipulation")));
    }

    #[test]
    fn a_pattern_type_outside_the_taxonomy_is_dropped() {
        use veritas_core::state::VisionResult;
        use veritas_core::{AgentType, Finding, Severity};

        let mut state = AuditState::new("https://example.com", AuditTier::QuickScan, VerdictMode::Simple);
        state.vision_result = Some(VisionResult {
            findings: vec![Finding::new(
                "f1",
                "misc",
                "unrelated_observation",
                Severity::Low,
                0.5,
                "nothing strategy-relevant",
                "n/a",
                AgentType::Vision,
            )],
        });

        assert!(collect_dark_pattern_types(&state).is_empty());
    }
}
