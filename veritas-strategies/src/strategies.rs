//! Concrete per-site-type strategies; each is grounded on
//! the matching file under
//! `examples/original_source/veritas/agents/judge/strategies/`.

use std::collections::HashMap;

use veritas_core::finding::Severity;
use veritas_core::scoring::{CustomFinding, ScoringAdjustment, ScoringContext, SignalName, SiteType};

use crate::strategy::ScoringStrategy;

fn weights(
    visual: f64,
    structural: f64,
    temporal: f64,
    graph: f64,
    meta: f64,
    security: f64,
) -> HashMap<SignalName, f64> {
    HashMap::from([
        (SignalName::Visual, visual),
        (SignalName::Structural, structural),
        (SignalName::Temporal, temporal),
        (SignalName::Graph, graph),
        (SignalName::Meta, meta),
        (SignalName::Security, security),
    ])
}

fn custom(name: &str, severity: Severity, auto_deduct_points: f64) -> CustomFinding {
    CustomFinding { name: name.to_string(), severity, auto_deduct_points }
}

fn extend_with_triggers(findings: &mut Vec<CustomFinding>, triggers: Vec<String>, severity: Severity, points: f64) {
    findings.extend(triggers.into_iter().map(|t| custom(&t, severity, points)));
}

pub struct EcommerceStrategy;

impl ScoringStrategy for EcommerceStrategy {
    fn site_type(&self) -> SiteType {
        SiteType::Ecommerce
    }

    fn name(&self) -> &'static str {
        "Ecommerce Scoring Strategy"
    }

    fn calculate_adjustments(&self, context: &ScoringContext) -> ScoringAdjustment {
        let mut custom_findings = Vec::new();
        if !context.has_valid_ssl {
            custom_findings.push(custom("missing_ssl", Severity::Critical, 30.0));
        }
        for pattern in ["fake_scarcity", "fake_countdown", "hidden_costs"] {
            if context.dark_pattern_types.iter().any(|p| p == pattern) {
                custom_findings.push(custom(pattern, Severity::High, 0.0));
            }
        }
        extend_with_triggers(&mut custom_findings, self.detect_critical_triggers(context), Severity::Critical, 50.0);

        ScoringAdjustment {
            weight_adjustments: weights(0.25, 0.15, 0.15, 0.20, 0.05, 0.20),
            severity_modifications: HashMap::from([
                ("fake_scarcity".to_string(), Severity::High),
                ("cross_domain_payment".to_string(), Severity::High),
            ]),
            custom_findings,
            narrative_template: "Ecommerce site evaluated for checkout and payment trust signals.".to_string(),
            explanation: "Visual (0.25) and security (0.20) weighted highest for storefront trust and payment safety; dark patterns around scarcity, countdowns, and hidden costs are flagged HIGH.".to_string(),
        }
    }
}

pub struct CompanyPortfolioStrategy;

impl ScoringStrategy for CompanyPortfolioStrategy {
    fn site_type(&self) -> SiteType {
        SiteType::CompanyPortfolio
    }

    fn name(&self) -> &'static str {
        "Company Portfolio Scoring Strategy"
    }

    fn calculate_adjustments(&self, context: &ScoringContext) -> ScoringAdjustment {
        let graph_score = context.signal_scores.get(&SignalName::Graph).copied().unwrap_or(50.0);
        let meta_score = context.signal_scores.get(&SignalName::Meta).copied().unwrap_or(50.0);

        let mut custom_findings = Vec::new();
        if graph_score < 50.0 {
            custom_findings.push(custom("mismatched_entity", Severity::High, 20.0));
        }
        if graph_score < 60.0 && meta_score < 60.0 {
            custom_findings.push(custom("unverifiable_claims", Severity::Medium, 15.0));
        }
        if !context.has_valid_ssl {
            custom_findings.push(custom("missing_ssl", Severity::Medium, 10.0));
        }
        extend_with_triggers(&mut custom_findings, self.detect_critical_triggers(context), Severity::Critical, 50.0);

        ScoringAdjustment {
            weight_adjustments: weights(0.15, 0.20, 0.05, 0.30, 0.20, 0.10),
            severity_modifications: HashMap::new(),
            custom_findings,
            narrative_template: "Company portfolio evaluated for entity verification.".to_string(),
            explanation: "Graph (0.30) weighted highest to check business registry and reputation signals; missing SSL is a lesser concern than on transactional sites.".to_string(),
        }
    }
}

pub struct FinancialStrategy;

impl ScoringStrategy for FinancialStrategy {
    fn site_type(&self) -> SiteType {
        SiteType::Financial
    }

    fn name(&self) -> &'static str {
        "Financial Scoring Strategy"
    }

    fn calculate_adjustments(&self, context: &ScoringContext) -> ScoringAdjustment {
        let form_risk = context.form_risk_score;
        let mut custom_findings = Vec::new();

        if !context.has_valid_ssl {
            custom_findings.push(custom("missing_ssl_financial", Severity::Critical, 50.0));
        }
        if form_risk > 50.0 {
            custom_findings.push(custom("form_validation_failed", Severity::High, 20.0));
        }
        for pattern in ["hidden_cancel", "roach_motel", "forced_registration"] {
            if context.dark_pattern_types.iter().any(|p| p == pattern) {
                custom_findings.push(custom(pattern, Severity::Critical, 40.0));
            }
        }
        if context.is_phishing_flagged {
            custom_findings.push(custom("phishing_financial", Severity::Critical, 50.0));
        }
        extend_with_triggers(&mut custom_findings, self.detect_critical_triggers(context), Severity::Critical, 50.0);

        ScoringAdjustment {
            weight_adjustments: weights(0.10, 0.25, 0.05, 0.20, 0.10, 0.30),
            severity_modifications: HashMap::from([
                ("hidden_cancel".to_string(), Severity::Critical),
                ("roach_motel".to_string(), Severity::Critical),
                ("forced_registration".to_string(), Severity::Critical),
                ("payment_flow_hijack".to_string(), Severity::Critical),
                ("auth_bypass".to_string(), Severity::Critical),
                ("credential_harvesting".to_string(), Severity::Critical),
                ("account_takeover".to_string(), Severity::Critical),
                ("transaction_manipulation".to_string(), Severity::Critical),
            ]),
            custom_findings,
            narrative_template: "Financial site evaluation enforces a zero-tolerance policy for security failures.".to_string(),
            explanation: "Security weighted highest (0.30); missing SSL and any dark pattern are automatically CRITICAL given the transaction-security stakes.".to_string(),
        }
    }
}

pub struct SaasSubscriptionStrategy;

impl ScoringStrategy for SaasSubscriptionStrategy {
    fn site_type(&self) -> SiteType {
        SiteType::SaasSubscription
    }

    fn name(&self) -> &'static str {
        "SaaS Subscription Scoring Strategy"
    }

    fn calculate_adjustments(&self, context: &ScoringContext) -> ScoringAdjustment {
        let mut custom_findings = Vec::new();
        for (pattern, severity, points) in [
            ("hidden_cancel", Severity::Critical, 45.0),
            ("roach_motel", Severity::Critical, 45.0),
            ("forced_registration", Severity::High, 25.0),
            ("expiring_offer", Severity::High, 20.0),
        ] {
            if context.dark_pattern_types.iter().any(|p| p == pattern) {
                custom_findings.push(custom(pattern, severity, points));
            }
        }
        if !context.has_valid_ssl {
            custom_findings.push(custom("missing_ssl", Severity::High, 20.0));
        }
        extend_with_triggers(&mut custom_findings, self.detect_critical_triggers(context), Severity::Critical, 50.0);

        ScoringAdjustment {
            weight_adjustments: weights(0.20, 0.15, 0.15, 0.20, 0.10, 0.20),
            severity_modifications: HashMap::from([("hidden_cancel".to_string(), Severity::Critical)]),
            custom_findings,
            narrative_template: "SaaS subscription site evaluated for cancellation-flow fairness and account security.".to_string(),
            explanation: "Balanced weighting across visual/graph/security (0.20 each); cancellation-barrier dark patterns are CRITICAL since subscription trapping is the dominant abuse vector.".to_string(),
        }
    }
}

pub struct NewsBlogStrategy;

impl ScoringStrategy for NewsBlogStrategy {
    fn site_type(&self) -> SiteType {
        SiteType::NewsBlog
    }

    fn name(&self) -> &'static str {
        "News/Blog Scoring Strategy"
    }

    fn calculate_adjustments(&self, context: &ScoringContext) -> ScoringAdjustment {
        let graph_score = context.signal_scores.get(&SignalName::Graph).copied().unwrap_or(50.0);
        let meta_score = context.signal_scores.get(&SignalName::Meta).copied().unwrap_or(50.0);

        let mut custom_findings = Vec::new();
        if context.dark_pattern_types.iter().any(|p| p == "clickbait") {
            custom_findings.push(custom("clickbait_headlines", Severity::Medium, 15.0));
        }
        if graph_score < 50.0 && meta_score < 60.0 {
            custom_findings.push(custom("fake_sources", Severity::High, 20.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "paywall_trap") {
            custom_findings.push(custom("paywalled_fake", Severity::Low, 5.0));
        }
        if !context.has_valid_ssl {
            custom_findings.push(custom("missing_ssl", Severity::Low, 5.0));
        }
        extend_with_triggers(&mut custom_findings, self.detect_critical_triggers(context), Severity::Critical, 50.0);

        ScoringAdjustment {
            weight_adjustments: weights(0.20, 0.15, 0.10, 0.20, 0.25, 0.10),
            severity_modifications: HashMap::new(),
            custom_findings,
            narrative_template: "News/blog site evaluated for source credibility and editorial integrity.".to_string(),
            explanation: "Metadata (0.25) weighted highest to check byline/publisher verification; SSL absence is a minor signal for informational content.".to_string(),
        }
    }
}

pub struct SocialMediaStrategy;

impl ScoringStrategy for SocialMediaStrategy {
    fn site_type(&self) -> SiteType {
        SiteType::SocialMedia
    }

    fn name(&self) -> &'static str {
        "Social Media Scoring Strategy"
    }

    fn calculate_adjustments(&self, context: &ScoringContext) -> ScoringAdjustment {
        let graph_score = context.signal_scores.get(&SignalName::Graph).copied().unwrap_or(50.0);
        let temporal_score = context.signal_scores.get(&SignalName::Temporal).copied().unwrap_or(50.0);

        let mut custom_findings = Vec::new();
        if graph_score < 50.0 {
            custom_findings.push(custom("fake_profiles", Severity::High, 25.0));
        }
        if context.is_phishing_flagged {
            custom_findings.push(custom("malicious_links", Severity::Critical, 40.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "impersonation") {
            custom_findings.push(custom("impersonation", Severity::Critical, 45.0));
        }
        if temporal_score < 40.0 && context.js_risk_score > 50.0 {
            custom_findings.push(custom("bot_activity", Severity::Medium, 15.0));
        }
        if !context.has_valid_ssl {
            custom_findings.push(custom("missing_ssl", Severity::Medium, 10.0));
        }
        extend_with_triggers(&mut custom_findings, self.detect_critical_triggers(context), Severity::Critical, 50.0);

        ScoringAdjustment {
            weight_adjustments: weights(0.20, 0.10, 0.05, 0.30, 0.20, 0.15),
            severity_modifications: HashMap::from([("impersonation".to_string(), Severity::Critical)]),
            custom_findings,
            narrative_template: "Social media profile evaluated for impersonation and network-graph consistency.".to_string(),
            explanation: "Graph (0.30) weighted highest for fake-profile and network detection; malicious links and impersonation are always CRITICAL.".to_string(),
        }
    }
}

pub struct EducationStrategy;

impl ScoringStrategy for EducationStrategy {
    fn site_type(&self) -> SiteType {
        SiteType::Education
    }

    fn name(&self) -> &'static str {
        "Education Scoring Strategy"
    }

    fn calculate_adjustments(&self, context: &ScoringContext) -> ScoringAdjustment {
        let graph_score = context.signal_scores.get(&SignalName::Graph).copied().unwrap_or(50.0);
        let meta_score = context.signal_scores.get(&SignalName::Meta).copied().unwrap_or(50.0);

        let mut custom_findings = Vec::new();
        if context.dark_pattern_types.iter().any(|p| p == "fake_cert") {
            custom_findings.push(custom("fake_certifications", Severity::High, 30.0));
        }
        if graph_score < 50.0 && meta_score < 60.0 {
            custom_findings.push(custom("unverifiable_credentials", Severity::Medium, 20.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "diploma_mill") {
            custom_findings.push(custom("diploma_mill", Severity::Critical, 45.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "impersonation") {
            custom_findings.push(custom("institution_impersonation", Severity::Critical, 45.0));
        }
        if !context.has_valid_ssl {
            custom_findings.push(custom("missing_ssl", Severity::High, 20.0));
        }
        extend_with_triggers(&mut custom_findings, self.detect_critical_triggers(context), Severity::Critical, 50.0);

        ScoringAdjustment {
            weight_adjustments: weights(0.15, 0.20, 0.05, 0.25, 0.25, 0.10),
            severity_modifications: HashMap::from([
                ("diploma_mill".to_string(), Severity::Critical),
                ("institution_impersonation".to_string(), Severity::Critical),
            ]),
            custom_findings,
            narrative_template: "Education site evaluated for accreditation and institutional authenticity.".to_string(),
            explanation: "Graph and metadata (0.25 each) weighted highest to verify accreditation and institutional identity; diploma-mill and impersonation patterns are CRITICAL.".to_string(),
        }
    }
}

pub struct HealthcareStrategy;

impl ScoringStrategy for HealthcareStrategy {
    fn site_type(&self) -> SiteType {
        SiteType::Healthcare
    }

    fn name(&self) -> &'static str {
        "Healthcare Scoring Strategy"
    }

    fn calculate_adjustments(&self, context: &ScoringContext) -> ScoringAdjustment {
        let graph_score = context.signal_scores.get(&SignalName::Graph).copied().unwrap_or(50.0);
        let meta_score = context.signal_scores.get(&SignalName::Meta).copied().unwrap_or(50.0);

        let mut custom_findings = Vec::new();
        if !context.has_valid_ssl {
            custom_findings.push(custom("missing_ssl_healthcare", Severity::Critical, 40.0));
        }
        if graph_score < 60.0 || meta_score < 60.0 {
            custom_findings.push(custom("unverified_medical_claims", Severity::High, 30.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "missing_credentials") {
            custom_findings.push(custom("missing_credentials", Severity::High, 35.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "fake_provider") {
            custom_findings.push(custom("fake_provider", Severity::Critical, 50.0));
        }
        extend_with_triggers(&mut custom_findings, self.detect_critical_triggers(context), Severity::Critical, 50.0);

        ScoringAdjustment {
            weight_adjustments: weights(0.10, 0.20, 0.05, 0.35, 0.20, 0.10),
            severity_modifications: HashMap::from([("fake_provider".to_string(), Severity::Critical)]),
            custom_findings,
            narrative_template: "Healthcare site evaluated for provider legitimacy and patient-data protection.".to_string(),
            explanation: "Graph (0.35) weighted highest to verify provider credentials and licensure; missing SSL is CRITICAL given patient data exposure.".to_string(),
        }
    }
}

pub struct GovernmentStrategy;

impl ScoringStrategy for GovernmentStrategy {
    fn site_type(&self) -> SiteType {
        SiteType::Government
    }

    fn name(&self) -> &'static str {
        "Government Scoring Strategy"
    }

    fn calculate_adjustments(&self, context: &ScoringContext) -> ScoringAdjustment {
        const GOV_TLDS: [&str; 5] = [".gov", ".gov.uk", ".gov.au", ".gov.ca", ".gov.in"];
        let url_lower = context.url.to_lowercase();
        let has_gov_domain = GOV_TLDS.iter().any(|tld| url_lower.contains(tld));
        let graph_score = context.signal_scores.get(&SignalName::Graph).copied().unwrap_or(50.0);

        let mut custom_findings = Vec::new();
        if !has_gov_domain {
            custom_findings.push(custom("missing_gov_suffix", Severity::High, 25.0));
        } else if graph_score < 50.0 {
            custom_findings.push(custom("spoofed_official_site", Severity::Critical, 50.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "fake_gov") {
            custom_findings.push(custom("fake_gov_domain", Severity::Critical, 50.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "impersonation") {
            custom_findings.push(custom("impersonation_agency", Severity::Critical, 50.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "fake_seals") {
            custom_findings.push(custom("fake_official_seals", Severity::Critical, 45.0));
        }
        if !context.has_valid_ssl {
            custom_findings.push(custom("missing_ssl", Severity::High, 15.0));
        }
        extend_with_triggers(&mut custom_findings, self.detect_critical_triggers(context), Severity::Critical, 50.0);

        ScoringAdjustment {
            weight_adjustments: weights(0.10, 0.15, 0.05, 0.40, 0.25, 0.05),
            severity_modifications: HashMap::from([
                ("fake_gov_domain".to_string(), Severity::Critical),
                ("impersonation_agency".to_string(), Severity::Critical),
            ]),
            custom_findings,
            narrative_template: "Government site evaluated for domain authenticity and agency impersonation.".to_string(),
            explanation: "Graph (0.40) weighted highest to check domain-registry authority; a missing official TLD or spoofed-looking official site is CRITICAL.".to_string(),
        }
    }
}

pub struct GamingStrategy;

impl ScoringStrategy for GamingStrategy {
    fn site_type(&self) -> SiteType {
        SiteType::Gaming
    }

    fn name(&self) -> &'static str {
        "Gaming Scoring Strategy"
    }

    fn calculate_adjustments(&self, context: &ScoringContext) -> ScoringAdjustment {
        let mut custom_findings = Vec::new();
        if context.dark_pattern_types.iter().any(|p| p == "loot_box") {
            custom_findings.push(custom("loot_box_manipulation", Severity::High, 25.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "fake_rewards") {
            custom_findings.push(custom("fake_rewards", Severity::Medium, 15.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "pay_to_win") {
            custom_findings.push(custom("pay_to_win", Severity::Medium, 15.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "account_theft") {
            custom_findings.push(custom("account_theft", Severity::Critical, 40.0));
        }
        if context.js_risk_score > 70.0 {
            custom_findings.push(custom("cheating_detected", Severity::Medium, 15.0));
        }
        if !context.has_valid_ssl {
            custom_findings.push(custom("missing_ssl", Severity::Medium, 15.0));
        }
        extend_with_triggers(&mut custom_findings, self.detect_critical_triggers(context), Severity::Critical, 50.0);

        ScoringAdjustment {
            weight_adjustments: weights(0.20, 0.15, 0.10, 0.15, 0.20, 0.20),
            severity_modifications: HashMap::from([("account_theft".to_string(), Severity::Critical)]),
            custom_findings,
            narrative_template: "Gaming site evaluated for monetization dark patterns and account security.".to_string(),
            explanation: "Evenly weighted across visual/meta/security (0.20 each); loot-box manipulation and account-theft indicators drive the largest deductions.".to_string(),
        }
    }
}

pub struct DarknetSuspiciousStrategy;

impl DarknetSuspiciousStrategy {
    fn upgrade(&self, severity: Severity) -> Severity {
        severity.upgrade_one_tier()
    }
}

impl ScoringStrategy for DarknetSuspiciousStrategy {
    fn site_type(&self) -> SiteType {
        SiteType::DarknetSuspicious
    }

    fn name(&self) -> &'static str {
        "Darknet Suspicious Scoring Strategy"
    }

    /// "Paranoia mode": every severity this strategy
    /// assigns is upgraded one tier, and onion-link detection alone
    /// forces CRITICAL regardless of any other signal.
    fn calculate_adjustments(&self, context: &ScoringContext) -> ScoringAdjustment {
        let mut custom_findings = Vec::new();

        if context.has_onion_link || context.url.to_lowercase().contains(".onion") {
            custom_findings.push(custom("onion_links", Severity::Critical, 50.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "btc_only" || p == "crypto_only") {
            custom_findings.push(custom("btc_only_payment", self.upgrade(Severity::High), 45.0));
        }
        if context.dark_pattern_types.iter().any(|p| p == "escrow_warning") {
            custom_findings.push(custom("escrow_warnings", self.upgrade(Severity::High), 40.0));
        }
        if !context.has_valid_ssl {
            custom_findings.push(custom("missing_ssl", self.upgrade(Severity::Medium), 25.0));
        }
        for pattern in &context.dark_pattern_types {
            custom_findings.push(custom(&format!("darknet_pattern_{pattern}"), self.upgrade(Severity::High), 30.0));
        }
        if context.is_phishing_flagged {
            custom_findings.push(custom("phishing_darknet", Severity::Critical, 50.0));
        }
        if context.js_risk_score > 60.0 {
            custom_findings.push(custom("suspicious_js", self.upgrade(Severity::Medium), 25.0));
        }
        extend_with_triggers(
            &mut custom_findings,
            self.detect_critical_triggers(context),
            self.upgrade(Severity::High),
            50.0,
        );

        let severity_modifications: HashMap<String, Severity> = HashMap::from([
            ("onion_links".to_string(), Severity::Critical),
            ("btc_only_payment".to_string(), self.upgrade(Severity::High)),
            ("escrow_warnings".to_string(), self.upgrade(Severity::High)),
            ("marketplace_trust".to_string(), Severity::High),
            ("illegal_content".to_string(), Severity::Critical),
            ("malware_distribution".to_string(), Severity::Critical),
            ("illegal_services".to_string(), Severity::Critical),
        ]);

        let warning_count = custom_findings.iter().filter(|f| f.severity == Severity::Critical).count();

        ScoringAdjustment {
            weight_adjustments: weights(0.15, 0.10, 0.05, 0.30, 0.10, 0.30),
            severity_modifications,
            custom_findings,
            narrative_template: format!(
                "PARANOIA MODE: darknet/suspicious site detected. {warning_count} critical red flags detected."
            ),
            explanation: "Paranoia mode: every finding severity is upgraded one tier (MEDIUM->HIGH, HIGH->CRITICAL); onion links alone force CRITICAL. Security and graph (0.30 each) weighted highest for maximum threat detection.".to_string(),
        }
    }
}
