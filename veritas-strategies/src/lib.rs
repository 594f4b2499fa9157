//! Site-type scoring strategies: a registry mapping detected
//! `SiteType` to domain-specific weighting and severity policy.

pub mod registry;
pub mod strategies;
pub mod strategy;

pub use registry::strategy_for;
pub use strategy::{ScoringStrategy, DARK_PATTERN_TAXONOMY};

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    use veritas_core::scoring::{ScoringContext, SiteType};

    pub fn sample_context(site_type: SiteType) -> ScoringContext {
        ScoringContext {
            url: "https://example.com".to_string(),
            site_type,
            signal_scores: HashMap::new(),
            has_valid_ssl: true,
            domain_age_days: Some(365),
            dark_pattern_types: Vec::new(),
            js_risk_score: 10.0,
            form_risk_score: 10.0,
            is_phishing_flagged: false,
            has_onion_link: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use veritas_core::scoring::SiteType;

    use crate::registry::strategy_for;
    use crate::test_support::sample_context;

    #[test]
    fn ecommerce_missing_ssl_is_critical() {
        let mut context = sample_context(SiteType::Ecommerce);
        context.has_valid_ssl = false;
        let strategy = strategy_for(SiteType::Ecommerce);
        let adjustment = strategy.calculate_adjustments(&context);
        assert!(adjustment.custom_findings.iter().any(|f| f.name == "missing_ssl"));
    }

    #[test]
    fn darknet_onion_link_forces_critical() {
        let mut context = sample_context(SiteType::DarknetSuspicious);
        context.has_onion_link = true;
        let strategy = strategy_for(SiteType::DarknetSuspicious);
        let adjustment = strategy.calculate_adjustments(&context);
        let onion = adjustment.custom_findings.iter().find(|f| f.name == "onion_links").unwrap();
        assert_eq!(onion.severity, veritas_core::Severity::Critical);
    }

    #[test]
    fn darknet_upgrades_medium_findings_to_high() {
        let mut context = sample_context(SiteType::DarknetSuspicious);
        context.has_valid_ssl = false;
        let strategy = strategy_for(SiteType::DarknetSuspicious);
        let adjustment = strategy.calculate_adjustments(&context);
        let missing_ssl = adjustment.custom_findings.iter().find(|f| f.name == "missing_ssl").unwrap();
        assert_eq!(missing_ssl.severity, veritas_core::Severity::High);
    }

    #[test]
    fn financial_missing_ssl_deducts_fifty_points() {
        let mut context = sample_context(SiteType::Financial);
        context.has_valid_ssl = false;
        let strategy = strategy_for(SiteType::Financial);
        let adjustment = strategy.calculate_adjustments(&context);
        let finding = adjustment.custom_findings.iter().find(|f| f.name == "missing_ssl_financial").unwrap();
        assert_eq!(finding.auto_deduct_points, 50.0);
        assert_eq!(finding.severity, veritas_core::Severity::Critical);
    }

    #[test]
    fn universal_phishing_trigger_applies_to_every_strategy() {
        let mut context = sample_context(SiteType::Gaming);
        context.is_phishing_flagged = true;
        let strategy = strategy_for(SiteType::Gaming);
        let adjustment = strategy.calculate_adjustments(&context);
        assert!(adjustment.custom_findings.iter().any(|f| f.name.contains("Phishing")));
    }
}
