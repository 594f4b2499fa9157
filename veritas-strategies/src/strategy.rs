//! The site-type scoring strategy trait and its universal critical
//! triggers; grounded on
//! `examples/original_source/veritas/agents/judge/strategies/base.py`.

use veritas_core::scoring::{ScoringAdjustment, ScoringContext, SiteType};

/// Every dark-pattern name a concrete strategy matches against
/// `ScoringContext::dark_pattern_types` (see `strategies.rs`). Callers
/// building a `ScoringContext` from live finding data should filter a
/// finding's `pattern_type` against this list before including it, so
/// strategies only ever see names they actually know how to score.
pub const DARK_PATTERN_TAXONOMY: &[&str] = &[
    "fake_scarcity",
    "fake_countdown",
    "hidden_costs",
    "hidden_cancel",
    "roach_motel",
    "forced_registration",
    "expiring_offer",
    "clickbait",
    "paywall_trap",
    "impersonation",
    "fake_cert",
    "diploma_mill",
    "missing_credentials",
    "fake_provider",
    "fake_gov",
    "fake_seals",
    "loot_box",
    "fake_rewards",
    "pay_to_win",
    "account_theft",
    "btc_only",
    "crypto_only",
    "escrow_warning",
];

/// Runtime-switched per-site-type scoring logic. Each implementation
/// owns the weighting and severity policy appropriate to its site
/// type; the registry (`crate::registry`) dispatches to one of these
/// per audit based on the detected `SiteType`.
pub trait ScoringStrategy: Send + Sync {
    fn site_type(&self) -> SiteType;

    fn name(&self) -> &'static str;

    fn calculate_adjustments(&self, context: &ScoringContext) -> ScoringAdjustment;

    /// Triggers every strategy detects regardless of site type. Concrete strategies call
    /// this from within `calculate_adjustments` and fold the results
    /// into their own `custom_findings`.
    fn detect_critical_triggers(&self, context: &ScoringContext) -> Vec<String> {
        let mut triggers = Vec::new();

        if !context.has_valid_ssl
            && matches!(
                context.site_type,
                SiteType::Financial | SiteType::SaasSubscription | SiteType::Healthcare | SiteType::Government
            )
        {
            triggers.push(format!("Missing SSL on {:?} site", context.site_type));
        }

        if context.is_phishing_flagged {
            triggers.push("Phishing service detection".to_string());
        }

        if context.js_risk_score > 80.0 {
            triggers.push(format!("High JavaScript risk ({:.0})", context.js_risk_score));
        }

        triggers
    }
}
