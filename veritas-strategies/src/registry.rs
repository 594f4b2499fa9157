//! Maps a detected `SiteType` to its `ScoringStrategy`;
//! grounded on
//! `examples/original_source/veritas/agents/judge/strategies/__init__.py`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use veritas_core::scoring::SiteType;

use crate::strategies::{
    CompanyPortfolioStrategy, DarknetSuspiciousStrategy, EcommerceStrategy, EducationStrategy, FinancialStrategy,
    GamingStrategy, GovernmentStrategy, HealthcareStrategy, NewsBlogStrategy, SaasSubscriptionStrategy,
    SocialMediaStrategy,
};
use crate::strategy::ScoringStrategy;

static REGISTRY: Lazy<HashMap<SiteType, Box<dyn ScoringStrategy>>> = Lazy::new(|| {
    let strategies: Vec<Box<dyn ScoringStrategy>> = vec![
        Box::new(EcommerceStrategy),
        Box::new(CompanyPortfolioStrategy),
        Box::new(FinancialStrategy),
        Box::new(SaasSubscriptionStrategy),
        Box::new(NewsBlogStrategy),
        Box::new(SocialMediaStrategy),
        Box::new(EducationStrategy),
        Box::new(HealthcareStrategy),
        Box::new(GovernmentStrategy),
        Box::new(GamingStrategy),
        Box::new(DarknetSuspiciousStrategy),
    ];
    strategies.into_iter().map(|s| (s.site_type(), s)).collect()
});

/// Look up the strategy registered for `site_type`. Every `SiteType`
/// variant has one; this only returns `None` if the registry was
/// constructed incorrectly.
pub fn strategy_for(site_type: SiteType) -> &'static dyn ScoringStrategy {
    REGISTRY
        .get(&site_type)
        .map(|b| b.as_ref())
        .unwrap_or_else(|| panic!("no scoring strategy registered for {site_type:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_site_type_has_a_registered_strategy() {
        let all = [
            SiteType::Ecommerce,
            SiteType::CompanyPortfolio,
            SiteType::Financial,
            SiteType::SaasSubscription,
            SiteType::NewsBlog,
            SiteType::SocialMedia,
            SiteType::Education,
            SiteType::Healthcare,
            SiteType::Government,
            SiteType::Gaming,
            SiteType::DarknetSuspicious,
        ];
        for site_type in all {
            let strategy = strategy_for(site_type.clone());
            assert_eq!(strategy.site_type(), site_type);
        }
    }

    #[test]
    fn weight_adjustments_sum_to_one_for_every_strategy() {
        let all = [
            SiteType::Ecommerce,
            SiteType::CompanyPortfolio,
            SiteType::Financial,
            SiteType::SaasSubscription,
            SiteType::NewsBlog,
            SiteType::SocialMedia,
            SiteType::Education,
            SiteType::Healthcare,
            SiteType::Government,
            SiteType::Gaming,
            SiteType::DarknetSuspicious,
        ];
        for site_type in all {
            let strategy = strategy_for(site_type.clone());
            let context = crate::test_support::sample_context(site_type);
            let adjustment = strategy.calculate_adjustments(&context);
            let sum: f64 = adjustment.weight_adjustments.values().sum();
            assert!((sum - 1.0).abs() < 1e-6, "{:?} weights sum to {sum}", strategy.name());
        }
    }
}
