//! Tiered parallel execution and weighted composite scoring.

use std::collections::HashMap;

use tracing::warn;
use veritas_core::Finding;

use crate::module::{ModuleOutput, ModuleTier, SecurityModule};

#[derive(Debug, Clone, Default)]
pub struct SecurityRunResult {
    pub findings: Vec<Finding>,
    pub module_scores: HashMap<String, f64>,
    pub modules_failed: Vec<String>,
    pub composite_score: f64,
}

pub struct SecurityModuleRunner {
    modules: Vec<Box<dyn SecurityModule>>,
}

impl SecurityModuleRunner {
    pub fn new(modules: Vec<Box<dyn SecurityModule>>) -> Self {
        Self { modules }
    }

    fn tier_modules(&self, tier: ModuleTier) -> Vec<&Box<dyn SecurityModule>> {
        self.modules.iter().filter(|m| m.tier() == tier).collect()
    }

    /// Run only the modules named in `enabled`, or every registered
    /// module when `enabled` is `None`.
    pub async fn run(&self, target_url: &str, enabled: Option<&[String]>) -> SecurityRunResult {
        let mut result = SecurityRunResult::default();
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        for tier in [ModuleTier::Fast, ModuleTier::Medium, ModuleTier::Deep] {
            let modules = self.tier_modules(tier);
            let mut handles = Vec::new();

            for module in modules {
                if let Some(enabled) = enabled {
                    if !enabled.iter().any(|name| name == module.category_id()) {
                        continue;
                    }
                }
                let category_id = module.category_id().to_string();
                let weight = module.weight();
                let deadline = tier.default_timeout();
                let future = module.run(target_url);
                handles.push(async move {
                    let outcome = tokio::time::timeout(deadline, future).await;
                    (category_id, weight, outcome)
                });
            }

            for (category_id, weight, outcome) in futures::future::join_all(handles).await {
                match outcome {
                    Ok(Ok(ModuleOutput { findings, score })) => {
                        result.findings.extend(findings);
                        if let Some(score) = score {
                            result.module_scores.insert(category_id.clone(), score);
                            weighted_sum += weight * score;
                            weight_total += weight;
                        }
                    }
                    Ok(Err(err)) => {
                        warn!(module = category_id, %err, "security module failed");
                        result.module_scores.insert(category_id.clone(), 0.0);
                        result.modules_failed.push(category_id);
                    }
                    Err(_) => {
                        warn!(module = category_id, "security module timed out");
                        result.module_scores.insert(category_id.clone(), 0.0);
                        result.modules_failed.push(category_id);
                    }
                }
            }
        }

        result.composite_score = if weight_total > 0.0 { weighted_sum / weight_total } else { 0.0 };
        result
    }
}
