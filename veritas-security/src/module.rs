//! `SecurityModule` trait and tier self-description.

use async_trait::async_trait;
use std::time::Duration;
use veritas_core::Finding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleTier {
    Fast,
    Medium,
    Deep,
}

impl ModuleTier {
    /// Default per-module deadline for this tier.
    pub fn default_timeout(self) -> Duration {
        match self {
            ModuleTier::Fast => Duration::from_secs(5),
            ModuleTier::Medium => Duration::from_secs(10),
            ModuleTier::Deep => Duration::from_secs(18),
        }
    }
}

/// One security check's output for one audit target.
#[derive(Debug, Clone, Default)]
pub struct ModuleOutput {
    pub findings: Vec<Finding>,
    pub score: Option<f64>,
}

#[async_trait]
pub trait SecurityModule: Send + Sync {
    fn category_id(&self) -> &str;
    fn tier(&self) -> ModuleTier;
    fn weight(&self) -> f64;

    async fn run(&self, target_url: &str) -> anyhow::Result<ModuleOutput>;
}
