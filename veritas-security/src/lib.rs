//! Tiered security module runner: auto-discovered modules, tier-ordered
//! parallel execution, weighted composite scoring, and CWE/CVSS
//! annotation.

pub mod cvss;
pub mod cwe;
pub mod module;
pub mod modules;
pub mod runner;

pub use cvss::{preset_for_severity, CvssPreset};
pub use cwe::{map_finding_to_cwe, CweEntry};
pub use module::{ModuleOutput, ModuleTier, SecurityModule};
pub use modules::default_modules;
pub use runner::{SecurityModuleRunner, SecurityRunResult};

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;
    use veritas_core::{AgentType, Finding, Severity};

    struct AlwaysFails;

    #[async_trait]
    impl SecurityModule for AlwaysFails {
        fn category_id(&self) -> &str {
            "broken_module"
        }
        fn tier(&self) -> ModuleTier {
            ModuleTier::Fast
        }
        fn weight(&self) -> f64 {
            0.5
        }
        async fn run(&self, _target_url: &str) -> anyhow::Result<ModuleOutput> {
            anyhow::bail!("boom")
        }
    }

    struct AlwaysHangs;

    #[async_trait]
    impl SecurityModule for AlwaysHangs {
        fn category_id(&self) -> &str {
            "slow_module"
        }
        fn tier(&self) -> ModuleTier {
            ModuleTier::Fast
        }
        fn weight(&self) -> f64 {
            0.5
        }
        async fn run(&self, _target_url: &str) -> anyhow::Result<ModuleOutput> {
            tokio::time::sleep(Duration::from_secs(600)).await;
            Ok(ModuleOutput::default())
        }
    }

    struct AlwaysFinds;

    #[async_trait]
    impl SecurityModule for AlwaysFinds {
        fn category_id(&self) -> &str {
            "finder_module"
        }
        fn tier(&self) -> ModuleTier {
            ModuleTier::Fast
        }
        fn weight(&self) -> f64 {
            1.0
        }
        async fn run(&self, target_url: &str) -> anyhow::Result<ModuleOutput> {
            Ok(ModuleOutput {
                findings: vec![Finding::new(
                    "f1",
                    "finder_module",
                    "test_pattern",
                    Severity::Low,
                    0.5,
                    "test finding",
                    target_url,
                    AgentType::Security,
                )],
                score: Some(0.5),
            })
        }
    }

    #[tokio::test]
    async fn a_failing_module_does_not_abort_the_others() {
        let runner = SecurityModuleRunner::new(vec![Box::new(AlwaysFails), Box::new(AlwaysFinds)]);
        let result = runner.run("https://example.com", None).await;
        assert_eq!(result.modules_failed, vec!["broken_module".to_string()]);
        assert_eq!(result.findings.len(), 1);
    }

    #[tokio::test]
    async fn module_scores_are_weighted_and_normalized() {
        let runner = SecurityModuleRunner::new(vec![Box::new(AlwaysFinds)]);
        let result = runner.run("https://example.com", None).await;
        assert_eq!(result.composite_score, 0.5);
    }

    #[tokio::test]
    async fn enabled_filter_restricts_which_modules_run() {
        let runner = SecurityModuleRunner::new(vec![Box::new(AlwaysFinds), Box::new(AlwaysFails)]);
        let result = runner.run("https://example.com", Some(&["finder_module".to_string()])).await;
        assert!(result.modules_failed.is_empty());
        assert_eq!(result.findings.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn timed_out_module_is_recorded_as_failed_not_aborting_others() {
        let runner = SecurityModuleRunner::new(vec![Box::new(AlwaysHangs), Box::new(AlwaysFinds)]);
        let result = runner.run("https://example.com", None).await;
        assert!(result.modules_failed.contains(&"slow_module".to_string()));
        assert_eq!(result.findings.len(), 1);
    }
}
