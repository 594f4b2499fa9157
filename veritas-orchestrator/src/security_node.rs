//! Security node: wraps `veritas_security::SecurityModuleRunner` and
//! reshapes its flat `SecurityRunResult` into the per-module
//! `HashMap<String, SecurityResult>` shape `AuditState` carries.

use std::collections::HashMap;

use veritas_core::state::SecurityResult;
use veritas_security::{default_modules, SecurityModuleRunner};

pub struct SecurityNode {
    runner: SecurityModuleRunner,
}

impl Default for SecurityNode {
    fn default() -> Self {
        Self::new()
    }
}

impl SecurityNode {
    pub fn new() -> Self {
        Self { runner: SecurityModuleRunner::new(default_modules()) }
    }

    /// Run every enabled module against `target_url`, returning results
    /// keyed by module name plus the weighted composite score.
    pub async fn run(&self, target_url: &str, enabled: Option<&[String]>) -> (HashMap<String, SecurityResult>, f64) {
        let run = self.runner.run(target_url, enabled).await;

        let mut by_module: HashMap<String, SecurityResult> = HashMap::new();
        for (module_name, score) in &run.module_scores {
            by_module.insert(
                module_name.clone(),
                SecurityResult {
                    module_name: module_name.clone(),
                    findings: Vec::new(),
                    score: *score,
                    errors: Vec::new(),
                    elapsed_ms: 0,
                },
            );
        }
        for failed in &run.modules_failed {
            by_module.entry(failed.clone()).or_insert_with(|| SecurityResult {
                module_name: failed.clone(),
                findings: Vec::new(),
                score: 0.0,
                errors: Vec::new(),
                elapsed_ms: 0,
            });
            if let Some(entry) = by_module.get_mut(failed) {
                entry.errors.push("module failed or timed out".to_string());
            }
        }
        for finding in run.findings {
            by_module
                .entry(finding.category_id.clone())
                .or_insert_with(|| SecurityResult {
                    module_name: finding.category_id.clone(),
                    findings: Vec::new(),
                    score: 0.0,
                    errors: Vec::new(),
                    elapsed_ms: 0,
                })
                .findings
                .push(finding);
        }

        (by_module, run.composite_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cleartext_http_is_downscored_and_produces_a_finding() {
        let node = SecurityNode::new();
        let (results, composite) = node.run("http://example.com", None).await;
        assert!(composite < 1.0);
        let headers = results.get("security_headers").expect("security_headers module ran");
        assert_eq!(headers.findings.len(), 1);
    }

    #[tokio::test]
    async fn https_target_has_no_headers_finding() {
        let node = SecurityNode::new();
        let (results, _composite) = node.run("https://example.com", None).await;
        let headers = results.get("security_headers").expect("security_headers module ran");
        assert!(headers.findings.is_empty());
    }
}
