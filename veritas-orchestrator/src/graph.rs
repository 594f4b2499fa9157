//! Graph/OSINT node: wraps `veritas_osint::OsintOrchestrator`, querying
//! the always-available categories unconditionally and the
//! credential-gated ones when configured, then folds the results into
//! the `GraphResult` shape `AuditState` carries.

use std::collections::HashMap;

use veritas_core::{OsintCategory, OsintResult};
use veritas_osint::{OsintOrchestrator, SourceCredentials};

const MAX_PARALLEL_PER_CATEGORY: usize = 3;

pub struct GraphNode {
    orchestrator: OsintOrchestrator,
}

impl Default for GraphNode {
    fn default() -> Self {
        Self::new(SourceCredentials::from_env())
    }
}

impl GraphNode {
    pub fn new(credentials: SourceCredentials) -> Self {
        Self { orchestrator: OsintOrchestrator::new(credentials) }
    }

    pub async fn run(&self, target_url: &str) -> (veritas_core::GraphResult, HashMap<String, OsintResult>) {
        let host = extract_host(target_url);

        let mut all_results = HashMap::new();
        for category in [OsintCategory::Dns, OsintCategory::Whois, OsintCategory::Ssl] {
            let results = self.orchestrator.query_all(category, "domain", &host, MAX_PARALLEL_PER_CATEGORY).await;
            all_results.extend(results);
        }
        for category in [OsintCategory::ThreatIntel, OsintCategory::Reputation] {
            let results = self.orchestrator.query_all(category, "domain", &host, MAX_PARALLEL_PER_CATEGORY).await;
            all_results.extend(results);
        }

        let domain_intel = all_results
            .get("whois")
            .map(|r| r.data.clone())
            .unwrap_or(serde_json::Value::Null);
        let ip_geolocation = all_results
            .get("dns")
            .map(|r| r.data.clone())
            .unwrap_or(serde_json::Value::Null);
        let meta_analysis = all_results
            .get("ssl")
            .map(|r| r.data.clone())
            .unwrap_or(serde_json::Value::Null);

        let mut inconsistencies = Vec::new();
        let mut verifications = Vec::new();
        for (source, result) in &all_results {
            if result.confidence_score >= 0.7 && matches!(result.category, OsintCategory::ThreatIntel | OsintCategory::Reputation)
            {
                inconsistencies.push(format!("{source} flagged elevated risk (confidence {:.2})", result.confidence_score));
            } else {
                verifications.push(format!("{source} responded for {host}"));
            }
        }

        (
            veritas_core::GraphResult { domain_intel, ip_geolocation, meta_analysis, inconsistencies, verifications },
            all_results,
        )
    }
}

/// Strip the scheme and any path/query/fragment, returning the bare
/// host, e.g. `https://example.com/login?id=1` -> `example.com`.
pub fn extract_host(url: &str) -> String {
    let without_scheme = url.split("://").nth(1).unwrap_or(url);
    let host = without_scheme.split(['/', '?', '#']).next().unwrap_or(without_scheme);
    host.split('@').last().unwrap_or(host).split(':').next().unwrap_or(host).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_host_strips_scheme_and_path() {
        assert_eq!(extract_host("https://example.com/login?id=1"), "example.com");
        assert_eq!(extract_host("http://sub.example.com:8080/"), "sub.example.com");
        assert_eq!(extract_host("example.com"), "example.com");
    }

    #[tokio::test]
    async fn run_queries_always_on_categories() {
        let node = GraphNode::new(SourceCredentials::default());
        let (_result, osint_results) = node.run("https://example.com").await;
        assert!(osint_results.contains_key("dns"));
        assert!(osint_results.contains_key("whois"));
        assert!(osint_results.contains_key("ssl"));
        assert!(!osint_results.contains_key("abuseipdb"));
    }
}
