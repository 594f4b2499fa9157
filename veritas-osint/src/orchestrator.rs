//! OSINT orchestrator: resolves sources, enforces circuit breaker and
//! rate limiter admission, retries, and falls back to alternative
//! sources in the same category.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tracing::{debug, warn};
use veritas_core::{OsintCategory, OsintResult, OsintStatus};

use crate::circuit_breaker::{CircuitBreaker, CircuitBreakerConfig};
use crate::rate_limiter::SourceRateLimiter;
use crate::source::{build_default_registry, OsintSource, SourceCredentials};

struct RegisteredSource {
    source: Box<dyn OsintSource>,
    breaker: CircuitBreaker,
    limiter: SourceRateLimiter,
}

pub struct OsintOrchestrator {
    sources: HashMap<String, RegisteredSource>,
    per_attempt_timeout: Duration,
}

impl OsintOrchestrator {
    pub fn new(credentials: SourceCredentials) -> Self {
        let mut sources = HashMap::new();
        for source in build_default_registry(&credentials) {
            let descriptor = source.descriptor().clone();
            sources.insert(
                descriptor.name.clone(),
                RegisteredSource {
                    breaker: CircuitBreaker::new(CircuitBreakerConfig::default()),
                    limiter: SourceRateLimiter::new(descriptor.rate_limit_rpm, descriptor.rate_limit_rph),
                    source,
                },
            );
        }
        Self { sources, per_attempt_timeout: Duration::from_secs(10) }
    }

    fn sources_in_category(&self, category: OsintCategory) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .sources
            .iter()
            .filter(|(_, reg)| reg.source.descriptor().category == category)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_by_key(|name| self.sources[*name].source.descriptor().priority);
        names
    }

    /// Attempt one query against `name`. `record_failure_on_error`
    /// gates whether a failing outcome trips the circuit breaker: only
    /// the final, exhausted attempt in a retry sequence should record a
    /// failure, so intermediate retries pass `false`. The rate limiter's
    /// timestamp is only ever recorded on confirmed success, regardless
    /// of this flag, so failed calls never consume admission budget.
    async fn attempt_once(
        &self,
        name: &str,
        query_type: &str,
        query_value: &str,
        record_failure_on_error: bool,
    ) -> Option<OsintResult> {
        let reg = self.sources.get(name)?;

        if reg.breaker.is_open() {
            debug!(source = name, "circuit open, skipping");
            return None;
        }
        if !reg.limiter.try_admit() {
            debug!(source = name, "rate limit denied admission");
            return None;
        }

        match tokio::time::timeout(self.per_attempt_timeout, reg.source.query(query_type, query_value)).await {
            Ok(Ok(result)) if result.status == OsintStatus::Success => {
                reg.limiter.record_success();
                Some(result)
            }
            Ok(Ok(result)) => {
                if record_failure_on_error {
                    reg.breaker.record_failure();
                }
                Some(result)
            }
            Ok(Err(err)) => {
                warn!(source = name, %err, "osint source query failed");
                if record_failure_on_error {
                    reg.breaker.record_failure();
                }
                None
            }
            Err(_) => {
                warn!(source = name, "osint source query timed out");
                if record_failure_on_error {
                    reg.breaker.record_failure();
                }
                None
            }
        }
    }

    /// Resolve `source_name`; if absent, circuit-open, or admission
    /// denied, returns `None`. Otherwise retries up to `max_retries + 1`
    /// attempts, then falls back to up to two alternative sources in the
    /// same category with reduced retries. Only the final exhausted
    /// attempt against each source records a circuit-breaker failure.
    pub async fn query_with_retry(
        &self,
        source_name: &str,
        query_type: &str,
        query_value: &str,
        max_retries: u32,
    ) -> Option<OsintResult> {
        if !self.sources.contains_key(source_name) {
            return None;
        }

        for attempt in 0..=max_retries {
            let is_last_attempt = attempt == max_retries;
            if let Some(result) =
                self.attempt_once(source_name, query_type, query_value, is_last_attempt).await
            {
                return Some(result);
            }
        }

        let category = self.sources[source_name].source.descriptor().category;
        let alternatives: Vec<String> = self
            .sources_in_category(category)
            .into_iter()
            .filter(|name| *name != source_name)
            .take(2)
            .map(String::from)
            .collect();

        for alt in alternatives {
            if let Some(result) = self.attempt_once(&alt, query_type, query_value, true).await {
                return Some(result);
            }
        }

        None
    }

    /// Dispatch `query_type`/`query_value` against every enabled source
    /// in `category`, bounded to `max_parallel` in flight, returning only
    /// SUCCESS entries keyed by source name.
    pub async fn query_all(
        &self,
        category: OsintCategory,
        query_type: &str,
        query_value: &str,
        max_parallel: usize,
    ) -> HashMap<String, OsintResult> {
        let semaphore = Arc::new(Semaphore::new(max_parallel.max(1)));
        let names = self.sources_in_category(category);

        let mut handles = Vec::new();
        for name in names {
            let name = name.to_string();
            let query_type = query_type.to_string();
            let query_value = query_value.to_string();
            let semaphore = semaphore.clone();
            let this = &*self;
            handles.push(async move {
                let _permit = semaphore.acquire().await.expect("semaphore not closed");
                let result = this.attempt_once(&name, &query_type, &query_value, true).await;
                (name, result)
            });
        }

        let mut out = HashMap::new();
        for (name, result) in futures::future::join_all(handles).await {
            if let Some(result) = result {
                if result.status == OsintStatus::Success {
                    out.insert(name, result);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn query_with_retry_returns_none_for_unknown_source() {
        let orchestrator = OsintOrchestrator::new(SourceCredentials::default());
        let result = orchestrator.query_with_retry("nonexistent", "a_record", "example.com", 2).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn query_with_retry_succeeds_against_dns() {
        let orchestrator = OsintOrchestrator::new(SourceCredentials::default());
        let result = orchestrator.query_with_retry("whois", "domain", "example.com", 1).await;
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn query_all_only_returns_success_entries() {
        let orchestrator = OsintOrchestrator::new(SourceCredentials::default());
        let results = orchestrator.query_all(OsintCategory::Whois, "domain", "example.com", 3).await;
        assert!(results.contains_key("whois"));
    }

    #[tokio::test]
    async fn credential_conditional_sources_register_only_when_present() {
        let without = OsintOrchestrator::new(SourceCredentials::default());
        assert!(without.sources_in_category(OsintCategory::ThreatIntel).is_empty());

        let with = OsintOrchestrator::new(SourceCredentials {
            abuseipdb_api_key: Some("key".into()),
            urlvoid_api_key: None,
        });
        assert_eq!(with.sources_in_category(OsintCategory::ThreatIntel).len(), 1);
    }
}
