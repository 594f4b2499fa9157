//! Per-source sliding-window circuit breaker. Exactly one sliding
//! window of failure timestamps and no half-open probing state machine;
//! kept in that shape rather than generalized.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy)]
pub struct CircuitBreakerConfig {
    pub failure_threshold: usize,
    pub timeout_seconds: u64,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self { failure_threshold: 5, timeout_seconds: 60 }
    }
}

pub struct CircuitBreaker {
    config: CircuitBreakerConfig,
    failures: Mutex<Vec<Instant>>,
}

impl CircuitBreaker {
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self { config, failures: Mutex::new(Vec::new()) }
    }

    fn prune(&self, failures: &mut Vec<Instant>) {
        let window = Duration::from_secs(self.config.timeout_seconds);
        let now = Instant::now();
        failures.retain(|t| now.duration_since(*t) < window);
    }

    /// OPEN iff the pruned failure count meets the threshold.
    pub fn is_open(&self) -> bool {
        let mut failures = self.failures.lock();
        self.prune(&mut failures);
        failures.len() >= self.config.failure_threshold
    }

    pub fn record_failure(&self) {
        let mut failures = self.failures.lock();
        self.prune(&mut failures);
        failures.push(Instant::now());
    }

    /// Successful calls do not reset the window; only an explicit reset
    /// (or natural aging-out) clears it.
    pub fn reset(&self) {
        self.failures.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_after_threshold_failures() {
        let breaker = CircuitBreaker::new(CircuitBreakerConfig { failure_threshold: 3, timeout_seconds: 60 });
        assert!(!breaker.is_open());
        breaker.record_failure();
        breaker.record_failure();
        assert!(!breaker.is_open());
        breaker.record_failure();
        assert!(breaker.is_open());
    }

    #[test]
    fn reset_clears_the_window() {
        let breaker = CircuitBreaker::new(CircuitBreakerConfig { failure_threshold: 1, timeout_seconds: 60 });
        breaker.record_failure();
        assert!(breaker.is_open());
        breaker.reset();
        assert!(!breaker.is_open());
    }

    #[test]
    fn successful_calls_do_not_reset_the_window() {
        let breaker = CircuitBreaker::new(CircuitBreakerConfig { failure_threshold: 2, timeout_seconds: 60 });
        breaker.record_failure();
        // no explicit "record_success" exists: the window only ages out.
        assert!(!breaker.is_open());
        breaker.record_failure();
        assert!(breaker.is_open());
    }
}
