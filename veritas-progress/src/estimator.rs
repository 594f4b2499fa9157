//! Completion-time estimator: a per (site_type, agent) exponential moving
//! average of duration, with a fixed fallback table.

use std::collections::HashMap;

use parking_lot::RwLock;

const SMOOTHING_ALPHA: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Scout,
    Security,
    Vision,
    Graph,
    Judge,
    Osint,
}

impl AgentKind {
    fn default_ms(self) -> f64 {
        match self {
            AgentKind::Scout => 20_000.0,
            AgentKind::Vision => 30_000.0,
            AgentKind::Security => 15_000.0,
            AgentKind::Graph => 10_000.0,
            AgentKind::Judge => 10_000.0,
            AgentKind::Osint => 25_000.0,
        }
    }
}

/// Tracks a running EMA of node duration per (site_type, agent) pair and
/// answers "how long until the remaining agents finish".
pub struct CompletionEstimator {
    ema_ms: RwLock<HashMap<(String, AgentKind), f64>>,
}

impl Default for CompletionEstimator {
    fn default() -> Self {
        Self { ema_ms: RwLock::new(HashMap::new()) }
    }
}

impl CompletionEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observed duration for (site_type, agent), updating the
    /// EMA with smoothing `alpha = 0.2`.
    pub fn observe(&self, site_type: &str, agent: AgentKind, duration_ms: f64) {
        let mut table = self.ema_ms.write();
        let key = (site_type.to_string(), agent);
        let updated = match table.get(&key) {
            Some(prev) => SMOOTHING_ALPHA * duration_ms + (1.0 - SMOOTHING_ALPHA) * prev,
            None => duration_ms,
        };
        table.insert(key, updated);
    }

    fn estimate_one(&self, site_type: &str, agent: AgentKind) -> f64 {
        let table = self.ema_ms.read();
        table
            .get(&(site_type.to_string(), agent))
            .copied()
            .unwrap_or_else(|| agent.default_ms())
    }

    /// Sum the estimated duration, in seconds, across all `remaining_agents`.
    pub fn estimate_remaining(&self, site_type: &str, remaining_agents: &[AgentKind]) -> f64 {
        remaining_agents
            .iter()
            .map(|agent| self.estimate_one(site_type, *agent))
            .sum::<f64>()
            / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_table_when_no_history() {
        let est = CompletionEstimator::new();
        let seconds = est.estimate_remaining("ecommerce", &[AgentKind::Scout, AgentKind::Vision]);
        assert_eq!(seconds, 50.0); // 20s + 30s defaults
    }

    #[test]
    fn ema_blends_toward_new_observations() {
        let est = CompletionEstimator::new();
        est.observe("ecommerce", AgentKind::Security, 5_000.0);
        let first = est.estimate_one("ecommerce", AgentKind::Security);
        assert_eq!(first, 5_000.0);
        est.observe("ecommerce", AgentKind::Security, 25_000.0);
        let second = est.estimate_one("ecommerce", AgentKind::Security);
        // 0.2*25000 + 0.8*5000 = 9000
        assert_eq!(second, 9_000.0);
    }
}
