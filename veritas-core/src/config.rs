//! Process-wide configuration, loaded from the environment.
//!
//! Typed defaults overridden by environment lookups, resolved once at
//! process start and threaded through the runner into the orchestrator
//! and its collaborators.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpcMode {
    Queue,
    Stdout,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct VeritasConfig {
    pub data_dir: PathBuf,
    pub ipc_mode: Option<IpcMode>,
    pub ipc_rollout: f64,
    pub use_security_agent: bool,
    pub security_agent_rollout: f64,
    pub security_agent_timeout_secs: u64,
    pub security_agent_retry_count: u32,
    pub security_agent_fail_fast: bool,
}

impl Default for VeritasConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            ipc_mode: None,
            ipc_rollout: 0.1,
            use_security_agent: true,
            security_agent_rollout: 1.0,
            security_agent_timeout_secs: 10,
            security_agent_retry_count: 2,
            security_agent_fail_fast: false,
        }
    }
}

impl VeritasConfig {
    /// Load configuration, layering environment overrides onto defaults.
    /// Malformed values fall back to the default rather than erroring.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(dir) = env::var("VERITAS_DATA_DIR") {
            cfg.data_dir = PathBuf::from(dir);
        }
        cfg.ipc_mode = env::var("QUEUE_IPC_MODE").ok().and_then(|v| match v.as_str() {
            "queue" => Some(IpcMode::Queue),
            "stdout" => Some(IpcMode::Stdout),
            "fallback" => Some(IpcMode::Fallback),
            _ => None,
        });
        if let Ok(v) = env::var("QUEUE_IPC_ROLLOUT") {
            if let Ok(parsed) = v.parse::<f64>() {
                cfg.ipc_rollout = parsed.clamp(0.0, 1.0);
            }
        }
        if let Ok(v) = env::var("USE_SECURITY_AGENT") {
            cfg.use_security_agent = v.eq_ignore_ascii_case("true");
        }
        if let Ok(v) = env::var("SECURITY_AGENT_ROLLOUT") {
            if let Ok(parsed) = v.parse::<f64>() {
                cfg.security_agent_rollout = parsed.clamp(0.0, 1.0);
            }
        }
        if let Ok(v) = env::var("SECURITY_AGENT_TIMEOUT") {
            if let Ok(parsed) = v.parse::<u64>() {
                cfg.security_agent_timeout_secs = parsed;
            }
        }
        if let Ok(v) = env::var("SECURITY_AGENT_RETRY_COUNT") {
            if let Ok(parsed) = v.parse::<u32>() {
                cfg.security_agent_retry_count = parsed;
            }
        }
        if let Ok(v) = env::var("SECURITY_AGENT_FAIL_FAST") {
            cfg.security_agent_fail_fast = v.eq_ignore_ascii_case("true");
        }

        cfg
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("veritas_audits.db")
    }

    pub fn screenshots_root(&self) -> PathBuf {
        self.data_dir.join("screenshots")
    }

    pub fn evidence_root(&self) -> PathBuf {
        self.data_dir.join("evidence")
    }

    /// Resolve the effective IPC transport: explicit config > environment
    /// selector (already folded into `ipc_mode`) > percentage rollout.
    pub fn resolve_ipc_mode(&self, explicit: Option<IpcMode>, roll: f64) -> IpcMode {
        if let Some(mode) = explicit {
            return mode;
        }
        if let Some(mode) = self.ipc_mode {
            return mode;
        }
        if roll < self.ipc_rollout {
            IpcMode::Queue
        } else {
            IpcMode::Stdout
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rollout_below_threshold_selects_queue() {
        let cfg = VeritasConfig { ipc_rollout: 0.5, ..Default::default() };
        assert_eq!(cfg.resolve_ipc_mode(None, 0.1), IpcMode::Queue);
        assert_eq!(cfg.resolve_ipc_mode(None, 0.9), IpcMode::Stdout);
    }

    #[test]
    fn explicit_mode_wins_over_rollout() {
        let cfg = VeritasConfig::default();
        assert_eq!(cfg.resolve_ipc_mode(Some(IpcMode::Stdout), 0.0), IpcMode::Stdout);
    }
}
