//! `AuditState`: the accumulator threaded through the orchestrator
//! pipeline.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::finding::Finding;
use crate::osint::OsintResult;
use crate::scoring::{SiteType, TrustScoreResult};
use crate::tier::AuditTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictMode {
    Simple,
    Expert,
}

impl Default for VerdictMode {
    fn default() -> Self {
        VerdictMode::Expert
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Queued,
    Running,
    Completed,
    Error,
    Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoutExitReason {
    Success,
    Captcha,
    Timeout,
    NavigationError,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomMetadata {
    pub forms_detected: u32,
    pub scripts_detected: u32,
    pub links_detected: u32,
    pub admin_panel_detected: bool,
    pub idor_patterns: Vec<String>,
}

/// One iteration of Scout's output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutResult {
    pub page_url: String,
    pub screenshots: Vec<String>,
    pub screenshot_labels: Vec<String>,
    pub dom_metadata: DomMetadata,
    pub network_headers: HashMap<String, String>,
    pub exit_reason: ScoutExitReason,
}

impl ScoutResult {
    /// An empty result for a Scout iteration that failed before producing
    /// anything.
    pub fn failed(page_url: impl Into<String>, exit_reason: ScoutExitReason) -> Self {
        Self {
            page_url: page_url.into(),
            screenshots: Vec::new(),
            screenshot_labels: Vec::new(),
            dom_metadata: DomMetadata::default(),
            network_headers: HashMap::new(),
            exit_reason,
        }
    }
}

/// One security module's output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityResult {
    pub module_name: String,
    pub findings: Vec<Finding>,
    pub score: f64,
    pub errors: Vec<String>,
    pub elapsed_ms: u64,
}

/// Vision agent's findings for the current iteration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisionResult {
    pub findings: Vec<Finding>,
}

/// Graph/OSINT agent's aggregate result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphResult {
    pub domain_intel: serde_json::Value,
    pub ip_geolocation: serde_json::Value,
    pub meta_analysis: serde_json::Value,
    pub inconsistencies: Vec<String>,
    pub verifications: Vec<String>,
}

/// Final Judge output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeDecision {
    pub trust_score_result: TrustScoreResult,
    pub narrative: String,
    pub recommendations: Vec<String>,
}

/// The single accumulator instance owned exclusively by one orchestrator
/// for the lifetime of an audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditState {
    // input
    pub url: String,
    pub audit_tier: AuditTier,
    pub verdict_mode: VerdictMode,
    pub enabled_security_modules: Option<Vec<String>>,

    // control
    pub iteration: u32,
    pub nim_calls_used: u32,
    pub pages_scouted: u32,
    pub started_at: DateTime<Utc>,
    pub elapsed_seconds: f64,

    // results
    pub scout_results: Vec<ScoutResult>,
    pub security_results: HashMap<String, SecurityResult>,
    pub vision_result: Option<VisionResult>,
    pub graph_result: Option<GraphResult>,
    pub osint_results: HashMap<String, OsintResult>,
    pub judge_decision: Option<JudgeDecision>,
    pub investigated_urls: Vec<String>,
    pub site_type: Option<SiteType>,
    pub site_type_confidence: Option<f64>,
    pub status: AuditStatus,
    pub errors: Vec<String>,
}

impl AuditState {
    pub fn new(url: impl Into<String>, audit_tier: AuditTier, verdict_mode: VerdictMode) -> Self {
        let url = canonicalize_url(&url.into());
        Self {
            investigated_urls: vec![url.clone()],
            url,
            audit_tier,
            verdict_mode,
            enabled_security_modules: None,
            iteration: 0,
            nim_calls_used: 0,
            pages_scouted: 0,
            started_at: Utc::now(),
            elapsed_seconds: 0.0,
            scout_results: Vec::new(),
            security_results: HashMap::new(),
            vision_result: None,
            graph_result: None,
            osint_results: HashMap::new(),
            judge_decision: None,
            site_type: None,
            site_type_confidence: None,
            status: AuditStatus::Queued,
            errors: Vec::new(),
        }
    }

    /// Record elapsed time; callers must only ever move it forward.
    pub fn tick_elapsed(&mut self, seconds: f64) {
        if seconds > self.elapsed_seconds {
            self.elapsed_seconds = seconds;
        }
    }

    /// Append a newly investigated URL, de-duplicated and order-preserving.
    pub fn record_investigated_url(&mut self, url: impl Into<String>) {
        let url = canonicalize_url(&url.into());
        if !self.investigated_urls.contains(&url) {
            self.investigated_urls.push(url);
        }
    }

    pub fn budgets(&self) -> crate::tier::TierBudgets {
        self.audit_tier.budgets()
    }

    /// True once no further Scout iterations may begin, per the tier's
    /// page/iteration caps.
    pub fn scout_budget_exhausted(&self) -> bool {
        let budgets = self.budgets();
        self.iteration >= budgets.max_iterations || self.pages_scouted >= budgets.max_pages
    }

    /// True once Vision must be skipped for the remainder of the audit.
    pub fn nim_budget_exhausted(&self) -> bool {
        self.nim_calls_used >= self.budgets().max_nim_calls
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }
}

fn canonicalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower_scheme = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower_scheme.strip_prefix("http://") {
        format!("http://{}", rest.trim_end_matches('/'))
    } else if let Some(rest) = lower_scheme.strip_prefix("https://") {
        format!("https://{}", rest.trim_end_matches('/'))
    } else {
        trimmed.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_seeds_investigated_urls_with_canonical_input() {
        let state = AuditState::new("HTTPS://Example.com/", AuditTier::StandardAudit, VerdictMode::Expert);
        assert_eq!(state.investigated_urls[0], state.url);
        assert_eq!(state.url, "https://example.com");
    }

    #[test]
    fn elapsed_seconds_never_decreases() {
        let mut state = AuditState::new("https://example.com", AuditTier::QuickScan, VerdictMode::Simple);
        state.tick_elapsed(5.0);
        state.tick_elapsed(2.0);
        assert_eq!(state.elapsed_seconds, 5.0);
        state.tick_elapsed(9.0);
        assert_eq!(state.elapsed_seconds, 9.0);
    }

    #[test]
    fn investigated_urls_deduplicate() {
        let mut state = AuditState::new("https://example.com", AuditTier::QuickScan, VerdictMode::Simple);
        state.record_investigated_url("https://example.com");
        assert_eq!(state.investigated_urls.len(), 1);
        state.record_investigated_url("https://example.com/about");
        assert_eq!(state.investigated_urls.len(), 2);
    }

    #[test]
    fn quick_scan_budget_exhausts_after_one_page() {
        let mut state = AuditState::new("https://example.com", AuditTier::QuickScan, VerdictMode::Simple);
        assert!(!state.scout_budget_exhausted());
        state.pages_scouted = 1;
        assert!(state.scout_budget_exhausted());
    }
}
