//! Deterministic Vision stand-in. Derives
//! findings from the Scout's DOM metadata rather than inspecting actual
//! screenshot pixels, honoring the remaining NIM-call budget exactly
//! like a real VLM client would.

use async_trait::async_trait;
use veritas_core::state::{ScoutResult, VisionResult};
use veritas_core::{AgentType, Finding, Severity};

use crate::nodes::VisionAgent;

#[derive(Debug, Default)]
pub struct DeterministicVision;

#[async_trait]
impl VisionAgent for DeterministicVision {
    async fn run(&self, scout_result: &ScoutResult, remaining_calls: u32) -> (VisionResult, u32) {
        if remaining_calls == 0 || scout_result.screenshots.is_empty() {
            return (VisionResult::default(), 0);
        }

        let mut findings = Vec::new();
        if scout_result.dom_metadata.admin_panel_detected {
            findings.push(Finding::new(
                "vision-admin-panel-exposed",
                "visual_anomaly",
                "exposed_admin_panel",
                Severity::Medium,
                0.6,
                "screenshot shows an unauthenticated admin panel surface",
                &scout_result.page_url,
                AgentType::Vision,
            ));
        }
        if !scout_result.dom_metadata.idor_patterns.is_empty() {
            findings.push(Finding::new(
                "vision-sequential-id-in-url",
                "visual_anomaly",
                "idor_pattern",
                Severity::Low,
                0.5,
                "page URL exposes a sequential numeric identifier",
                &scout_result.page_url,
                AgentType::Vision,
            ));
        }

        (VisionResult { findings }, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_core::state::{DomMetadata, ScoutExitReason};

    fn scout_with(admin: bool) -> ScoutResult {
        ScoutResult {
            page_url: "https://example.com".into(),
            screenshots: vec!["0_page_0.png".into()],
            screenshot_labels: vec!["page_0".into()],
            dom_metadata: DomMetadata { admin_panel_detected: admin, ..Default::default() },
            network_headers: Default::default(),
            exit_reason: ScoutExitReason::Success,
        }
    }

    #[tokio::test]
    async fn exhausted_budget_produces_no_findings_and_spends_nothing() {
        let (result, spent) = DeterministicVision.run(&scout_with(true), 0).await;
        assert!(result.findings.is_empty());
        assert_eq!(spent, 0);
    }

    #[tokio::test]
    async fn admin_panel_triggers_a_finding_and_spends_one_call() {
        let (result, spent) = DeterministicVision.run(&scout_with(true), 5).await;
        assert_eq!(result.findings.len(), 1);
        assert_eq!(spent, 1);
    }
}
