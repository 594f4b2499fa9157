//! Deterministic Scout stand-in. Derives a plausible `ScoutResult` from
//! the URL's static shape alone, so the rest of the pipeline — budgets,
//! progress emission, persistence — can be driven without a browser.

use std::collections::HashMap;

use async_trait::async_trait;
use veritas_core::state::{DomMetadata, ScoutExitReason, ScoutResult};
use veritas_core::AuditState;

use crate::nodes::ScoutAgent;

#[derive(Debug, Default)]
pub struct DeterministicScout;

#[async_trait]
impl ScoutAgent for DeterministicScout {
    async fn run(&self, state: &AuditState) -> ScoutResult {
        let page_url = state.url.clone();

        if !(page_url.starts_with("http://") || page_url.starts_with("https://")) {
            return ScoutResult::failed(page_url, ScoutExitReason::NavigationError);
        }

        let index = state.pages_scouted;
        let label = format!("page_{index}");
        let lower = page_url.to_ascii_lowercase();
        let admin_panel_detected = lower.contains("/admin") || lower.contains("/wp-admin");
        let forms_detected = u32::from(lower.contains("login") || lower.contains("signin") || lower.contains("signup"));
        let idor_patterns = if lower.contains("?id=") || lower.contains("&id=") {
            vec!["sequential_numeric_id".to_string()]
        } else {
            Vec::new()
        };

        let mut network_headers = HashMap::new();
        if page_url.starts_with("https://") {
            network_headers.insert("strict-transport-security".to_string(), "max-age=31536000".to_string());
        }

        ScoutResult {
            page_url: page_url.clone(),
            screenshots: vec![format!("{index}_{label}.png")],
            screenshot_labels: vec![label],
            dom_metadata: DomMetadata {
                forms_detected,
                scripts_detected: 1,
                links_detected: 5,
                admin_panel_detected,
                idor_patterns,
            },
            network_headers,
            exit_reason: ScoutExitReason::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_core::{AuditTier, VerdictMode};

    #[tokio::test]
    async fn invalid_scheme_exits_with_navigation_error() {
        let state = AuditState::new("ftp://example.com", AuditTier::QuickScan, VerdictMode::Simple);
        let result = DeterministicScout.run(&state).await;
        assert!(matches!(result.exit_reason, ScoutExitReason::NavigationError));
        assert!(result.screenshots.is_empty());
    }

    #[tokio::test]
    async fn admin_path_is_flagged() {
        let state = AuditState::new("https://example.com/admin", AuditTier::QuickScan, VerdictMode::Simple);
        let result = DeterministicScout.run(&state).await;
        assert!(result.dom_metadata.admin_panel_detected);
    }
}
