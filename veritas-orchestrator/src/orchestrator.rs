//! The orchestrator: drives `AuditState` through the bounded cyclic
//! pipeline.

use std::sync::Arc;

use tracing::{info, warn};
use veritas_core::state::{AuditStatus, VisionResult};
use veritas_core::AuditState;
use veritas_progress::{AgentKind, CancellationToken, EventPayload, ProgressBus};

/// Agents still ahead of `node` in pipeline order, for the ETA attached
/// to that node's `progress` event.
fn remaining_agents(node: OrchestratorNode) -> &'static [AgentKind] {
    use AgentKind::*;
    match node {
        OrchestratorNode::Start | OrchestratorNode::Init => {
            &[Scout, Security, Vision, Graph, Judge]
        }
        OrchestratorNode::Scout => &[Security, Vision, Graph, Judge],
        OrchestratorNode::Security => &[Vision, Graph, Judge],
        OrchestratorNode::Vision => &[Graph, Judge],
        OrchestratorNode::Graph => &[Judge],
        OrchestratorNode::Judge | OrchestratorNode::End => &[],
    }
}

/// Rough pipeline-position percentage for a node's `phase_start`, used
/// only to drive the `progress` event's `pct` field.
fn phase_pct(node: OrchestratorNode) -> f32 {
    match node {
        OrchestratorNode::Start => 0.0,
        OrchestratorNode::Init => 5.0,
        OrchestratorNode::Scout => 15.0,
        OrchestratorNode::Security => 40.0,
        OrchestratorNode::Vision => 60.0,
        OrchestratorNode::Graph => 80.0,
        OrchestratorNode::Judge => 95.0,
        OrchestratorNode::End => 100.0,
    }
}

use crate::graph::GraphNode;
use crate::judge::JudgeNode;
use crate::nodes::{ScoutAgent, VisionAgent};
use crate::scout::DeterministicScout;
use crate::security_node::SecurityNode;
use crate::state_machine::OrchestratorNode;
use crate::vision::DeterministicVision;

/// Drives one audit's `AuditState` from `Start` to `End`. Scout and
/// Vision are pluggable behind their trait objects; Security, Graph, and Judge are concrete.
pub struct Orchestrator {
    scout: Box<dyn ScoutAgent>,
    vision: Box<dyn VisionAgent>,
    security: SecurityNode,
    graph: GraphNode,
    progress: Arc<ProgressBus>,
    cancellation: CancellationToken,
}

impl Orchestrator {
    pub fn new(
        scout: Box<dyn ScoutAgent>,
        vision: Box<dyn VisionAgent>,
        security: SecurityNode,
        graph: GraphNode,
        progress: Arc<ProgressBus>,
        cancellation: CancellationToken,
    ) -> Self {
        Self { scout, vision, security, graph, progress, cancellation }
    }

    /// Convenience constructor wiring the deterministic Scout/Vision
    /// stand-ins and the default Security/Graph nodes.
    pub fn with_deterministic_agents(progress: Arc<ProgressBus>, cancellation: CancellationToken) -> Self {
        Self::new(
            Box::new(DeterministicScout),
            Box::new(DeterministicVision),
            SecurityNode::new(),
            GraphNode::default(),
            progress,
            cancellation,
        )
    }

    fn emit_phase_start(&self, node: OrchestratorNode, message: impl Into<String>) {
        let message = message.into();
        self.progress.emit(EventPayload::PhaseStart { phase: node.phase_name().to_string(), message: message.clone() });

        let remaining = remaining_agents(node);
        let eta_seconds =
            if remaining.is_empty() { None } else { Some(self.progress.estimate_remaining("generic", remaining)) };
        self.progress.emit(EventPayload::Progress { pct: phase_pct(node), eta_seconds, message });
    }

    fn emit_phase_complete(&self, node: OrchestratorNode, summary: serde_json::Value) {
        self.progress.emit(EventPayload::PhaseComplete { phase: node.phase_name().to_string(), summary });
    }

    fn emit_phase_error(&self, node: OrchestratorNode, error: impl Into<String>) {
        self.progress.emit(EventPayload::PhaseError { phase: node.phase_name().to_string(), error: error.into() });
    }

    fn cancelled(&self, state: &mut AuditState) -> bool {
        if self.cancellation.is_cancelled() {
            state.status = AuditStatus::Disconnected;
            state.push_error("audit cancelled");
            self.progress.emit(EventPayload::AuditError { error: "cancelled".to_string() });
            true
        } else {
            false
        }
    }

    /// Run the full pipeline to completion (or to an early terminal
    /// state on cancellation / a fatal init error), returning the
    /// mutated `AuditState`.
    pub async fn run(&self, mut state: AuditState) -> AuditState {
        state.status = AuditStatus::Running;

        self.emit_phase_start(OrchestratorNode::Init, "validating target");
        if !(state.url.starts_with("http://") || state.url.starts_with("https://")) {
            state.push_error("unsupported URL scheme");
            state.status = AuditStatus::Error;
            self.emit_phase_error(OrchestratorNode::Init, "unsupported URL scheme");
            self.progress.emit(EventPayload::AuditError { error: "unsupported URL scheme".to_string() });
            return state;
        }
        self.emit_phase_complete(OrchestratorNode::Init, serde_json::json!({ "url": state.url }));

        if self.cancelled(&mut state) {
            return state;
        }
        self.run_scout_loop(&mut state).await;

        if self.cancelled(&mut state) {
            return state;
        }
        self.run_security(&mut state).await;

        if self.cancelled(&mut state) {
            return state;
        }
        self.run_vision(&mut state).await;

        if self.cancelled(&mut state) {
            return state;
        }
        self.run_graph(&mut state).await;

        if self.cancelled(&mut state) {
            return state;
        }
        self.run_judge(&mut state);

        state.status = AuditStatus::Completed;
        self.progress.flush_findings();
        let elapsed = state.elapsed_seconds;
        self.progress.emit(EventPayload::AuditResult {
            result: serde_json::to_value(&state.judge_decision).unwrap_or(serde_json::Value::Null),
        });
        self.progress.emit(EventPayload::AuditComplete { elapsed });

        state
    }

    async fn run_scout_loop(&self, state: &mut AuditState) {
        self.emit_phase_start(OrchestratorNode::Scout, "beginning navigation");

        loop {
            if state.scout_budget_exhausted() {
                break;
            }
            let result = self.scout.run(state).await;
            state.iteration += 1;

            for (index, url) in result.screenshots.iter().enumerate() {
                self.progress.emit(EventPayload::Screenshot {
                    url: url.clone(),
                    label: result.screenshot_labels.get(index).cloned().unwrap_or_default(),
                    index: index as u32,
                });
            }

            let exit_reason = result.exit_reason;
            let has_screenshots = !result.screenshots.is_empty();
            state.record_investigated_url(result.page_url.clone());
            state.scout_results.push(result);
            if has_screenshots {
                state.pages_scouted += 1;
            }

            if !matches!(exit_reason, veritas_core::state::ScoutExitReason::Success) {
                warn!(?exit_reason, "scout iteration ended without success");
                state.push_error(format!("scout exit: {exit_reason:?}"));
                break;
            }
        }

        self.emit_phase_complete(
            OrchestratorNode::Scout,
            serde_json::json!({ "pages_scouted": state.pages_scouted, "iterations": state.iteration }),
        );
    }

    async fn run_security(&self, state: &mut AuditState) {
        self.emit_phase_start(OrchestratorNode::Security, "running security modules");
        let started = std::time::Instant::now();

        let (results, composite_score) =
            self.security.run(&state.url, state.enabled_security_modules.as_deref()).await;

        for (module, result) in &results {
            self.progress.emit(EventPayload::SecurityResult {
                module: module.clone(),
                result: serde_json::to_value(result).unwrap_or(serde_json::Value::Null),
            });
            for finding in &result.findings {
                self.progress.emit_finding(serde_json::to_value(finding).unwrap_or(serde_json::Value::Null));
            }
        }
        state.security_results = results;

        self.progress.record_duration("generic", AgentKind::Security, started.elapsed().as_millis() as f64);
        self.emit_phase_complete(OrchestratorNode::Security, serde_json::json!({ "composite_score": composite_score }));
    }

    async fn run_vision(&self, state: &mut AuditState) {
        self.emit_phase_start(OrchestratorNode::Vision, "analyzing captured pages");

        let vision_result = if let Some(latest) = state.scout_results.last() {
            if state.nim_budget_exhausted() {
                info!("nim call budget exhausted; skipping vision analysis");
                VisionResult::default()
            } else {
                let remaining = state.budgets().max_nim_calls.saturating_sub(state.nim_calls_used);
                let (result, spent) = self.vision.run(latest, remaining).await;
                state.nim_calls_used += spent;
                for finding in &result.findings {
                    self.progress.emit_finding(serde_json::to_value(finding).unwrap_or(serde_json::Value::Null));
                }
                result
            }
        } else {
            VisionResult::default()
        };

        self.emit_phase_complete(OrchestratorNode::Vision, serde_json::json!({ "findings": vision_result.findings.len() }));
        state.vision_result = Some(vision_result);
    }

    async fn run_graph(&self, state: &mut AuditState) {
        self.emit_phase_start(OrchestratorNode::Graph, "gathering OSINT signals");
        let (graph_result, osint_results) = self.graph.run(&state.url).await;
        self.emit_phase_complete(
            OrchestratorNode::Graph,
            serde_json::json!({ "sources_consulted": osint_results.len() }),
        );
        state.graph_result = Some(graph_result);
        state.osint_results = osint_results;
    }

    fn run_judge(&self, state: &mut AuditState) {
        self.emit_phase_start(OrchestratorNode::Judge, "computing trust verdict");
        let (site_type, confidence, decision) = JudgeNode::run(state);

        self.progress.emit(EventPayload::SiteType { site_type: format!("{site_type:?}"), confidence });
        self.emit_phase_complete(
            OrchestratorNode::Judge,
            serde_json::json!({ "final_score": decision.trust_score_result.final_score }),
        );

        state.site_type = Some(site_type);
        state.site_type_confidence = Some(confidence);
        state.judge_decision = Some(decision);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use veritas_core::{AuditTier, VerdictMode};
    use veritas_progress::{EventQueue, TransportSink};

    fn test_bus() -> (Arc<ProgressBus>, Arc<EventQueue>) {
        let queue = Arc::new(EventQueue::new(256));
        (Arc::new(ProgressBus::new(TransportSink::Queue(queue.clone()))), queue)
    }

    #[tokio::test]
    async fn a_full_run_reaches_completed_with_a_judge_decision() {
        let (bus, _queue) = test_bus();
        let orchestrator = Orchestrator::with_deterministic_agents(bus, CancellationToken::new());
        let state = AuditState::new("https://example.com", AuditTier::QuickScan, VerdictMode::Simple);
        let result = orchestrator.run(state).await;

        assert_eq!(result.status, AuditStatus::Completed);
        assert!(result.judge_decision.is_some());
        assert!(!result.scout_results.is_empty());
    }

    #[tokio::test]
    async fn an_unsupported_scheme_errors_before_scouting() {
        let (bus, _queue) = test_bus();
        let orchestrator = Orchestrator::with_deterministic_agents(bus, CancellationToken::new());
        let state = AuditState::new("ftp://example.com", AuditTier::QuickScan, VerdictMode::Simple);
        let result = orchestrator.run(state).await;

        assert_eq!(result.status, AuditStatus::Error);
        assert!(result.scout_results.is_empty());
    }

    #[tokio::test]
    async fn cancellation_before_scout_short_circuits_the_pipeline() {
        let (bus, _queue) = test_bus();
        let cancellation = CancellationToken::new();
        cancellation.cancel();
        let orchestrator = Orchestrator::with_deterministic_agents(bus, cancellation);
        let state = AuditState::new("https://example.com", AuditTier::QuickScan, VerdictMode::Simple);
        let result = orchestrator.run(state).await;

        assert_eq!(result.status, AuditStatus::Disconnected);
        assert!(result.judge_decision.is_none());
    }

    #[test]
    fn phase_start_emits_a_progress_event_with_an_eta_for_non_terminal_nodes() {
        let (bus, queue) = test_bus();
        let orchestrator = Orchestrator::with_deterministic_agents(bus, CancellationToken::new());
        orchestrator.emit_phase_start(OrchestratorNode::Init, "validating target");

        let mut saw_progress_with_eta = false;
        while let Some(event) = queue.try_recv() {
            if let EventPayload::Progress { eta_seconds, pct, .. } = event.payload {
                assert_eq!(pct, phase_pct(OrchestratorNode::Init));
                saw_progress_with_eta = eta_seconds.is_some();
            }
        }
        assert!(saw_progress_with_eta, "init has remaining agents ahead of it, so its ETA should be populated");
    }

    #[test]
    fn phase_start_emits_a_progress_event_with_no_eta_once_no_agents_remain() {
        let (bus, queue) = test_bus();
        let orchestrator = Orchestrator::with_deterministic_agents(bus, CancellationToken::new());
        orchestrator.emit_phase_start(OrchestratorNode::Judge, "computing trust verdict");

        let mut saw_progress_without_eta = false;
        while let Some(event) = queue.try_recv() {
            if let EventPayload::Progress { eta_seconds, .. } = event.payload {
                saw_progress_without_eta = eta_seconds.is_none();
            }
        }
        assert!(saw_progress_without_eta, "judge has no remaining agents, so its ETA should be None");
    }

    #[tokio::test]
    async fn quick_scan_tier_stops_scouting_after_its_page_budget() {
        let (bus, _queue) = test_bus();
        let orchestrator = Orchestrator::with_deterministic_agents(bus, CancellationToken::new());
        let state = AuditState::new("https://example.com", AuditTier::QuickScan, VerdictMode::Simple);
        let result = orchestrator.run(state).await;

        assert!(result.pages_scouted <= result.budgets().max_pages);
    }
}
