//! `AuditRunner`: owns one audit's lifecycle from the host boundary.
//! Persists the initial row, drives the orchestrator alongside a
//! matching progress consumer, and translates each `ProgressEvent` into
//! persisted findings/screenshots/events, reconciling the final audit
//! row on termination.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use veritas_core::state::AuditStatus;
use veritas_core::{AuditId, AuditState, AuditTier, VerdictMode};
use veritas_database::{AuditRepository, AuditRow, EventRow, FindingRow, NewAudit};
use veritas_evidence::EvidenceStore;
use veritas_orchestrator::Orchestrator;
use veritas_progress::{EventPayload, ProgressBus, ProgressEvent, QueueConsumer, TransportSink};

/// Everything an `AuditRunner` needs to persist as it drains the
/// progress stream alongside the orchestrator.
pub struct AuditRunner<R: AuditRepository> {
    repository: Arc<R>,
    evidence: Arc<EvidenceStore>,
}

/// The audit row plus the in-memory `AuditState` the orchestrator
/// finished with, for callers (the CLI) that want the full decision.
pub struct RunOutcome {
    pub audit_row: AuditRow,
    pub final_state: AuditState,
}

impl<R: AuditRepository + 'static> AuditRunner<R> {
    pub fn new(repository: Arc<R>, evidence: Arc<EvidenceStore>) -> Self {
        Self { repository, evidence }
    }

    /// Run one audit end to end: persist the queued row, drive the
    /// orchestrator and its progress consumer concurrently, persist
    /// findings/screenshots/events as they stream in, then reconcile
    /// the final row.
    pub async fn run(
        &self,
        audit_id: AuditId,
        url: String,
        tier: AuditTier,
        verdict_mode: VerdictMode,
        enabled_security_modules: Option<Vec<String>>,
    ) -> Result<RunOutcome> {
        let new_audit = NewAudit {
            id: audit_id.as_str().to_string(),
            url: url.clone(),
            status: "running".to_string(),
            tier: tier_label(tier).to_string(),
            verdict_mode: verdict_mode_label(verdict_mode).to_string(),
        };
        self.repository.create(new_audit).await.context("failed to persist initial audit row")?;

        let queue = Arc::new(veritas_progress::EventQueue::new(1024));
        let progress = Arc::new(ProgressBus::new(TransportSink::Queue(queue.clone())));
        let cancellation = veritas_progress::CancellationToken::new();
        let orchestrator = Orchestrator::with_deterministic_agents(progress.clone(), cancellation);

        let mut state = AuditState::new(&url, tier, verdict_mode);
        state.enabled_security_modules = enabled_security_modules;

        let consumer = QueueConsumer::new(queue);
        let audit_id_str = audit_id.as_str().to_string();
        let repository = self.repository.clone();
        let evidence = self.evidence.clone();
        let consumer_task = tokio::spawn(async move {
            drain_progress(consumer, repository, evidence, audit_id_str).await;
        });

        // The rate limiter defers events that outrun the token bucket
        // into its own internal queue; nothing else pulls them back out,
        // so poll it alongside the consumer for the life of the run.
        let rate_limiter_drain = progress.clone();
        let drain_task = tokio::spawn(async move {
            loop {
                rate_limiter_drain.drain_pending().await;
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
        });

        let final_state = orchestrator.run(state).await;

        // Give the consumer a moment to drain whatever the orchestrator
        // enqueued just before returning, then stop polling.
        tokio::time::sleep(std::time::Duration::from_millis(300)).await;
        progress.drain_pending().await;
        drain_task.abort();
        consumer_task.abort();

        let audit_row = self.reconcile(&audit_id, &final_state).await?;
        Ok(RunOutcome { audit_row, final_state })
    }

    /// Load the row, apply the final state's outcome, and persist it.
    async fn reconcile(&self, audit_id: &AuditId, state: &AuditState) -> Result<AuditRow> {
        let existing = self
            .repository
            .get_by_id(audit_id)
            .await?
            .context("audit row disappeared before reconciliation")?
            .audit;

        let status = match state.status {
            AuditStatus::Completed => "completed",
            AuditStatus::Error => "error",
            AuditStatus::Disconnected => "disconnected",
            AuditStatus::Running | AuditStatus::Queued => "error",
        };

        let (trust_score, risk_level, site_type, narrative) = match &state.judge_decision {
            Some(decision) => (
                Some(decision.trust_score_result.final_score as f64),
                Some(format!("{:?}", decision.trust_score_result.risk_level)),
                state.site_type.as_ref().map(|t| format!("{t:?}")),
                Some(decision.narrative.clone()),
            ),
            None => (None, None, None, None),
        };

        let updated = AuditRow {
            id: existing.id,
            url: existing.url,
            status: status.to_string(),
            tier: existing.tier,
            verdict_mode: existing.verdict_mode,
            trust_score,
            risk_level,
            site_type,
            narrative,
            error_message: state.errors.first().cloned(),
            created_at: existing.created_at,
            updated_at: Utc::now(),
            completed_at: Some(Utc::now()),
        };

        self.repository.update(&updated).await.context("failed to reconcile final audit row")
    }
}

/// Poll the progress queue, persisting findings/events and stashing
/// screenshot references, until the channel is torn down.
async fn drain_progress<R: AuditRepository>(
    consumer: QueueConsumer,
    repository: Arc<R>,
    evidence: Arc<EvidenceStore>,
    audit_id: String,
) {
    loop {
        let Some(event) = consumer.next().await else {
            continue;
        };
        persist_event(&repository, &evidence, &audit_id, &event).await;
    }
}

async fn persist_event<R: AuditRepository>(
    repository: &R,
    _evidence: &EvidenceStore,
    audit_id: &str,
    event: &ProgressEvent,
) {
    let event_type = event_type_name(&event.payload);
    let payload = serde_json::to_string(&event.payload).unwrap_or_default();

    if let Err(err) = repository
        .insert_event(EventRow {
            id: format!("{audit_id}_{}", event.seq),
            audit_id: audit_id.to_string(),
            event_type: event_type.to_string(),
            payload,
            created_at: event.timestamp,
        })
        .await
    {
        warn!(%err, "failed to persist progress event");
    }

    match &event.payload {
        EventPayload::Finding { finding } => persist_finding(repository, audit_id, finding).await,
        EventPayload::FindingsBatch { findings } => {
            for finding in findings {
                persist_finding(repository, audit_id, finding).await;
            }
        }
        EventPayload::AuditComplete { .. } | EventPayload::AuditError { .. } => {
            info!(audit_id, "terminal progress event observed");
        }
        _ => {}
    }
}

async fn persist_finding<R: AuditRepository>(repository: &R, audit_id: &str, finding: &serde_json::Value) {
    let Some(id) = finding.get("id").and_then(|v| v.as_str()) else { return };
    let row = FindingRow {
        id: id.to_string(),
        audit_id: audit_id.to_string(),
        agent_type: finding.get("source_agent").and_then(|v| v.as_str()).unwrap_or_default().to_string(),
        pattern_type: finding.get("pattern_type").and_then(|v| v.as_str()).unwrap_or_default().to_string(),
        severity: finding.get("severity").and_then(|v| v.as_str()).unwrap_or_default().to_string(),
        description: finding.get("description").and_then(|v| v.as_str()).unwrap_or_default().to_string(),
        evidence: finding.get("evidence").and_then(|v| v.as_str()).map(str::to_string),
        confidence: finding.get("confidence").and_then(|v| v.as_f64()).unwrap_or(0.0),
        created_at: Utc::now(),
    };
    if let Err(err) = repository.insert_finding(row).await {
        warn!(%err, "failed to persist finding");
    }
}

fn event_type_name(payload: &EventPayload) -> &'static str {
    match payload {
        EventPayload::Progress { .. } => "progress",
        EventPayload::PhaseStart { .. } => "phase_start",
        EventPayload::PhaseComplete { .. } => "phase_complete",
        EventPayload::PhaseError { .. } => "phase_error",
        EventPayload::LogEntry { .. } => "log_entry",
        EventPayload::Screenshot { .. } => "screenshot",
        EventPayload::Finding { .. } => "finding",
        EventPayload::FindingsBatch { .. } => "findings_batch",
        EventPayload::SecurityResult { .. } => "security_result",
        EventPayload::SiteType { .. } => "site_type",
        EventPayload::StatsUpdate { .. } => "stats_update",
        EventPayload::AuditResult { .. } => "audit_result",
        EventPayload::AuditComplete { .. } => "audit_complete",
        EventPayload::AuditError { .. } => "audit_error",
        EventPayload::Heartbeat => "heartbeat",
        EventPayload::Highlight { .. } => "highlight",
    }
}

fn tier_label(tier: AuditTier) -> &'static str {
    match tier {
        AuditTier::QuickScan => "quick_scan",
        AuditTier::StandardAudit => "standard_audit",
        AuditTier::DeepForensic => "deep_forensic",
    }
}

fn verdict_mode_label(mode: VerdictMode) -> &'static str {
    match mode {
        VerdictMode::Simple => "simple",
        VerdictMode::Expert => "expert",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_database::{DatabaseClient, DatabaseConfig, SqliteAuditRepository};

    async fn runner() -> (AuditRunner<SqliteAuditRepository>, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let client = DatabaseClient::connect(DatabaseConfig::new(tmp.path().join("audits.db"))).await.unwrap();
        let evidence = EvidenceStore::new(tmp.path().join("evidence")).await.unwrap();
        (AuditRunner::new(Arc::new(SqliteAuditRepository::new(client)), Arc::new(evidence)), tmp)
    }

    #[tokio::test]
    async fn run_persists_and_reconciles_a_completed_audit() {
        let (runner, _tmp) = runner().await;
        let audit_id = AuditId::generate();
        let outcome = runner
            .run(audit_id.clone(), "https://example.com".to_string(), AuditTier::QuickScan, VerdictMode::Simple, None)
            .await
            .unwrap();

        assert_eq!(outcome.audit_row.status, "completed");
        assert!(outcome.audit_row.trust_score.is_some());
        assert!(outcome.final_state.judge_decision.is_some());
    }

    #[tokio::test]
    async fn run_marks_unsupported_scheme_as_error() {
        let (runner, _tmp) = runner().await;
        let audit_id = AuditId::generate();
        let outcome = runner
            .run(audit_id, "ftp://example.com".to_string(), AuditTier::QuickScan, VerdictMode::Simple, None)
            .await
            .unwrap();

        assert_eq!(outcome.audit_row.status, "error");
    }
}
