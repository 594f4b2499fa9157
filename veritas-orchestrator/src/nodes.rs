//! External-collaborator node contracts.
//!
//! Scout (headless-browser navigation, screenshot capture, DOM/JS/form
//! probes) and Vision (the VLM client) are specified only as the
//! interfaces this core consumes. This crate ships deterministic
//! stand-ins behind these traits (`scout::DeterministicScout`,
//! `vision::DeterministicVision`) so the orchestrator's state machine,
//! budgets, and progress emission can be exercised end to end without
//! either external collaborator; a real navigator or VLM client drops
//! in behind the same trait.

use async_trait::async_trait;
use veritas_core::state::{ScoutResult, VisionResult};
use veritas_core::AuditState;

/// Given the current accumulator, produce one iteration's worth of
/// navigation output. Implementations must not block past their own
/// internal timeout; a stuck or erroring navigation should resolve to
/// `ScoutResult::failed` rather than hang the orchestrator.
#[async_trait]
pub trait ScoutAgent: Send + Sync {
    async fn run(&self, state: &AuditState) -> ScoutResult;
}

/// Given the latest Scout output and the NIM calls still available,
/// produce vision findings plus however many calls were actually spent
/// (0 if the budget was already exhausted or there was nothing to
/// analyze).
#[async_trait]
pub trait VisionAgent: Send + Sync {
    async fn run(&self, scout_result: &ScoutResult, remaining_calls: u32) -> (VisionResult, u32);
}
