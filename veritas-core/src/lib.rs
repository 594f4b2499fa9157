//! Shared contract types for the Veritas audit core.
//!
//! A dependency-light crate of plain data types and trait-free structs
//! that every other `veritas-*` crate builds against, so logic crates
//! never need to depend on each other just to share a struct.

pub mod audit_id;
pub mod config;
pub mod error;
pub mod finding;
pub mod osint;
pub mod scoring;
pub mod state;
pub mod tier;

pub use audit_id::AuditId;
pub use error::VeritasError;
pub use finding::{AgentType, Finding, FindingSource, Severity};
pub use osint::{OsintCategory, OsintResult, OsintStatus};
pub use scoring::{
    ConfidenceBreakdown, ConsensusResult, ConsensusStatus, CustomFinding, RiskLevel, ScoringAdjustment, ScoringContext,
    SignalName, SiteType, TrustScoreResult,
};
pub use state::{
    AuditState, AuditStatus, DomMetadata, GraphResult, JudgeDecision, ScoutExitReason, ScoutResult, SecurityResult,
    VerdictMode, VisionResult,
};
pub use tier::{AuditTier, TierBudgets};

pub type Result<T> = std::result::Result<T, VeritasError>;
