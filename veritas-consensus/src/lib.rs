//! Multi-agent finding consensus and OSINT-source consensus.

pub mod engine;
pub mod osint_consensus;

pub use engine::{confidence_tier, ConfidenceTier, ConsensusEngine};
pub use osint_consensus::{compute_osint_consensus, OsintConsensusResult, OsintConsensusStatus, OsintVerdict};
