//! Bounded cyclic orchestrator pipeline: Scout -> Security -> Vision ->
//! Graph/OSINT -> Judge. Scout and Vision are pluggable
//! behind traits (`nodes::ScoutAgent`, `nodes::VisionAgent`); this
//! crate ships deterministic stand-ins for both (`scout`, `vision`)
//! since the real headless browser and VLM client live outside this
//! repository.

pub mod graph;
pub mod judge;
pub mod nodes;
pub mod orchestrator;
pub mod scout;
pub mod security_node;
pub mod state_machine;
pub mod vision;

pub use graph::GraphNode;
pub use judge::JudgeNode;
pub use nodes::{ScoutAgent, VisionAgent};
pub use orchestrator::Orchestrator;
pub use scout::DeterministicScout;
pub use security_node::SecurityNode;
pub use state_machine::OrchestratorNode;
pub use vision::DeterministicVision;
