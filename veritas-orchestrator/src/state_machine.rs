//! The orchestrator's bounded, cyclic pipeline state machine.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestratorNode {
    Start,
    Init,
    Scout,
    Security,
    Vision,
    Graph,
    Judge,
    End,
}

impl OrchestratorNode {
    /// SCOUT→SCOUT is the only cycle the state machine permits, for the
    /// budgeted re-entry loop.
    pub fn can_transition_to(self, next: OrchestratorNode) -> bool {
        use OrchestratorNode::*;
        matches!(
            (self, next),
            (Start, Init)
                | (Init, Scout)
                | (Scout, Scout)
                | (Scout, Security)
                | (Security, Vision)
                | (Vision, Graph)
                | (Graph, Judge)
                | (Judge, End)
                | (_, End)
        )
    }

    pub fn phase_name(self) -> &'static str {
        match self {
            OrchestratorNode::Start => "start",
            OrchestratorNode::Init => "init",
            OrchestratorNode::Scout => "scout",
            OrchestratorNode::Security => "security",
            OrchestratorNode::Vision => "vision",
            OrchestratorNode::Graph => "graph",
            OrchestratorNode::Judge => "judge",
            OrchestratorNode::End => "end",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scout_may_cycle_to_itself() {
        assert!(OrchestratorNode::Scout.can_transition_to(OrchestratorNode::Scout));
    }

    #[test]
    fn every_node_may_transition_directly_to_end_on_a_fatal_condition() {
        for node in [
            OrchestratorNode::Init,
            OrchestratorNode::Scout,
            OrchestratorNode::Security,
            OrchestratorNode::Vision,
            OrchestratorNode::Graph,
            OrchestratorNode::Judge,
        ] {
            assert!(node.can_transition_to(OrchestratorNode::End));
        }
    }

    #[test]
    fn security_cannot_skip_directly_to_judge() {
        assert!(!OrchestratorNode::Security.can_transition_to(OrchestratorNode::Judge));
    }
}
