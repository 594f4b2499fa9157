//! Audit tier presets and their budgets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditTier {
    QuickScan,
    StandardAudit,
    DeepForensic,
}

impl Default for AuditTier {
    fn default() -> Self {
        AuditTier::StandardAudit
    }
}

/// Per-tier budget caps enforced by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBudgets {
    pub max_pages: u32,
    pub max_iterations: u32,
    pub max_nim_calls: u32,
}

impl AuditTier {
    pub fn budgets(self) -> TierBudgets {
        match self {
            AuditTier::QuickScan => TierBudgets {
                max_pages: 1,
                max_iterations: 1,
                max_nim_calls: 3,
            },
            AuditTier::StandardAudit => TierBudgets {
                max_pages: 5,
                max_iterations: 3,
                max_nim_calls: 15,
            },
            AuditTier::DeepForensic => TierBudgets {
                max_pages: 15,
                max_iterations: 6,
                max_nim_calls: 40,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_budgets_match_spec_table() {
        assert_eq!(
            AuditTier::QuickScan.budgets(),
            TierBudgets { max_pages: 1, max_iterations: 1, max_nim_calls: 3 }
        );
        assert_eq!(
            AuditTier::StandardAudit.budgets(),
            TierBudgets { max_pages: 5, max_iterations: 3, max_nim_calls: 15 }
        );
        assert_eq!(
            AuditTier::DeepForensic.budgets(),
            TierBudgets { max_pages: 15, max_iterations: 6, max_nim_calls: 40 }
        );
    }
}
