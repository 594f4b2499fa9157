//! Crate-wide error taxonomy.

use thiserror::Error;

/// The closed set of ways an audit, node, or subsystem can fail.
///
/// A `thiserror`-derived enum at crate boundaries, with an
/// `anyhow`-wrapped catch-all for everything else.
#[derive(Debug, Error)]
pub enum VeritasError {
    /// A tier budget (iterations/pages/nim-calls) was exceeded. Non-fatal;
    /// the orchestrator honors this by halting re-entry into the node.
    #[error("budget exceeded: {0}")]
    BudgetExceeded(String),

    /// A node-level transient failure (network error, timeout, degraded
    /// upstream). Recoverable: appended to `AuditState.errors`.
    #[error("node transient failure in {node}: {message}")]
    NodeTransient { node: String, message: String },

    /// A node raised an unhandled error that the orchestrator boundary
    /// caught. The pipeline still proceeds to Judge.
    #[error("node fatal failure in {node}: {message}")]
    NodeFatal { node: String, message: String },

    /// The audit itself cannot continue (invalid url, worker crash,
    /// cancellation, unparseable final result).
    #[error("audit fatal failure: {0}")]
    AuditFatal(String),

    /// An OSINT source failed; counted at its circuit breaker.
    #[error("osint source '{source}' failed: {message}")]
    OsintSourceFailure { source: String, message: String },

    /// A persistence operation could not complete after bounded retries.
    #[error("persistence conflict: {0}")]
    PersistenceConflict(String),

    /// A filesystem containment check refused an operation. This is
    /// unconditional and treated as a programming error in the caller.
    #[error("path containment violation: {0}")]
    ContainmentViolation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VeritasError {
    /// True for errors that the orchestrator should treat as non-fatal:
    /// append to `errors[]` and continue rather than aborting the audit.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            VeritasError::BudgetExceeded(_)
                | VeritasError::NodeTransient { .. }
                | VeritasError::NodeFatal { .. }
                | VeritasError::OsintSourceFailure { .. }
        )
    }
}
