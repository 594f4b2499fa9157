//! Progress bus: a totally ordered, typed event stream from the
//! orchestrator to an external consumer, over either an in-process
//! queue or a line-delimited stdout pipe.

pub mod batcher;
pub mod bus;
pub mod cancellation;
pub mod estimator;
pub mod event;
pub mod rate_limiter;
pub mod transport;

pub use batcher::FindingsBatcher;
pub use bus::{ProgressBus, QueueConsumer, TransportSink};
pub use cancellation::CancellationToken;
pub use estimator::{AgentKind, CompletionEstimator};
pub use event::{EventPayload, Priority, ProgressEvent};
pub use rate_limiter::{AcquireOutcome, RateLimiter, RateLimiterConfig, RateLimiterStats};
pub use transport::{EventQueue, StdoutCodec};
