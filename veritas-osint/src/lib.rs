//! OSINT orchestrator: source registry, per-source circuit breaking and
//! rate limiting, retry-with-fallback, and bounded-parallel fan-out.

pub mod circuit_breaker;
pub mod orchestrator;
pub mod rate_limiter;
pub mod source;
pub mod sources;

pub use circuit_breaker::{CircuitBreaker, CircuitBreakerConfig};
pub use orchestrator::OsintOrchestrator;
pub use rate_limiter::SourceRateLimiter;
pub use source::{build_default_registry, OsintSource, SourceCredentials, SourceDescriptor};
