//! The progress bus: ties the rate limiter, findings batcher, ETA
//! estimator, and transport together into one producer-facing API.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::batcher::FindingsBatcher;
use crate::estimator::{AgentKind, CompletionEstimator};
use crate::event::{EventPayload, ProgressEvent};
use crate::rate_limiter::{AcquireOutcome, RateLimiter, RateLimiterConfig};
use crate::transport::{EventQueue, StdoutCodec};

/// Where delivered (post-rate-limit) events actually go.
pub enum TransportSink {
    /// In-process: events land in a shared bounded queue a consumer reads.
    Queue(Arc<EventQueue>),
    /// Cross-process: events are printed to stdout behind the sentinel
    /// marker for a parent process to line-scan.
    Stdout,
}

/// Producer-side handle the orchestrator emits events through.
pub struct ProgressBus {
    seq: AtomicU64,
    limiter: RateLimiter,
    batcher: FindingsBatcher,
    estimator: CompletionEstimator,
    sink: TransportSink,
}

impl ProgressBus {
    pub fn new(sink: TransportSink) -> Self {
        Self::with_config(sink, RateLimiterConfig::default())
    }

    pub fn with_config(sink: TransportSink, rate_config: RateLimiterConfig) -> Self {
        Self {
            seq: AtomicU64::new(0),
            limiter: RateLimiter::new(rate_config),
            batcher: FindingsBatcher::default(),
            estimator: CompletionEstimator::new(),
            sink,
        }
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn deliver(&self, event: ProgressEvent) {
        match &self.sink {
            TransportSink::Queue(queue) => queue.offer(event),
            TransportSink::Stdout => match StdoutCodec::encode(&event) {
                Ok(line) => println!("{line}"),
                Err(err) => debug!(%err, "failed to encode progress event"),
            },
        }
    }

    /// Emit a payload through the rate limiter. Always assigns the next
    /// sequence number, even if the event ends up queued or dropped, so
    /// `seq` reflects emission order, not delivery order.
    pub fn emit(&self, payload: EventPayload) {
        let event = ProgressEvent::new(self.next_seq(), payload);
        if let AcquireOutcome::Emit(event) = self.limiter.acquire(event) {
            self.deliver(event);
        }
    }

    /// Drain any rate-limiter-queued events that now have a token
    /// available. Callers (the runner's emit loop) should call this
    /// periodically alongside `emit`.
    pub async fn drain_pending(&self) {
        while let Some(event) = self.limiter.try_dequeue() {
            self.deliver(event);
        }
    }

    pub fn emit_finding(&self, finding: serde_json::Value) {
        if let Some(batch) = self.batcher.push(finding) {
            self.emit(EventPayload::FindingsBatch { findings: batch });
        }
    }

    /// Force any buffered findings out.
    pub fn flush_findings(&self) {
        if let Some(batch) = self.batcher.flush() {
            self.emit(EventPayload::FindingsBatch { findings: batch });
        }
    }

    pub fn record_duration(&self, site_type: &str, agent: AgentKind, duration_ms: f64) {
        self.estimator.observe(site_type, agent, duration_ms);
    }

    pub fn estimate_remaining(&self, site_type: &str, remaining_agents: &[AgentKind]) -> f64 {
        self.estimator.estimate_remaining(site_type, remaining_agents)
    }

    pub fn rate_limiter_stats(&self) -> crate::rate_limiter::RateLimiterStats {
        self.limiter.stats()
    }
}

/// Consumer-side reader for queue-mode transport.
pub struct QueueConsumer {
    queue: Arc<EventQueue>,
}

impl QueueConsumer {
    pub fn new(queue: Arc<EventQueue>) -> Self {
        Self { queue }
    }

    /// Poll for the next event, returning `None` on a short timeout so
    /// the caller can check a cancellation token and loop.
    pub async fn next(&self) -> Option<ProgressEvent> {
        self.queue.recv_timeout(Duration::from_millis(250)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sequence_numbers_strictly_increase_across_emits() {
        let queue = Arc::new(EventQueue::new(64));
        let bus = ProgressBus::new(TransportSink::Queue(queue.clone()));

        for i in 0..20 {
            bus.emit(EventPayload::LogEntry {
                agent: "scout".into(),
                message: format!("step {i}"),
                level: "info".into(),
            });
        }

        let consumer = QueueConsumer::new(queue);
        let mut last_seq = 0u64;
        let mut last_ts = None;
        for _ in 0..20 {
            let event = consumer.next().await.expect("event expected");
            assert!(event.seq > last_seq, "seq must strictly increase");
            last_seq = event.seq;
            if let Some(prev) = last_ts {
                assert!(event.timestamp >= prev, "timestamps must be non-decreasing");
            }
            last_ts = Some(event.timestamp);
        }
    }

    #[test]
    fn findings_batch_emitted_once_buffer_is_full() {
        let queue = Arc::new(EventQueue::new(64));
        let bus = ProgressBus::new(TransportSink::Queue(queue.clone()));
        for i in 0..5 {
            bus.emit_finding(serde_json::json!({ "i": i }));
        }
        assert_eq!(queue.len(), 1, "5 findings at default batch size 5 should flush exactly once");
    }
}
