//! Dual-mode transport: an in-process bounded queue, and a line-delimited
//! stdout codec for the subprocess boundary.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tracing::warn;

use crate::event::{ProgressEvent, STDOUT_SENTINEL};

/// Bounded FIFO shared between a producer (the orchestrator) and a
/// consumer (the runner). On overflow the oldest event is discarded in
/// favor of the incoming one; discards are counted and logged.
pub struct EventQueue {
    capacity: usize,
    buffer: Mutex<VecDeque<ProgressEvent>>,
    notify: Notify,
    discarded: AtomicU64,
}

impl EventQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
            notify: Notify::new(),
            discarded: AtomicU64::new(0),
        }
    }

    /// Offer an event with cooperative backpressure: if the queue is at
    /// capacity the oldest entry is dropped to make room.
    pub fn offer(&self, event: ProgressEvent) {
        let mut buf = self.buffer.lock();
        if buf.len() >= self.capacity {
            buf.pop_front();
            let total = self.discarded.fetch_add(1, Ordering::Relaxed) + 1;
            warn!(discarded_total = total, "progress queue full, discarding oldest event");
        }
        buf.push_back(event);
        drop(buf);
        self.notify.notify_one();
    }

    /// Dequeue with a short timeout, returning `None` on timeout so the
    /// caller can check its cancellation signal and loop.
    pub async fn recv_timeout(&self, timeout: Duration) -> Option<ProgressEvent> {
        if let Some(event) = self.buffer.lock().pop_front() {
            return Some(event);
        }
        let wait = tokio::time::timeout(timeout, self.notify.notified()).await;
        if wait.is_err() {
            return None;
        }
        self.buffer.lock().pop_front()
    }

    /// Non-blocking pop, for callers that already know there's no more
    /// producer activity to wait on (e.g. draining after a run completes).
    pub fn try_recv(&self) -> Option<ProgressEvent> {
        self.buffer.lock().pop_front()
    }

    pub fn discarded_count(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Encodes/decodes the stdout wire format: one event per line, prefixed
/// with `##PROGRESS:` followed by compact JSON; any other line is a
/// diagnostic line preserved verbatim by the consumer.
pub struct StdoutCodec;

impl StdoutCodec {
    pub fn encode(event: &ProgressEvent) -> anyhow::Result<String> {
        let json = serde_json::to_string(event)?;
        Ok(format!("{STDOUT_SENTINEL}{json}"))
    }

    /// Returns `Some(event)` if the line is a well-formed progress marker
    /// line, `None` if it's a diagnostic line to be preserved verbatim.
    pub fn decode_line(line: &str) -> Option<ProgressEvent> {
        let payload = line.strip_prefix(STDOUT_SENTINEL)?;
        serde_json::from_str(payload).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventPayload;
    use std::time::Duration;

    #[tokio::test]
    async fn queue_discards_oldest_on_overflow() {
        let queue = EventQueue::new(2);
        queue.offer(ProgressEvent::new(1, EventPayload::Heartbeat));
        queue.offer(ProgressEvent::new(2, EventPayload::Heartbeat));
        queue.offer(ProgressEvent::new(3, EventPayload::Heartbeat));

        assert_eq!(queue.discarded_count(), 1);
        let first = queue.recv_timeout(Duration::from_millis(50)).await.unwrap();
        assert_eq!(first.seq, 2, "oldest (seq=1) should have been discarded");
    }

    #[tokio::test]
    async fn recv_timeout_returns_none_when_empty() {
        let queue = EventQueue::new(4);
        let result = queue.recv_timeout(Duration::from_millis(20)).await;
        assert!(result.is_none());
    }

    #[test]
    fn stdout_codec_round_trips() {
        let event = ProgressEvent::new(7, EventPayload::Heartbeat);
        let line = StdoutCodec::encode(&event).unwrap();
        assert!(line.starts_with(STDOUT_SENTINEL));
        let decoded = StdoutCodec::decode_line(&line).unwrap();
        assert_eq!(decoded.seq, 7);
    }

    #[test]
    fn non_marker_lines_decode_to_none() {
        assert!(StdoutCodec::decode_line("plain diagnostic output").is_none());
    }
}
