//! Token-bucket rate limiter for progress event emission"; grounded on
//! `examples/original_source/veritas/core/progress/rate_limiter.py`).

use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde::Serialize;

use crate::event::{Priority, ProgressEvent};

#[derive(Debug, Clone, Copy)]
pub struct RateLimiterConfig {
    pub burst: u32,
    pub max_rate: f64,
    pub max_queue_size: usize,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self { burst: 10, max_rate: 5.0, max_queue_size: 100 }
    }
}

#[derive(Debug, Clone)]
struct QueuedEvent {
    priority: Priority,
    event: ProgressEvent,
    queued_at: Instant,
}

struct Inner {
    tokens: f64,
    last_refill: Instant,
    queue: Vec<QueuedEvent>,
    dropped_count: u64,
}

/// What `acquire` decided for a given event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// A token was available; the event is handed back for immediate
    /// delivery.
    Emit(ProgressEvent),
    /// No token available; the event was queued (or, in the rare
    /// overflow-and-lower-priority case, dropped).
    Queued,
    Dropped,
}

#[derive(Debug, Clone, Serialize)]
pub struct RateLimiterStats {
    pub tokens_remaining: f64,
    pub tokens_capacity: u32,
    pub queue_size: usize,
    pub max_queue_size: usize,
    pub dropped_events: u64,
    pub max_rate: f64,
}

/// Throttles progress event emission to `max_rate` events/sec with a
/// `burst` allowance, queuing overflow by priority.
pub struct RateLimiter {
    config: RateLimiterConfig,
    inner: Mutex<Inner>,
}

impl RateLimiter {
    pub fn new(config: RateLimiterConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(Inner {
                tokens: config.burst as f64,
                last_refill: Instant::now(),
                queue: Vec::new(),
                dropped_count: 0,
            }),
        }
    }

    fn refill(inner: &mut Inner, config: &RateLimiterConfig) {
        let now = Instant::now();
        let elapsed = now.duration_since(inner.last_refill).as_secs_f64();
        inner.last_refill = now;
        inner.tokens = (inner.tokens + elapsed * config.max_rate).min(config.burst as f64);
    }

    /// Try to acquire a token for `event`. Returns `Emit` if a token was
    /// available, `Queued` if it was buffered for later, or `Dropped` if
    /// the queue was full and lower priority than the incoming event.
    pub fn acquire(&self, event: ProgressEvent) -> AcquireOutcome {
        let mut inner = self.inner.lock();
        Self::refill(&mut inner, &self.config);

        if inner.tokens >= 1.0 {
            inner.tokens -= 1.0;
            return AcquireOutcome::Emit(event);
        }

        let priority = event.priority;
        let queued = QueuedEvent { priority, event, queued_at: Instant::now() };

        if inner.queue.len() < self.config.max_queue_size {
            inner.queue.push(queued);
            return AcquireOutcome::Queued;
        }

        // Queue is full: find the numerically largest (lowest-priority)
        // queued element. CRITICAL must never be silently dropped, so it
        // always makes room even against an equally-critical incumbent.
        let worst_idx = inner
            .queue
            .iter()
            .enumerate()
            .max_by_key(|(_, e)| e.priority as u8)
            .map(|(i, _)| i)
            .expect("queue is non-empty here");
        let worst_priority = inner.queue[worst_idx].priority;

        if priority < worst_priority || priority == Priority::Critical {
            inner.queue.remove(worst_idx);
            inner.queue.push(queued);
            AcquireOutcome::Queued
        } else {
            inner.dropped_count += 1;
            AcquireOutcome::Dropped
        }
    }

    /// Pop the next queued event if a token is available, refilling first.
    /// Callers typically call this on a short poll interval.
    pub fn try_dequeue(&self) -> Option<ProgressEvent> {
        let mut inner = self.inner.lock();
        Self::refill(&mut inner, &self.config);

        if inner.queue.is_empty() || inner.tokens < 1.0 {
            return None;
        }

        let best_idx = inner
            .queue
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| e.priority as u8)
            .map(|(i, _)| i)?;
        inner.tokens -= 1.0;
        Some(inner.queue.remove(best_idx).event)
    }

    /// Async convenience wrapper used by the consumer loop: waits a short
    /// interval for token refill before attempting a dequeue.
    pub async fn dequeue_with_wait(&self) -> Option<ProgressEvent> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        self.try_dequeue()
    }

    pub fn stats(&self) -> RateLimiterStats {
        let inner = self.inner.lock();
        RateLimiterStats {
            tokens_remaining: (inner.tokens * 100.0).round() / 100.0,
            tokens_capacity: self.config.burst,
            queue_size: inner.queue.len(),
            max_queue_size: self.config.max_queue_size,
            dropped_events: inner.dropped_count,
            max_rate: self.config.max_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventPayload;

    fn ev(seq: u64, priority: Priority) -> ProgressEvent {
        let mut e = ProgressEvent::new(seq, EventPayload::Heartbeat);
        e.priority = priority;
        e
    }

    fn is_emit(outcome: &AcquireOutcome) -> bool {
        matches!(outcome, AcquireOutcome::Emit(_))
    }

    #[test]
    fn burst_capacity_emits_immediately() {
        let limiter = RateLimiter::new(RateLimiterConfig { burst: 2, max_rate: 0.0, max_queue_size: 2 });
        assert!(is_emit(&limiter.acquire(ev(1, Priority::Medium))));
        assert!(is_emit(&limiter.acquire(ev(2, Priority::Medium))));
    }

    #[test]
    fn s4_rate_limiter_eviction_scenario() {
        // burst=2, max_rate=0, max_queue_size=2; priorities
        // [MEDIUM, MEDIUM, LOW, CRITICAL].
        let limiter = RateLimiter::new(RateLimiterConfig { burst: 2, max_rate: 0.0, max_queue_size: 2 });

        assert!(is_emit(&limiter.acquire(ev(1, Priority::Medium))));
        assert!(is_emit(&limiter.acquire(ev(2, Priority::Medium))));
        assert_eq!(limiter.acquire(ev(3, Priority::Low)), AcquireOutcome::Queued);
        // queue: [LOW]; now queue a second MEDIUM to fill it to capacity 2
        assert_eq!(limiter.acquire(ev(4, Priority::Medium)), AcquireOutcome::Queued);
        // queue is full [LOW, MEDIUM]; CRITICAL must displace the worst entry (LOW)
        assert_eq!(limiter.acquire(ev(5, Priority::Critical)), AcquireOutcome::Queued);

        let stats = limiter.stats();
        assert_eq!(stats.dropped_events, 0, "no CRITICAL event may ever be dropped");
    }

    #[test]
    fn lower_priority_incoming_is_dropped_when_queue_full_of_higher_priority() {
        let limiter = RateLimiter::new(RateLimiterConfig { burst: 0, max_rate: 0.0, max_queue_size: 1 });
        assert_eq!(limiter.acquire(ev(1, Priority::High)), AcquireOutcome::Queued);
        // incoming LOW (numerically larger / lower priority) can't evict a HIGH entry
        assert_eq!(limiter.acquire(ev(2, Priority::Low)), AcquireOutcome::Dropped);
        assert_eq!(limiter.stats().dropped_events, 1);
    }

    #[test]
    fn critical_always_makes_room_even_against_critical_incumbent() {
        let limiter = RateLimiter::new(RateLimiterConfig { burst: 0, max_rate: 0.0, max_queue_size: 1 });
        assert_eq!(limiter.acquire(ev(1, Priority::Critical)), AcquireOutcome::Queued);
        assert_eq!(limiter.acquire(ev(2, Priority::Critical)), AcquireOutcome::Queued);
        assert_eq!(limiter.stats().dropped_events, 0);
    }
}
