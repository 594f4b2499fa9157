//! Findings batching.

use parking_lot::Mutex;
use serde_json::Value;

const DEFAULT_BATCH_SIZE: usize = 5;

/// Buffers findings and flushes them as a single `findings_batch` event
/// once the buffer reaches capacity, or on an explicit/forced flush.
pub struct FindingsBatcher {
    batch_size: usize,
    buffer: Mutex<Vec<Value>>,
}

impl Default for FindingsBatcher {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

impl FindingsBatcher {
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size: batch_size.max(1), buffer: Mutex::new(Vec::new()) }
    }

    /// Add a finding. Returns `Some(batch)` if the buffer just reached
    /// capacity and should be flushed as a `findings_batch` event.
    pub fn push(&self, finding: Value) -> Option<Vec<Value>> {
        let mut buf = self.buffer.lock();
        buf.push(finding);
        if buf.len() >= self.batch_size {
            Some(std::mem::take(&mut buf))
        } else {
            None
        }
    }

    /// Force a partial flush (explicit flush request, or audit
    /// completion). Returns `None` if the buffer was already empty.
    pub fn flush(&self) -> Option<Vec<Value>> {
        let mut buf = self.buffer.lock();
        if buf.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut buf))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flushes_at_capacity() {
        let batcher = FindingsBatcher::new(2);
        assert!(batcher.push(Value::from(1)).is_none());
        let batch = batcher.push(Value::from(2)).expect("should flush at capacity");
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn explicit_flush_forces_partial_batch() {
        let batcher = FindingsBatcher::new(5);
        batcher.push(Value::from(1));
        let batch = batcher.flush().expect("partial flush should return buffered items");
        assert_eq!(batch.len(), 1);
        assert!(batcher.flush().is_none());
    }
}
