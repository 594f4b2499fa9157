//! Per-source dual-window (RPM + RPH) admission limiter.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

pub struct SourceRateLimiter {
    rpm_limit: Option<u32>,
    rph_limit: Option<u32>,
    timestamps: Mutex<Vec<Instant>>,
}

impl SourceRateLimiter {
    pub fn new(rpm_limit: Option<u32>, rph_limit: Option<u32>) -> Self {
        Self { rpm_limit, rph_limit, timestamps: Mutex::new(Vec::new()) }
    }

    fn prune(&self, timestamps: &mut Vec<Instant>) {
        let now = Instant::now();
        timestamps.retain(|t| now.duration_since(*t) < Duration::from_secs(3600));
    }

    /// Admission is granted iff both the 60s and 3600s windows are under
    /// their configured limits (an unset limit never blocks). Does not
    /// itself consume budget — call `record_success` once the query this
    /// admission gated is confirmed successful.
    pub fn try_admit(&self) -> bool {
        let mut timestamps = self.timestamps.lock();
        self.prune(&mut timestamps);
        let now = Instant::now();

        let last_minute = timestamps.iter().filter(|t| now.duration_since(**t) < Duration::from_secs(60)).count();
        if let Some(rpm) = self.rpm_limit {
            if last_minute >= rpm as usize {
                return false;
            }
        }
        if let Some(rph) = self.rph_limit {
            if timestamps.len() >= rph as usize {
                return false;
            }
        }

        true
    }

    /// Records a timestamp against the budget. Only call once a query is
    /// known to have succeeded; failed calls must not consume budget.
    pub fn record_success(&self) {
        let mut timestamps = self.timestamps.lock();
        self.prune(&mut timestamps);
        timestamps.push(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denies_once_rpm_limit_reached() {
        let limiter = SourceRateLimiter::new(Some(2), None);
        assert!(limiter.try_admit());
        limiter.record_success();
        assert!(limiter.try_admit());
        limiter.record_success();
        assert!(!limiter.try_admit());
    }

    #[test]
    fn unset_limits_never_block() {
        let limiter = SourceRateLimiter::new(None, None);
        for _ in 0..50 {
            assert!(limiter.try_admit());
            limiter.record_success();
        }
    }

    #[test]
    fn rph_limit_is_independent_of_rpm() {
        let limiter = SourceRateLimiter::new(Some(1000), Some(1));
        assert!(limiter.try_admit());
        limiter.record_success();
        assert!(!limiter.try_admit());
    }

    #[test]
    fn a_failed_call_does_not_consume_budget() {
        let limiter = SourceRateLimiter::new(Some(1), None);
        assert!(limiter.try_admit());
        // query failed; caller must not call record_success()
        assert!(limiter.try_admit(), "budget should remain untouched after a failed attempt");
    }
}
