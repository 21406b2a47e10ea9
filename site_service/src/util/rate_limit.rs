//! In-process sliding-window guard for outbound contact email.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Sliding-window request limiter.
///
/// Entries older than the window are dropped, the remaining count is compared
/// against the limit, and the request is recorded only when allowed. The guard
/// is per-process; it fronts the provider, it does not replace provider quotas.
#[derive(Debug)]
pub struct SlidingWindow {
    max_requests: u32,
    window: Duration,
    log: Mutex<VecDeque<Instant>>,
}

impl SlidingWindow {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            log: Mutex::new(VecDeque::new()),
        }
    }

    /// Returns `true` when the request is allowed, recording it in the window.
    pub fn check_and_record(&self) -> bool {
        let now = Instant::now();
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);

        while log
            .front()
            .is_some_and(|entry| now.duration_since(*entry) >= self.window)
        {
            log.pop_front();
        }

        if log.len() >= self.max_requests as usize {
            return false;
        }

        log.push_back(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_blocks_everything() {
        let limiter = SlidingWindow::new(0, Duration::from_secs(60));
        assert!(!limiter.check_and_record());
    }

    #[test]
    fn test_requests_beyond_limit_are_denied() {
        let limiter = SlidingWindow::new(2, Duration::from_secs(60));
        assert!(limiter.check_and_record());
        assert!(limiter.check_and_record());
        assert!(!limiter.check_and_record());
    }

    #[test]
    fn test_denied_requests_are_not_recorded() {
        let limiter = SlidingWindow::new(1, Duration::from_secs(60));
        assert!(limiter.check_and_record());
        for _ in 0..10 {
            assert!(!limiter.check_and_record());
        }
        assert_eq!(limiter.log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_window_expiry_frees_capacity() {
        let limiter = SlidingWindow::new(1, Duration::from_millis(40));
        assert!(limiter.check_and_record());
        assert!(!limiter.check_and_record());

        std::thread::sleep(Duration::from_millis(50));
        assert!(limiter.check_and_record());
    }
}
