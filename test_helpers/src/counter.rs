//! Thread-safe invocation counters.
//!
//! Closures handed to combinators capture a [`CallCounter`] and call
//! [`CallCounter::record`]; the test then asserts how often they ran.
//!
//! # Examples
//!
//! ```
//! use provider_outcome_test_helpers::counter::CallCounter;
//!
//! let counter = CallCounter::new();
//! let bump = || counter.record();
//! bump();
//! counter.assert_called_once("bump");
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared invocation count; clones observe the same total.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one invocation.
    pub fn record(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of invocations recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Asserts that nothing was recorded.
    ///
    /// # Panics
    ///
    /// Panics when `what` ran at least once.
    #[track_caller]
    pub fn assert_not_called(&self, what: &str) {
        let count = self.count();
        assert_eq!(count, 0, "{what} must not run, but ran {count} time(s)");
    }

    /// Asserts that exactly one invocation was recorded.
    ///
    /// # Panics
    ///
    /// Panics when `what` ran zero or several times.
    #[track_caller]
    pub fn assert_called_once(&self, what: &str) {
        let count = self.count();
        assert_eq!(count, 1, "{what} must run exactly once, but ran {count} time(s)");
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::CallCounter;

    #[test]
    fn clones_share_the_total() {
        let counter = CallCounter::new();
        let clone = counter.clone();
        clone.record();
        counter.record();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn counts_across_threads() {
        let counter = CallCounter::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let worker = counter.clone();
                thread::spawn(move || worker.record())
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker thread panicked");
        }
        assert_eq!(counter.count(), 4);
    }

    #[test]
    #[should_panic(expected = "must not run")]
    fn assert_not_called_rejects_recorded_calls() {
        let counter = CallCounter::new();
        counter.record();
        counter.assert_not_called("step");
    }
}
