//! Opt-in structured logging for outcomes.
//!
//! Combinators never log on their own. Producers that want a record of what
//! an operation returned call [`TraceOutcome::traced`] at the boundary.

use std::fmt;

use crate::{Outcome, ProviderError, VoidOutcome};

/// Records an outcome as a `tracing` event and hands it back unchanged.
pub trait TraceOutcome: Sized {
    /// Emit a `debug` event for a success or a `warn` event carrying the
    /// error for a failure, tagged with `operation`.
    ///
    /// # Examples
    ///
    /// ```
    /// use provider_outcome::{Outcome, ProviderError, TraceOutcome};
    ///
    /// let looked_up: Outcome<u32> =
    ///     Outcome::failure(ProviderError::not_found("user.missing", "no such user"));
    /// let looked_up = looked_up.traced("user_lookup");
    /// assert!(looked_up.is_failure());
    /// ```
    #[must_use = "tracing returns the outcome, which should still be handled"]
    fn traced(self, operation: &str) -> Self;
}

/// Error types that expose a stable code for log fields.
pub trait TraceCode {
    /// Identifier recorded in the `code` field of failure events.
    fn trace_code(&self) -> &str;
}

impl TraceCode for ProviderError {
    fn trace_code(&self) -> &str {
        self.code()
    }
}

fn record_failure<E>(operation: &str, error: &E)
where
    E: fmt::Display + TraceCode,
{
    tracing::warn!(operation, code = error.trace_code(), error = %error, "operation failed");
}

impl<T, E> TraceOutcome for Outcome<T, E>
where
    E: fmt::Display + TraceCode,
{
    fn traced(self, operation: &str) -> Self {
        self.handle(
            |_| tracing::debug!(operation, "operation succeeded"),
            |error| record_failure(operation, error),
        );
        self
    }
}

impl<E> TraceOutcome for VoidOutcome<E>
where
    E: fmt::Display + TraceCode,
{
    fn traced(self, operation: &str) -> Self {
        self.handle(
            || tracing::debug!(operation, "operation completed"),
            |error| record_failure(operation, error),
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use test_helpers::trace::capture_logs;

    use super::TraceOutcome;
    use crate::{Outcome, ProviderError, VoidOutcome};

    #[test]
    fn failure_is_logged_at_warn_with_code() {
        let logs = capture_logs(|| {
            let outcome: Outcome<u8> =
                Outcome::failure(ProviderError::not_found("user.missing", "no such user"));
            assert!(outcome.traced("user_lookup").is_failure());
        });
        assert!(logs.contains("WARN"), "logs: {logs}");
        assert!(logs.contains("operation failed"), "logs: {logs}");
        assert!(logs.contains("user.missing"), "logs: {logs}");
        assert!(logs.contains("user_lookup"), "logs: {logs}");
    }

    #[test]
    fn success_is_logged_at_debug() {
        let logs = capture_logs(|| {
            let outcome = VoidOutcome::<ProviderError>::success().traced("cache_flush");
            assert!(outcome.is_success());
        });
        assert!(logs.contains("DEBUG"), "logs: {logs}");
        assert!(logs.contains("operation completed"), "logs: {logs}");
        assert!(!logs.contains("WARN"), "logs: {logs}");
    }

    #[test]
    fn tracing_leaves_the_outcome_untouched() {
        let outcome: Outcome<&str> = Outcome::success("ready");
        assert_eq!(outcome.traced("noop"), Outcome::Success("ready"));
    }
}
