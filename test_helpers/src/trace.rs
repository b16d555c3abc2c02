//! Capture `tracing` output emitted while a closure runs.
//!
//! The subscriber is installed for the current thread only, so tests that
//! capture logs can run in parallel.
//!
//! # Examples
//!
//! ```
//! use provider_outcome_test_helpers::trace::capture_logs;
//!
//! let logs = capture_logs(|| tracing::warn!(code = "x", "something failed"));
//! assert!(logs.contains("something failed"));
//! ```

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Level;

/// In-memory sink handed to the formatting subscriber.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a thread-local subscriber at `DEBUG` and returns everything
/// it logged as plain text.
#[must_use]
pub fn capture_logs<F>(f: F) -> String
where
    F: FnOnce(),
{
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
