//! Contract-violation signal for reading the wrong branch of an outcome.

use thiserror::Error;

/// Raised when a caller reads a payload without checking the discriminant.
///
/// This is never a domain failure: it means the calling code is wrong. The
/// panicking accessors (`value`, `error`) format this error as their panic
/// message; the `try_*` accessors return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum OutcomeStateError {
    /// A value was requested from a failed outcome.
    #[error("invalid outcome state: cannot read the value of a failed outcome")]
    ValueOfFailure,
    /// An error was requested from a successful outcome.
    #[error("invalid outcome state: cannot read the error of a successful outcome")]
    ErrorOfSuccess,
}
