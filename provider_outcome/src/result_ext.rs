//! Extensions for lifting `Result`s into outcomes concisely.
//!
//! These helpers replace `Outcome::from(result.map_err(ProviderError::from))`
//! at the boundary where a producer wraps a fallible library or platform call.
//!
//! - Use [`OutcomeResultExt::into_outcome`] for results whose error type
//!   implements `Into<ProviderError>` (e.g., `std::io::Error`).
//! - Use [`VoidResultExt::into_void_outcome`] for `Result<(), E>`.
//!
//! # Examples
//!
//! ```
//! use provider_outcome::{Outcome, OutcomeResultExt, ProviderErrorKind};
//!
//! fn read_motd(path: &str) -> Outcome<String> {
//!     std::fs::read_to_string(path).into_outcome()
//! }
//!
//! let missing = read_motd("/definitely/not/here");
//! assert_eq!(missing.error().kind(), ProviderErrorKind::NotFound);
//! ```

use crate::{Outcome, ProviderError, VoidOutcome};

/// Generic extension for lifting any `Result<T, E>` with
/// `E: Into<ProviderError>` into an [`Outcome<T>`].
pub trait OutcomeResultExt<T, E> {
    /// Convert `Result<T, E>` into `Outcome<T>` using `Into<ProviderError>`.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> OutcomeResultExt<T, E> for Result<T, E>
where
    E: Into<ProviderError>,
{
    fn into_outcome(self) -> Outcome<T> {
        self.map_err(Into::<ProviderError>::into).into()
    }
}

/// Extension lifting `Result<(), E>` into a [`VoidOutcome`].
pub trait VoidResultExt<E> {
    /// Convert `Result<(), E>` into `VoidOutcome` using `Into<ProviderError>`.
    fn into_void_outcome(self) -> VoidOutcome;
}

impl<E> VoidResultExt<E> for Result<(), E>
where
    E: Into<ProviderError>,
{
    fn into_void_outcome(self) -> VoidOutcome {
        self.map_err(Into::<ProviderError>::into).into()
    }
}
