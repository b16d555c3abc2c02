//! Generic success-or-failure container.
//!
//! [`Outcome`] is a two-variant enum: a success carries the produced value,
//! a failure carries the error handed over by the producer. The variant is
//! fixed at construction; nothing in this module mutates an outcome after it
//! has been built.
//!
//! Consumers should prefer destructuring the enum or the combinators
//! ([`Outcome::map`], [`Outcome::bind`], [`Outcome::match_with`], ...) over
//! the panicking accessors [`Outcome::value`] and [`Outcome::error`], which
//! treat a wrong-branch read as a bug in the caller.

mod combinators;
mod conversions;

use crate::{OutcomeStateError, ProviderError};

/// Either a successful value or the error that prevented it.
///
/// # Examples
///
/// ```
/// use provider_outcome::{Outcome, ProviderError};
///
/// fn parse_port(raw: &str) -> Outcome<u16> {
///     match raw.parse() {
///         Ok(port) => Outcome::success(port),
///         Err(_) => Outcome::failure(ProviderError::invalid_input("port", "not a port")),
///     }
/// }
///
/// assert_eq!(parse_port("8080").map(|p| p + 1), Outcome::Success(8081));
/// assert!(parse_port("http").is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "an outcome may be a failure which should be handled"]
pub enum Outcome<T, E = ProviderError> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wrap `value` as a success.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap `error` as a failure.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` for a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the held value, or report that the outcome is a failure.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeStateError::ValueOfFailure`] when called on a failure.
    pub const fn try_value(&self) -> Result<&T, OutcomeStateError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(OutcomeStateError::ValueOfFailure),
        }
    }

    /// Borrow the held error, or report that the outcome is a success.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeStateError::ErrorOfSuccess`] when called on a success.
    pub const fn try_error(&self) -> Result<&E, OutcomeStateError> {
        match self {
            Self::Success(_) => Err(OutcomeStateError::ErrorOfSuccess),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Borrow the held value.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeStateError::ValueOfFailure`] when the outcome is a
    /// failure. Check [`Outcome::is_success`] first, or use
    /// [`Outcome::try_value`].
    ///
    /// ```should_panic
    /// use provider_outcome::{Outcome, ProviderError};
    /// let failed: Outcome<u8> = Outcome::failure(ProviderError::internal("x", "y"));
    /// let _ = failed.value();
    /// ```
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Borrow the held error.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeStateError::ErrorOfSuccess`] when the outcome is a
    /// success. Check [`Outcome::is_failure`] first, or use
    /// [`Outcome::try_error`].
    #[must_use]
    #[track_caller]
    pub fn error(&self) -> &E {
        match self.try_error() {
            Ok(error) => error,
            Err(err) => panic!("{err}"),
        }
    }

    /// Take ownership of the held value.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeStateError::ValueOfFailure`] when the outcome is a
    /// failure.
    #[must_use]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", OutcomeStateError::ValueOfFailure),
        }
    }

    /// Take ownership of the held error.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeStateError::ErrorOfSuccess`] when the outcome is a
    /// success.
    #[must_use]
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Self::Success(_) => panic!("{}", OutcomeStateError::ErrorOfSuccess),
            Self::Failure(error) => error,
        }
    }

    /// Borrow both branches, producing an `Outcome<&T, &E>`.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// The value as an [`Option`], discarding any error.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The error as an [`Option`], discarding any value.
    #[must_use]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }
}
