//! Success-or-failure for operations that produce no value.
//!
//! [`VoidOutcome`] follows the same rules as [`Outcome`]: the variant is fixed
//! at construction and only the failure branch carries a payload. Its
//! combinators delegate to `Outcome<(), E>` so both types share one set of
//! short-circuit semantics.

use std::fmt;

use crate::{Outcome, OutcomeStateError, ProviderError};

/// Completion status of an operation without a success payload.
///
/// # Examples
///
/// ```
/// use provider_outcome::{ProviderError, VoidOutcome};
///
/// fn ensure_non_empty(raw: &str) -> VoidOutcome {
///     if raw.is_empty() {
///         ProviderError::invalid_input("input.empty", "input must not be empty").into()
///     } else {
///         VoidOutcome::success()
///     }
/// }
///
/// let greeting = ensure_non_empty("hi").map(|| "ready");
/// assert_eq!(*greeting.value(), "ready");
/// assert!(ensure_non_empty("").map(|| "ready").is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "an outcome may be a failure which should be handled"]
pub enum VoidOutcome<E = ProviderError> {
    /// The operation completed.
    Success,
    /// The operation failed with an error.
    Failure(E),
}

impl<E> VoidOutcome<E> {
    /// A completed operation.
    pub const fn success() -> Self {
        Self::Success
    }

    /// A failed operation.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` for a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` for a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the held error, or report that the outcome is a success.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeStateError::ErrorOfSuccess`] when called on a success.
    pub const fn try_error(&self) -> Result<&E, OutcomeStateError> {
        match self {
            Self::Success => Err(OutcomeStateError::ErrorOfSuccess),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Borrow the held error.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeStateError::ErrorOfSuccess`] when the outcome is a
    /// success.
    #[must_use]
    #[track_caller]
    pub fn error(&self) -> &E {
        match self.try_error() {
            Ok(error) => error,
            Err(err) => panic!("{err}"),
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
            Self::Success => panic!("{}", OutcomeStateError::ErrorOfSuccess),
            Self::Failure(error) => error,
        }
    }

    /// The error as an [`Option`].
    #[must_use]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Success => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consume the outcome, running `on_success` or `on_failure`.
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce() -> R,
        on_failure: impl FnOnce(E) -> R,
    ) -> R {
        Outcome::<(), E>::from(self).match_with(|()| on_success(), on_failure)
    }

    /// Borrowing form of [`VoidOutcome::match_with`].
    pub fn match_ref<'a, R>(
        &'a self,
        on_success: impl FnOnce() -> R,
        on_failure: impl FnOnce(&'a E) -> R,
    ) -> R {
        match self {
            Self::Success => on_success(),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Run exactly one of two side-effecting handlers.
    pub fn handle(&self, on_success: impl FnOnce(), on_failure: impl FnOnce(&E)) {
        self.match_ref(on_success, on_failure);
    }

    /// Produce a value after a success; a failure is forwarded and
    /// `produce` is not called.
    pub fn map<T>(self, produce: impl FnOnce() -> T) -> Outcome<T, E> {
        Outcome::<(), E>::from(self).map(|()| produce())
    }

    /// Run a further fallible step after a success; a failure is forwarded
    /// and `next` is not called.
    pub fn bind<T>(self, next: impl FnOnce() -> Outcome<T, E>) -> Outcome<T, E> {
        Outcome::<(), E>::from(self).bind(|()| next())
    }

    /// Sequence another operation without a payload.
    pub fn and_then(self, next: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Success => next(),
            Self::Failure(error) => Self::Failure(error),
        }
    }

    /// Transform the error of a failure.
    pub fn map_error<F>(self, transform: impl FnOnce(E) -> F) -> VoidOutcome<F> {
        Outcome::<(), E>::from(self).map_error(transform).into()
    }

    /// Call `observer` with the error of a failure and return `self`.
    pub fn inspect_error(self, observer: impl FnOnce(&E)) -> Self {
        if let Self::Failure(error) = &self {
            observer(error);
        }
        self
    }

    /// Convert into a [`Result`] so `?` can propagate the failure.
    ///
    /// # Errors
    ///
    /// Returns the held error for a failure.
    pub fn into_result(self) -> Result<(), E> {
        self.into()
    }
}

impl<E> From<Outcome<(), E>> for VoidOutcome<E> {
    fn from(outcome: Outcome<(), E>) -> Self {
        match outcome {
            Outcome::Success(()) => Self::Success,
            Outcome::Failure(error) => Self::Failure(error),
        }
    }
}

impl<E> From<VoidOutcome<E>> for Outcome<(), E> {
    fn from(outcome: VoidOutcome<E>) -> Self {
        match outcome {
            VoidOutcome::Success => Self::Success(()),
            VoidOutcome::Failure(error) => Self::Failure(error),
        }
    }
}

impl<E> From<Result<(), E>> for VoidOutcome<E> {
    fn from(result: Result<(), E>) -> Self {
        Outcome::<(), E>::from(result).into()
    }
}

impl<E> From<VoidOutcome<E>> for Result<(), E> {
    fn from(outcome: VoidOutcome<E>) -> Self {
        Outcome::<(), E>::from(outcome).into_result()
    }
}

impl From<ProviderError> for VoidOutcome {
    fn from(error: ProviderError) -> Self {
        Self::Failure(error)
    }
}

/// Succeeds when every item succeeds; otherwise the first failure, with no
/// further items pulled.
impl<E> FromIterator<Self> for VoidOutcome<E> {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::<(), E>::from)
            .collect::<Outcome<(), E>>()
            .into()
    }
}

impl<E: fmt::Display> fmt::Display for VoidOutcome<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}
