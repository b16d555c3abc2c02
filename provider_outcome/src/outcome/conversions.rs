//! Conversions between `Outcome`, `Result` and bare errors, plus rendering.

use std::fmt;

use super::Outcome;
use crate::ProviderError;

impl<T, E> Outcome<T, E> {
    /// Convert into a [`Result`] so `?` can propagate the failure.
    ///
    /// # Errors
    ///
    /// Returns the held error for a failure.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// Lift a bare error into a failure, so producers can `return err.into()`.
impl<T> From<ProviderError> for Outcome<T> {
    fn from(error: ProviderError) -> Self {
        Self::Failure(error)
    }
}

/// Collect successes into `C`, stopping at the first failure.
///
/// Items after the first failure are not pulled from the iterator.
///
/// # Examples
///
/// ```
/// use provider_outcome::{Outcome, ProviderError};
/// let all: Outcome<Vec<u8>> = vec![Outcome::success(1), Outcome::success(2)]
///     .into_iter()
///     .collect();
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
/// ```
impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<C, E>>()
            .into()
    }
}

impl<T, E> fmt::Display for Outcome<T, E>
where
    T: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}
