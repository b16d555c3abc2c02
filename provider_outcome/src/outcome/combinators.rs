//! Matching, mapping and sequencing for `Outcome`.
//!
//! Every combinator runs at most one caller closure, picked by the variant.
//! Failures pass through `map` and `bind` untouched.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Consume the outcome, running `on_success` or `on_failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use provider_outcome::Outcome;
    /// let rendered = Outcome::<u8, String>::success(3)
    ///     .match_with(|n| format!("got {n}"), |e| format!("failed: {e}"));
    /// assert_eq!(rendered, "got 3");
    /// ```
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(E) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Borrowing form of [`Outcome::match_with`].
    pub fn match_ref<'a, R>(
        &'a self,
        on_success: impl FnOnce(&'a T) -> R,
        on_failure: impl FnOnce(&'a E) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Run exactly one of two side-effecting handlers.
    pub fn handle(&self, on_success: impl FnOnce(&T), on_failure: impl FnOnce(&E)) {
        self.match_ref(on_success, on_failure);
    }

    /// Transform the value of a success; a failure is returned unchanged and
    /// `transform` is not called.
    ///
    /// Panics raised by `transform` propagate to the caller.
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the error of a failure; a success is returned unchanged.
    pub fn map_error<F>(self, transform: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(transform(error)),
        }
    }

    /// Sequence a further fallible step.
    ///
    /// A success hands its value to `next` and returns whatever `next`
    /// returns. A failure short-circuits: `next` is not called and the
    /// original error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use provider_outcome::{Outcome, ProviderError};
    ///
    /// let halve = |n: u32| {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure(ProviderError::invalid_input("odd", "cannot halve"))
    ///     }
    /// };
    /// assert_eq!(Outcome::success(8).bind(halve).bind(halve), Outcome::Success(2));
    /// assert!(Outcome::success(6).bind(halve).bind(halve).is_failure());
    /// ```
    pub fn bind<U>(self, next: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(value) => next(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// The held value, or `default` for a failure.
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// The held value, or the result of `fallback` applied to the error.
    ///
    /// `fallback` only runs for a failure.
    #[must_use]
    pub fn value_or_else(self, fallback: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    /// Call `observer` with the value of a success and return `self`.
    pub fn inspect(self, observer: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            observer(value);
        }
        self
    }

    /// Call `observer` with the error of a failure and return `self`.
    pub fn inspect_error(self, observer: impl FnOnce(&E)) -> Self {
        if let Self::Failure(error) = &self {
            observer(error);
        }
        self
    }
}
