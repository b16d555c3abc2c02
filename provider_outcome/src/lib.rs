//! Success-or-failure values with railway-style composition.
//!
//! This crate defines [`Outcome`], a value that is either a success carrying
//! a payload or a failure carrying an error, and [`VoidOutcome`], its sibling
//! for operations that succeed without data. Producers return outcomes
//! instead of panicking; consumers branch on them with `match`, the
//! [`Outcome::match_with`] family, or chain them with [`Outcome::map`] and
//! [`Outcome::bind`], which stop at the first failure.
//!
//! Failures carry a [`ProviderError`] by default. Reading the wrong branch
//! through [`Outcome::value`] or [`Outcome::error`] is a bug in the caller
//! and panics with an [`OutcomeStateError`]; that signal never travels inside
//! an outcome.
//!
//! ```
//! use provider_outcome::{Outcome, ProviderError};
//!
//! let limit = ProviderError::invalid_input("amount.negative", "amount must be positive");
//! let double_positive = |x: i32| {
//!     if x > 0 {
//!         Outcome::success(x * 2)
//!     } else {
//!         Outcome::failure(limit.clone())
//!     }
//! };
//!
//! let chained = Outcome::success(10)
//!     .bind(double_positive)
//!     .bind(|y| Outcome::success(y + 1));
//! assert_eq!(chained, Outcome::Success(21));
//! ```

mod error;
mod outcome;
mod result_ext;
#[cfg(feature = "tracing")]
mod trace;
mod void;

pub use error::{OutcomeStateError, ProviderError, ProviderErrorKind};
pub use outcome::Outcome;
pub use result_ext::{OutcomeResultExt, VoidResultExt};
#[cfg(feature = "tracing")]
pub use trace::{TraceCode, TraceOutcome};
pub use void::VoidOutcome;
