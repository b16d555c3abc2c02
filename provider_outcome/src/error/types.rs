//! Default error payload for producers that return outcomes.

use std::fmt;

use thiserror::Error;

/// Coarse classification of a [`ProviderError`].
///
/// Outcomes never look at the kind; it exists so callers can branch on a
/// failure without parsing its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum ProviderErrorKind {
    /// The supplied input was rejected by the producer.
    InvalidInput,
    /// The requested item does not exist.
    NotFound,
    /// The operation is not supported on this platform or configuration.
    Unsupported,
    /// A backing service or resource could not be reached.
    Unavailable,
    /// The producer failed for a reason outside the caller's control.
    Internal,
}

impl ProviderErrorKind {
    /// Snake-case name used in logs and serialised payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
            Self::Unsupported => "unsupported",
            Self::Unavailable => "unavailable",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error value stored in the failure branch of an outcome.
///
/// The `code` is the stable identity of the failure (for example
/// `"phone.invalid_number"`); the message is for humans and may change.
///
/// # Examples
///
/// ```
/// use provider_outcome::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::not_found("user.missing", "no user with id 7");
/// assert_eq!(err.kind(), ProviderErrorKind::NotFound);
/// assert_eq!(err.to_string(), "user.missing: no user with id 7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{code}: {message}")]
pub struct ProviderError {
    pub(super) kind: ProviderErrorKind,
    pub(super) code: String,
    pub(super) message: String,
}

impl ProviderError {
    /// Classification of the failure.
    #[must_use]
    pub const fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    /// Stable identifier of the failure.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
