//! Constructors for `ProviderError`.

use super::{ProviderError, ProviderErrorKind};

impl ProviderError {
    /// Build an error from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use provider_outcome::{ProviderError, ProviderErrorKind};
    /// let err = ProviderError::new(ProviderErrorKind::Internal, "db.pool", "pool exhausted");
    /// assert_eq!(err.code(), "db.pool");
    /// ```
    #[must_use]
    pub fn new(
        kind: ProviderErrorKind,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Construct a [`ProviderErrorKind::InvalidInput`] error.
    #[must_use]
    pub fn invalid_input(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidInput, code, message)
    }

    /// Construct a [`ProviderErrorKind::NotFound`] error.
    #[must_use]
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::NotFound, code, message)
    }

    /// Construct a [`ProviderErrorKind::Unsupported`] error.
    #[must_use]
    pub fn unsupported(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unsupported, code, message)
    }

    /// Construct a [`ProviderErrorKind::Unavailable`] error.
    #[must_use]
    pub fn unavailable(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unavailable, code, message)
    }

    /// Construct a [`ProviderErrorKind::Internal`] error.
    #[must_use]
    pub fn internal(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Internal, code, message)
    }
}
