//! Trait-based conversions from external error types into `ProviderError`.

use std::io;

use super::{ProviderError, ProviderErrorKind};

/// Code attached to errors converted from [`std::io::Error`].
const IO_CODE: &str = "io";

/// Convert platform I/O failures so producers wrapping system calls can use
/// [`crate::OutcomeResultExt::into_outcome`].
impl From<io::Error> for ProviderError {
    fn from(e: io::Error) -> Self {
        let kind = match e.kind() {
            io::ErrorKind::NotFound => ProviderErrorKind::NotFound,
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => {
                ProviderErrorKind::InvalidInput
            }
            io::ErrorKind::Unsupported => ProviderErrorKind::Unsupported,
            _ => ProviderErrorKind::Unavailable,
        };
        Self::new(kind, IO_CODE, e.to_string())
    }
}
