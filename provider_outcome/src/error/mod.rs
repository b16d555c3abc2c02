//! Error payloads carried by failed outcomes and the contract-violation signal
//! raised when an outcome is read from the wrong branch.

mod constructors;
mod conversions;
mod state;
mod types;

pub use state::OutcomeStateError;
pub use types::{ProviderError, ProviderErrorKind};
