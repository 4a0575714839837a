//! Card exposure error types.

use fluxo_shared::types::AccountId;
use thiserror::Error;

/// Errors that can occur while computing card exposure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExposureError {
    /// The account is not a credit card.
    #[error("Account {0} is not a credit card")]
    NotACard(AccountId),
}

impl ExposureError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotACard(_) => "NOT_A_CARD",
        }
    }
}
