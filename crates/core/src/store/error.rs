//! Ledger store error types.

use thiserror::Error;

/// Errors a ledger store can report.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("Ledger store unavailable: {0}")]
    Unavailable(String),

    /// Stored data could not be decoded.
    #[error("Failed to decode ledger data: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading the backing source failed.
    #[error("Failed to read ledger data: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "STORE_UNAVAILABLE",
            Self::Decode(_) => "STORE_DECODE_ERROR",
            Self::Io(_) => "STORE_IO_ERROR",
        }
    }

    /// Returns true if retrying the query may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Io(_))
    }
}

impl From<StoreError> for fluxo_shared::AppError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}
