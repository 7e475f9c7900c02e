//! Domain error types.

use thiserror::Error;

/// Errors raised by the ROI domain.
///
/// Every failure at this layer is a caller-input error: the engine performs
/// no I/O, so there is nothing transient to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoiError {
    /// Input was rejected during validation.
    #[error("{0}")]
    InvalidInput(String),
}

impl RoiError {
    /// Creates an `InvalidInput` error from any message.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
