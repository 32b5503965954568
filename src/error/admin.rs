//! Top-level error type for dashboard operations.

use thiserror::Error;

use super::{ApiError, ValidationError};
use crate::traits::TokenStoreError;

/// Any failure a store operation can report.
///
/// `Display` yields the message stores keep in their error slot, so an
/// API failure surfaces exactly as the normalized [`ApiError`] message.
#[derive(Debug, Error)]
pub enum AdminError {
    /// A backend request failed.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// A settings patch was rejected.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The bearer token could not be read or written.
    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),

    /// A simulated collaborator was told to fail.
    #[error("{0}")]
    Unavailable(String),
}

impl AdminError {
    /// The underlying API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            AdminError::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Result alias for dashboard operations.
pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_is_verbatim() {
        let err: AdminError = ApiError::from_status(500).into();
        assert_eq!(err.to_string(), "Request failed with status code 500");
        assert_eq!(err.as_api().map(|e| e.status), Some(500));
    }

    #[test]
    fn test_validation_error_converts() {
        let err: AdminError = ValidationError::Empty { field: "language" }.into();
        assert_eq!(err.to_string(), "language must not be empty");
        assert!(err.as_api().is_none());
    }
}
