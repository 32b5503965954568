//! Normalized API error shape.
//!
//! Every failure of a backend request (transport failure, timeout,
//! non-2xx status, undecodable body) collapses into one [`ApiError`]
//! carrying a human-readable message, an HTTP status and a short code.

use std::fmt;

/// Status reported when the request never produced a response.
pub const NO_RESPONSE_STATUS: u16 = 500;

/// Code for a request that exceeded the client timeout.
pub const CODE_TIMEOUT: &str = "ECONNABORTED";
/// Code for a connection or transport failure.
pub const CODE_NETWORK: &str = "ERR_NETWORK";
/// Code for a 4xx response.
pub const CODE_BAD_REQUEST: &str = "ERR_BAD_REQUEST";
/// Code for a 5xx (or otherwise unexpected) response.
pub const CODE_BAD_RESPONSE: &str = "ERR_BAD_RESPONSE";
/// Code for a 2xx response whose body could not be decoded.
pub const CODE_DECODE: &str = "ERR_DECODE";
/// Code for a URL that could not be built.
pub const CODE_INVALID_URL: &str = "ERR_INVALID_URL";

/// Broad classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request could not reach the server.
    Network,
    /// The request exceeded the client timeout.
    Timeout,
    /// The server answered with a non-2xx status.
    Status,
    /// The server answered 2xx but the body was unusable.
    Decode,
}

/// A normalized request failure: `{message, status, code}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// Message surfaced verbatim in container state.
    pub message: String,
    /// HTTP status; [`NO_RESPONSE_STATUS`] when no response arrived.
    pub status: u16,
    /// Short machine-readable code.
    pub code: Option<String>,
    /// Classification used for logging and tests.
    pub kind: ApiErrorKind,
}

impl ApiError {
    /// The request exceeded `timeout_ms`.
    pub fn timeout(timeout_ms: u64) -> Self {
        Self {
            message: format!("timeout of {}ms exceeded", timeout_ms),
            status: NO_RESPONSE_STATUS,
            code: Some(CODE_TIMEOUT.to_string()),
            kind: ApiErrorKind::Timeout,
        }
    }

    /// The request never reached the server.
    pub fn network() -> Self {
        Self {
            message: "Network Error".to_string(),
            status: NO_RESPONSE_STATUS,
            code: Some(CODE_NETWORK.to_string()),
            kind: ApiErrorKind::Network,
        }
    }

    /// The request URL could not be used.
    pub fn invalid_url(detail: &str) -> Self {
        Self {
            message: format!("Invalid URL: {}", detail),
            status: NO_RESPONSE_STATUS,
            code: Some(CODE_INVALID_URL.to_string()),
            kind: ApiErrorKind::Network,
        }
    }

    /// The server answered with a non-2xx `status`.
    pub fn from_status(status: u16) -> Self {
        let code = if (400..500).contains(&status) {
            CODE_BAD_REQUEST
        } else {
            CODE_BAD_RESPONSE
        };
        Self {
            message: format!("Request failed with status code {}", status),
            status,
            code: Some(code.to_string()),
            kind: ApiErrorKind::Status,
        }
    }

    /// The server answered `status` but the body did not match the expected shape.
    pub fn decode(status: u16, detail: &str) -> Self {
        Self {
            message: format!("Invalid response body: {}", detail),
            status,
            code: Some(CODE_DECODE.to_string()),
            kind: ApiErrorKind::Decode,
        }
    }

    /// The request body could not be serialized.
    pub fn encode(detail: &str) -> Self {
        Self {
            message: format!("Invalid request body: {}", detail),
            status: NO_RESPONSE_STATUS,
            code: Some(CODE_BAD_REQUEST.to_string()),
            kind: ApiErrorKind::Decode,
        }
    }

    /// Whether this failure was an authentication rejection.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Status && self.status == 401
    }

    /// The error code, or an empty string when none is set.
    pub fn error_code(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }

    /// A friendlier message for banners that want more than the raw text.
    pub fn user_message(&self) -> String {
        match self.kind {
            ApiErrorKind::Network => {
                "Unable to reach the ViralForge API. Check that the backend is running.".to_string()
            }
            ApiErrorKind::Timeout => {
                "The ViralForge API did not answer in time. Please try again.".to_string()
            }
            ApiErrorKind::Decode => {
                "Received an invalid response from the server.".to_string()
            }
            ApiErrorKind::Status => match self.status {
                401 => "Authentication required. Please sign in again.".to_string(),
                403 => "Access denied.".to_string(),
                404 => "The requested resource was not found.".to_string(),
                429 => "Too many requests. Please wait a moment.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", self.status),
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_shape() {
        let err = ApiError::timeout(10_000);
        assert_eq!(err.message, "timeout of 10000ms exceeded");
        assert_eq!(err.status, 500);
        assert_eq!(err.error_code(), "ECONNABORTED");
    }

    #[test]
    fn test_network_shape() {
        let err = ApiError::network();
        assert_eq!(err.to_string(), "Network Error");
        assert_eq!(err.status, 500);
        assert_eq!(err.error_code(), "ERR_NETWORK");
    }

    #[test]
    fn test_status_codes() {
        let not_found = ApiError::from_status(404);
        assert_eq!(not_found.message, "Request failed with status code 404");
        assert_eq!(not_found.error_code(), "ERR_BAD_REQUEST");

        let server = ApiError::from_status(503);
        assert_eq!(server.status, 503);
        assert_eq!(server.error_code(), "ERR_BAD_RESPONSE");
    }

    #[test]
    fn test_is_unauthorized_only_for_401_status() {
        assert!(ApiError::from_status(401).is_unauthorized());
        assert!(!ApiError::from_status(403).is_unauthorized());
        assert!(!ApiError::network().is_unauthorized());
    }

    #[test]
    fn test_user_message_for_401() {
        assert_eq!(
            ApiError::from_status(401).user_message(),
            "Authentication required. Please sign in again."
        );
    }
}
