//! API-specific error types
//!
//! Tagged error taxonomy produced exclusively by the API client. Display
//! strings are the user-facing text; structural detail (the decode failure
//! message, the raw transport error) stays in the variant payload for logs.

use thiserror::Error;

/// API operation errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connection, timeout)
    #[error("Network error. Please check your connection and try again.")]
    Network(String),

    /// Request body could not be serialized before sending
    #[error("Unable to prepare the request.")]
    InvalidRequest(String),

    /// Response body did not match the expected schema
    #[error("Unable to read the server response.")]
    Decoding(String),

    /// Server rejected the request (HTTP 400) with an optional reason
    #[error("{0}")]
    Validation(String),

    /// HTTP 401; the current credential is missing, invalid, or expired
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,

    /// HTTP 404
    #[error("The requested item could not be found.")]
    NotFound,

    /// Any other non-2xx status
    #[error("Server error ({status}).")]
    Server { status: u16, reason: Option<String> },
}

impl ApiError {
    /// Whether the caller should prompt for re-authentication
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Diagnostic detail for logging; never shown to the user
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Network(detail) | Self::InvalidRequest(detail) | Self::Decoding(detail) => {
                Some(detail)
            }
            Self::Server { reason, .. } => reason.as_deref(),
            Self::Validation(_) | Self::Unauthorized | Self::NotFound => None,
        }
    }
}
