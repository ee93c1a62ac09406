//! Normalized request failures.
//!
//! ERROR HANDLING
//! ==============
//! Every failed call surfaces as exactly one `ApiError`, and each variant
//! answers `status()` and `message()` so pages can render it uniformly.
//! A `status()` of `0` means no HTTP response was obtained.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::token::TokenError;

pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required. Please log in.";
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Raised before any I/O when an authenticated call has no credential.
    #[error("{}", AUTH_REQUIRED_MESSAGE)]
    AuthRequired,
    /// No usable response: network failure or an unparseable body.
    #[error("{message}")]
    Transport { message: String },
    /// The server answered with a non-success status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        details: Option<serde_json::Value>,
    },
    /// The authenticator returned a credential that cannot be decoded.
    #[error("invalid credential: {reason}")]
    InvalidCredential { reason: TokenError },
    /// The issued credential could not be persisted.
    #[error("could not store credential: {message}")]
    Storage { message: String },
}

impl ApiError {
    /// Build a transport error, substituting a generic message for blank ones.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Transport { message: NETWORK_ERROR_MESSAGE.to_owned() }
        } else {
            Self::Transport { message }
        }
    }

    /// HTTP status of the failure. `401` for the pre-flight auth check,
    /// `0` when no response was received or the credential was unusable or
    /// could not be stored.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::AuthRequired => 401,
            Self::Transport { .. } | Self::InvalidCredential { .. } | Self::Storage { .. } => 0,
            Self::Http { status, .. } => *status,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Server-supplied error body, when there was one.
    #[must_use]
    pub fn details(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Http { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}
