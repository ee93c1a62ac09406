//! Unverified credential decoding for display purposes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues a three-segment bearer token. The client only peeks at
//! the middle segment to learn who is signed in. The signature is never
//! checked, so the result must not drive any authorization decision.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::state::auth::SessionUser;

pub const DEFAULT_ROLE: &str = "user";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("expected three dot-separated segments")]
    Malformed,
    #[error("payload is not valid base64: {0}")]
    Encoding(String),
    #[error("payload is not a JSON object: {0}")]
    Payload(String),
    #[error("payload has no subject")]
    MissingSubject,
}

#[derive(Deserialize)]
struct Claims {
    sub: Option<String>,
    role: Option<String>,
}

/// Decode the identity carried by a credential's payload segment.
///
/// Accepts both base64 alphabets, with or without padding.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token is not three segments, the payload
/// is not base64 JSON, or the `sub` claim is absent.
pub fn decode_session_user(token: &str) -> Result<SessionUser, TokenError> {
    let payload = payload_segment(token)?;
    let bytes = decode_segment(payload)?;
    let claims: Claims = serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))?;
    let email = claims.sub.filter(|s| !s.is_empty()).ok_or(TokenError::MissingSubject)?;
    let role = claims.role.filter(|r| !r.is_empty()).unwrap_or_else(|| DEFAULT_ROLE.to_owned());
    Ok(SessionUser { email, role })
}

fn payload_segment(token: &str) -> Result<&str, TokenError> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => Ok(payload),
        _ => Err(TokenError::Malformed),
    }
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError> {
    // Normalize to the URL-safe unpadded alphabet before decoding.
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|e| TokenError::Encoding(e.to_string()))
}
