//! Domain-specific error types for authentication and token handling
//!
//! Each variant maps to one distinct failure mode; the presentation layer
//! decides the HTTP status and the message shown to clients.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Token issuance and verification errors
///
/// Verification stops at the first failing step, so every rejected
/// credential reports exactly one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("no auth header")]
    MissingAuthHeader,

    #[error("invalid auth header")]
    MalformedAuthHeader,

    #[error("unexpected signing method: {algorithm}")]
    UnsupportedSigningMethod { algorithm: String },

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("malformed token")]
    MalformedToken,

    #[error("expired token")]
    ExpiredToken,

    #[error("invalid issuer")]
    InvalidIssuer,

    #[error("failed to sign token")]
    SigningFailure,
}

impl TokenError {
    /// Expired credentials can be recovered by refreshing, nothing else can
    pub fn is_expired(&self) -> bool {
        matches!(self, TokenError::ExpiredToken)
    }

    /// Error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::MissingAuthHeader => "MISSING_AUTH_HEADER",
            TokenError::MalformedAuthHeader => "MALFORMED_AUTH_HEADER",
            TokenError::UnsupportedSigningMethod { .. } => "UNSUPPORTED_SIGNING_METHOD",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::MalformedToken => "MALFORMED_TOKEN",
            TokenError::ExpiredToken => "EXPIRED_TOKEN",
            TokenError::InvalidIssuer => "INVALID_ISSUER",
            TokenError::SigningFailure => "SIGNING_FAILURE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_expiry_is_recoverable() {
        assert!(TokenError::ExpiredToken.is_expired());
        assert!(!TokenError::InvalidSignature.is_expired());
        assert!(!TokenError::InvalidIssuer.is_expired());
        assert!(!TokenError::MalformedAuthHeader.is_expired());
    }

    #[test]
    fn test_token_error_messages() {
        assert_eq!(TokenError::MissingAuthHeader.to_string(), "no auth header");
        assert_eq!(TokenError::ExpiredToken.to_string(), "expired token");
        assert_eq!(
            TokenError::UnsupportedSigningMethod { algorithm: "none".to_string() }.to_string(),
            "unexpected signing method: none"
        );
        assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid credentials");
    }

    #[test]
    fn test_token_error_codes() {
        assert_eq!(TokenError::ExpiredToken.code(), "EXPIRED_TOKEN");
        assert_eq!(TokenError::InvalidIssuer.code(), "INVALID_ISSUER");
    }
}
