//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// Value of the `typ` claim carried by access tokens
pub const TOKEN_TYPE: &str = "JWT";

/// Capability shared by every claim shape
pub trait TokenClaims {
    /// Subject (decimal identity ID)
    fn subject(&self) -> &str;

    /// Issued at timestamp
    fn issued_at(&self) -> i64;

    /// Expiration timestamp
    fn expires_at(&self) -> i64;

    /// Issuer, when the claim shape carries one
    fn issuer(&self) -> Option<&str>;

    /// Checks if the claims have expired at `now`
    ///
    /// A token is expired at or past its expiry instant.
    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.expires_at()
    }

    /// Lifetime the token was issued with, in seconds
    fn lifetime_seconds(&self) -> i64 {
        self.expires_at() - self.issued_at()
    }
}

/// Claims structure for the access token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (identity ID)
    pub sub: String,

    /// Display name, "First Last"
    pub name: String,

    /// Audience
    pub aud: String,

    /// Issuer
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Token type tag
    pub typ: String,
}

/// `issued_at + lifetime` in seconds, saturating at the latest representable instant
fn expiry(issued_at: DateTime<Utc>, lifetime: Duration) -> i64 {
    issued_at
        .checked_add_signed(lifetime)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
        .timestamp()
}

impl AccessClaims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `identity` - The identity the token is issued for
    /// * `issuer` - Configured issuer
    /// * `audience` - Configured audience
    /// * `issued_at` - Issuance instant
    /// * `lifetime` - Access token lifetime
    pub fn new(
        identity: &Identity,
        issuer: &str,
        audience: &str,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self {
            sub: identity.subject(),
            name: identity.display_name(),
            aud: audience.to_string(),
            iss: issuer.to_string(),
            iat: issued_at.timestamp(),
            exp: expiry(issued_at, lifetime),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

impl TokenClaims for AccessClaims {
    fn subject(&self) -> &str {
        &self.sub
    }

    fn issued_at(&self) -> i64 {
        self.iat
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }

    fn issuer(&self) -> Option<&str> {
        Some(&self.iss)
    }
}

/// Claims structure for the refresh token payload
///
/// Carries no issuer, audience or name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (identity ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl RefreshClaims {
    /// Creates new claims for a refresh token
    pub fn new(identity: &Identity, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            sub: identity.subject(),
            iat: issued_at.timestamp(),
            exp: expiry(issued_at, lifetime),
        }
    }
}

impl TokenClaims for RefreshClaims {
    fn subject(&self) -> &str {
        &self.sub
    }

    fn issued_at(&self) -> i64 {
        self.iat
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }

    fn issuer(&self) -> Option<&str> {
        None
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

/// Bearer credential that passed verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    /// The raw token string as presented
    pub raw: String,

    /// Decoded access claims
    pub claims: AccessClaims,
}
