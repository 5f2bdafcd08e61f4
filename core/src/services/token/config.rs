//! Configuration shared by the token issuer, verifier and cookie manager

use chrono::Duration;
use std::fmt;

use reel_shared::config::AuthConfig;

use crate::errors::DomainError;

/// Longest lifetime accepted for either token
pub const MAX_TOKEN_LIFETIME: Duration = Duration::days(36_500);

/// Where the refresh cookie lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    pub name: String,
    pub path: String,
    pub domain: String,
}

/// Immutable token service configuration
///
/// Built once at startup and shared behind an `Arc`. Construction enforces
/// that access tokens expire strictly before refresh tokens.
#[derive(Clone)]
pub struct TokenServiceConfig {
    issuer: String,
    audience: String,
    secret: Vec<u8>,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
    cookie: CookieSettings,
}

impl TokenServiceConfig {
    /// Creates a validated configuration
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` when the secret is empty, a lifetime is not
    /// positive or exceeds [`MAX_TOKEN_LIFETIME`], or the access lifetime is
    /// not shorter than the refresh lifetime.
    pub fn new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        secret: impl Into<Vec<u8>>,
        access_token_ttl: Duration,
        refresh_token_ttl: Duration,
        cookie: CookieSettings,
    ) -> Result<Self, DomainError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(DomainError::Validation {
                message: "token secret must not be empty".to_string(),
            });
        }
        if access_token_ttl <= Duration::zero() || refresh_token_ttl <= Duration::zero() {
            return Err(DomainError::Validation {
                message: "token lifetimes must be positive".to_string(),
            });
        }
        if access_token_ttl > MAX_TOKEN_LIFETIME || refresh_token_ttl > MAX_TOKEN_LIFETIME {
            return Err(DomainError::Validation {
                message: format!(
                    "token lifetimes must not exceed {} days",
                    MAX_TOKEN_LIFETIME.num_days()
                ),
            });
        }
        if access_token_ttl >= refresh_token_ttl {
            return Err(DomainError::Validation {
                message: format!(
                    "access token lifetime ({}s) must be shorter than refresh token lifetime ({}s)",
                    access_token_ttl.num_seconds(),
                    refresh_token_ttl.num_seconds()
                ),
            });
        }

        Ok(Self {
            issuer: issuer.into(),
            audience: audience.into(),
            secret,
            access_token_ttl,
            refresh_token_ttl,
            cookie,
        })
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    pub fn refresh_token_ttl(&self) -> Duration {
        self.refresh_token_ttl
    }

    pub fn cookie(&self) -> &CookieSettings {
        &self.cookie
    }
}

impl fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("secret", &"<redacted>")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("cookie", &self.cookie)
            .finish()
    }
}

impl TryFrom<&AuthConfig> for TokenServiceConfig {
    type Error = DomainError;

    fn try_from(config: &AuthConfig) -> Result<Self, Self::Error> {
        Self::new(
            config.jwt.issuer.clone(),
            config.jwt.audience.clone(),
            config.jwt.secret.as_bytes().to_vec(),
            lifetime_from_secs(config.jwt.access_token_expiry)?,
            lifetime_from_secs(config.jwt.refresh_token_expiry)?,
            CookieSettings {
                name: config.cookie.name.clone(),
                path: config.cookie.path.clone(),
                domain: config.cookie.domain.clone(),
            },
        )
    }
}

fn lifetime_from_secs(secs: i64) -> Result<Duration, DomainError> {
    Duration::try_seconds(secs).ok_or_else(|| DomainError::Validation {
        message: format!("token lifetime of {}s is out of range", secs),
    })
}
