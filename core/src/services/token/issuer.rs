//! Token pair issuance

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::domain::entities::{AccessClaims, Identity, RefreshClaims, TokenPair};
use crate::errors::TokenError;
use crate::services::clock::{Clock, SystemClock};

use super::config::TokenServiceConfig;

/// Signs access/refresh token pairs for authenticated identities
#[derive(Clone)]
pub struct TokenIssuer {
    config: Arc<TokenServiceConfig>,
    clock: Arc<dyn Clock>,
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    /// Creates an issuer reading the system clock
    pub fn new(config: Arc<TokenServiceConfig>) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an issuer with an explicit clock
    pub fn with_clock(config: Arc<TokenServiceConfig>, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret());
        Self {
            config,
            clock,
            encoding_key,
        }
    }

    /// Generates a new token pair (access + refresh tokens) for an identity
    ///
    /// Both tokens share the same issuance instant. If either signature
    /// fails, no token is returned.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The generated token pair
    /// * `Err(TokenError::SigningFailure)` - Token signing failed or the
    ///   expiry is not representable
    pub fn generate_token_pair(&self, identity: &Identity) -> Result<TokenPair, TokenError> {
        let issued_at = self.clock.now();
        if issued_at.checked_add_signed(self.config.refresh_token_ttl()).is_none() {
            error!(issued_at = %issued_at, "Token expiry is out of range");
            return Err(TokenError::SigningFailure);
        }

        let access_claims = AccessClaims::new(
            identity,
            self.config.issuer(),
            self.config.audience(),
            issued_at,
            self.config.access_token_ttl(),
        );
        let access_token = self.sign(&access_claims)?;

        let refresh_claims =
            RefreshClaims::new(identity, issued_at, self.config.refresh_token_ttl());
        let refresh_token = self.sign(&refresh_claims)?;

        debug!(
            subject = %access_claims.sub,
            access_exp = access_claims.exp,
            refresh_exp = refresh_claims.exp,
            "Issued token pair"
        );

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Encodes claims into an HS256 JWT
    fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "Failed to sign token");
            TokenError::SigningFailure
        })
    }
}
