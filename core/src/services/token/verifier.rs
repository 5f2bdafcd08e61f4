//! Bearer credential extraction and access token verification

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{AccessClaims, VerifiedToken};
use crate::errors::TokenError;
use crate::services::clock::{Clock, SystemClock};

use super::config::TokenServiceConfig;

/// Authorization scheme accepted by the verifier (case-sensitive)
pub const BEARER_SCHEME: &str = "Bearer";

/// HMAC algorithms accepted for verification
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Splits an `Authorization` header value into its bearer credential
///
/// The value must be exactly `Bearer <credential>` separated by one space.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, TokenError> {
    let header = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(TokenError::MissingAuthHeader),
    };

    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 {
        return Err(TokenError::MalformedAuthHeader);
    }
    if parts[0] != BEARER_SCHEME || parts[1].is_empty() {
        return Err(TokenError::MalformedAuthHeader);
    }

    Ok(parts[1])
}

#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Reads the declared `alg` from the token header without trusting it
///
/// `jsonwebtoken` cannot represent `alg: none`, so the header is inspected
/// directly to report it as an unsupported method rather than a parse error.
fn declared_algorithm(token: &str) -> Result<String, TokenError> {
    let segment = token.split('.').next().unwrap_or_default();
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| TokenError::MalformedToken)?;
    let header: RawHeader =
        serde_json::from_slice(&bytes).map_err(|_| TokenError::MalformedToken)?;
    Ok(header.alg)
}

fn is_hmac(algorithm: &str) -> bool {
    matches!(algorithm, "HS256" | "HS384" | "HS512")
}

/// `aud` may be a single string or a list of strings
#[derive(Deserialize)]
#[serde(untagged)]
enum Audience {
    One(String),
    Many(Vec<String>),
}

/// Claims as read off a signed token before the expiry and issuer checks
///
/// Every field is optional so that any correctly signed token reaches those
/// checks; the access-token shape is only required once they pass.
#[derive(Deserialize)]
struct SignedClaims {
    sub: Option<String>,
    #[serde(default)]
    name: String,
    aud: Option<Audience>,
    iss: Option<String>,
    iat: Option<i64>,
    exp: Option<i64>,
    #[serde(default)]
    typ: String,
}

impl SignedClaims {
    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp.is_some_and(|exp| now.timestamp() >= exp)
    }

    /// Access claims carried by the token; `None` when it lacks a subject,
    /// issue time or expiry
    ///
    /// A list audience keeps its first entry.
    fn into_access_claims(self) -> Option<AccessClaims> {
        let aud = match self.aud {
            Some(Audience::One(aud)) => aud,
            Some(Audience::Many(list)) => list.into_iter().next().unwrap_or_default(),
            None => String::new(),
        };

        Some(AccessClaims {
            sub: self.sub?,
            name: self.name,
            aud,
            iss: self.iss?,
            iat: self.iat?,
            exp: self.exp?,
            typ: self.typ,
        })
    }
}

/// Validates bearer access tokens against the shared secret and issuer
#[derive(Clone)]
pub struct TokenVerifier {
    config: Arc<TokenServiceConfig>,
    clock: Arc<dyn Clock>,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a verifier reading the system clock
    pub fn new(config: Arc<TokenServiceConfig>) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a verifier with an explicit clock
    pub fn with_clock(config: Arc<TokenServiceConfig>, clock: Arc<dyn Clock>) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret());

        // Expiry and issuer are checked against the injected clock and the
        // configuration after the signature; the audience is not checked.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        validation.leeway = 0;

        Self {
            config,
            clock,
            decoding_key,
            validation,
        }
    }

    /// Extracts the bearer credential from an `Authorization` header value
    /// and verifies it
    ///
    /// Checks run in order and stop at the first failure: header presence,
    /// header shape, signing algorithm, signature, expiry, issuer. A token
    /// passing all of them but missing `sub`, `iat` or `exp` is malformed.
    pub fn extract_and_verify(&self, authorization: Option<&str>) -> Result<VerifiedToken, TokenError> {
        let token = parse_bearer(authorization)?;
        let claims = self.verify(token)?;
        Ok(VerifiedToken {
            raw: token.to_string(),
            claims,
        })
    }

    /// Verifies a raw access token and returns its claims
    pub fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let algorithm = declared_algorithm(token)?;
        if !is_hmac(&algorithm) {
            debug!(algorithm = %algorithm, "Rejected token with unsupported signing method");
            return Err(TokenError::UnsupportedSigningMethod { algorithm });
        }

        let token_data = decode::<SignedClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let err = match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::InvalidAlgorithm => TokenError::UnsupportedSigningMethod { algorithm: algorithm.clone() },
                    _ => TokenError::MalformedToken,
                };
                debug!(error = %e, kind = err.code(), "Token verification failed");
                err
            })?;
        let claims = token_data.claims;

        if claims.is_expired_at(self.clock.now()) {
            debug!(subject = ?claims.sub, exp = ?claims.exp, "Rejected expired token");
            return Err(TokenError::ExpiredToken);
        }

        if claims.iss.as_deref() != Some(self.config.issuer()) {
            debug!(subject = ?claims.sub, issuer = ?claims.iss, "Rejected token from unknown issuer");
            return Err(TokenError::InvalidIssuer);
        }

        claims.into_access_claims().ok_or_else(|| {
            debug!(kind = TokenError::MalformedToken.code(), "Token lacks access claims");
            TokenError::MalformedToken
        })
    }
}
