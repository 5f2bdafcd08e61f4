//! Tests for token issuance and verification


use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::Identity;
use crate::services::clock::ManualClock;
use crate::services::token::{CookieSettings, TokenIssuer, TokenServiceConfig, TokenVerifier};

pub(super) const SECRET: &str = "verysecret";
pub(super) const ISSUER: &str = "example.com";

pub(super) fn test_config(secret: &str) -> Arc<TokenServiceConfig> {
    Arc::new(
        TokenServiceConfig::new(
            ISSUER,
            "example.com",
            secret,
            Duration::minutes(15),
            Duration::hours(24),
            CookieSettings {
                name: "refresh_token".to_string(),
                path: "/".to_string(),
                domain: "localhost".to_string(),
            },
        )
        .expect("valid test config"),
    )
}

pub(super) fn start_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
}

pub(super) fn jane() -> Identity {
    Identity::new(1, "Jane", "Doe")
}

/// Issuer and verifier sharing one config and one manual clock
pub(super) fn fixture() -> (TokenIssuer, TokenVerifier, Arc<ManualClock>) {
    let config = test_config(SECRET);
    let clock = Arc::new(ManualClock::new(start_time()));
    let issuer = TokenIssuer::with_clock(config.clone(), clock.clone());
    let verifier = TokenVerifier::with_clock(config, clock.clone());
    (issuer, verifier, clock)
}

/// Decodes a JWT payload segment without checking the signature
pub(super) fn payload_json(token: &str) -> serde_json::Value {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

    let segment = token.split('.').nth(1).expect("payload segment");
    let bytes = URL_SAFE_NO_PAD.decode(segment).expect("base64url payload");
    serde_json::from_slice(&bytes).expect("json payload")
}
