//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - HS256 access and refresh token issuance
//! - Bearer header parsing and access token verification
//! - The immutable configuration both sides share

mod config;
mod issuer;
mod verifier;

#[cfg(test)]
mod tests;

pub use config::{CookieSettings, TokenServiceConfig};
pub use issuer::TokenIssuer;
pub use verifier::{parse_bearer, TokenVerifier, BEARER_SCHEME};
