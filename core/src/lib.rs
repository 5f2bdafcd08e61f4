//! # Reel Core
//!
//! Core authentication logic for the Reel backend.
//! This crate contains the token and cookie entities, the token issuer and
//! verifier, the refresh cookie manager, the identity repository interface,
//! and the error types shared by the API layer.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    AccessClaims, Account, Identity, RefreshClaims, RefreshCookie, SameSite, TokenClaims,
    TokenPair, VerifiedToken,
};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{IdentityRepository, InMemoryIdentityRepository};
pub use services::{
    parse_bearer, Clock, CookieManager, CookieSettings, CredentialAuthenticator, ManualClock,
    SystemClock, TokenIssuer, TokenServiceConfig, TokenVerifier,
};
