//! Business services containing the authentication logic.

pub mod auth;
pub mod clock;
pub mod cookie;
pub mod token;

// Re-export commonly used types
pub use auth::CredentialAuthenticator;
pub use clock::{Clock, ManualClock, SystemClock};
pub use cookie::CookieManager;
pub use token::{parse_bearer, CookieSettings, TokenIssuer, TokenServiceConfig, TokenVerifier, BEARER_SCHEME};
