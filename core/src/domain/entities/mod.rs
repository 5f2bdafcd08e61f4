//! Domain entities representing core authentication objects.

pub mod cookie;
pub mod identity;
pub mod token;

// Re-export commonly used types
pub use cookie::{RefreshCookie, SameSite};
pub use identity::{Account, Identity};
pub use token::{AccessClaims, RefreshClaims, TokenClaims, TokenPair, VerifiedToken, TOKEN_TYPE};
