//! Refresh token cookie entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// SameSite cookie attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

/// Cookie carrying the refresh token to the browser
///
/// Framework-neutral; the HTTP layer renders it into a `Set-Cookie` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshCookie {
    pub name: String,
    pub path: String,
    pub domain: String,
    pub value: String,

    /// Absolute expiry instant
    pub expires: DateTime<Utc>,

    /// Max-Age in seconds; negative means delete now
    pub max_age: i64,

    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
}

impl RefreshCookie {
    /// Whether this cookie instructs the browser to drop the refresh token
    pub fn is_cleared(&self) -> bool {
        self.value.is_empty() && self.max_age < 0
    }
}
