//! Refresh token cookie construction

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::{RefreshCookie, SameSite};
use crate::services::clock::{Clock, SystemClock};
use crate::services::token::TokenServiceConfig;

/// Builds the refresh cookie set on login and the cleared cookie set on logout
///
/// HttpOnly, Secure and SameSite=Strict are always applied.
#[derive(Clone)]
pub struct CookieManager {
    config: Arc<TokenServiceConfig>,
    clock: Arc<dyn Clock>,
}

impl CookieManager {
    pub fn new(config: Arc<TokenServiceConfig>) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Arc<TokenServiceConfig>, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Cookie carrying `refresh_token` for the configured refresh lifetime
    pub fn build_refresh_cookie(&self, refresh_token: &str) -> RefreshCookie {
        let ttl = self.config.refresh_token_ttl();
        let expires = self
            .clock
            .now()
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.build(refresh_token.to_string(), expires, ttl.num_seconds())
    }

    /// Cookie telling the browser to delete the refresh token immediately
    pub fn build_expired_cookie(&self) -> RefreshCookie {
        self.build(String::new(), DateTime::<Utc>::UNIX_EPOCH, -1)
    }

    fn build(&self, value: String, expires: DateTime<Utc>, max_age: i64) -> RefreshCookie {
        let settings = self.config.cookie();
        RefreshCookie {
            name: settings.name.clone(),
            path: settings.path.clone(),
            domain: settings.domain.clone(),
            value,
            expires,
            max_age,
            http_only: true,
            secure: true,
            same_site: SameSite::Strict,
        }
    }
}
