//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Secret used when `JWT_SECRET` is not provided
const DEFAULT_JWT_SECRET: &str = "verysecret";

/// JWT signing configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared HMAC secret for signing and verifying tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim (embedded in access tokens)
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            access_token_expiry: 900,     // 15 minutes
            refresh_token_expiry: 86400,  // 24 hours
            issuer: String::from("example.com"),
            audience: String::from("example.com"),
        }
    }
}

impl JwtConfig {
    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Refresh token cookie placement
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RefreshCookieConfig {
    /// Cookie name
    pub name: String,

    /// Cookie path
    pub path: String,

    /// Cookie domain
    pub domain: String,
}

impl Default for RefreshCookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("refresh_token"),
            path: String::from("/"),
            domain: String::from("localhost"),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Refresh cookie configuration
    #[serde(default)]
    pub cookie: RefreshCookieConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let jwt_defaults = JwtConfig::default();
        let cookie_defaults = RefreshCookieConfig::default();

        Self {
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").unwrap_or(jwt_defaults.secret),
                access_token_expiry: env::var("JWT_ACCESS_TOKEN_EXPIRY")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(jwt_defaults.access_token_expiry),
                refresh_token_expiry: env::var("JWT_REFRESH_TOKEN_EXPIRY")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(jwt_defaults.refresh_token_expiry),
                issuer: env::var("JWT_ISSUER").unwrap_or(jwt_defaults.issuer),
                audience: env::var("JWT_AUDIENCE").unwrap_or(jwt_defaults.audience),
            },
            cookie: RefreshCookieConfig {
                name: env::var("COOKIE_NAME").unwrap_or(cookie_defaults.name),
                path: env::var("COOKIE_PATH").unwrap_or(cookie_defaults.path),
                domain: env::var("COOKIE_DOMAIN").unwrap_or(cookie_defaults.domain),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 900);
        assert_eq!(config.refresh_token_expiry, 86400);
        assert_eq!(config.issuer, "example.com");
        assert_eq!(config.audience, "example.com");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_custom_secret_is_not_default() {
        let config = JwtConfig {
            secret: "my-secret".to_string(),
            ..Default::default()
        };
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_refresh_cookie_config_default() {
        let config = RefreshCookieConfig::default();
        assert_eq!(config.name, "refresh_token");
        assert_eq!(config.path, "/");
        assert_eq!(config.domain, "localhost");
    }

    #[test]
    fn test_auth_config_deserializes_without_cookie_section() {
        let config: AuthConfig = serde_json::from_value(serde_json::json!({
            "jwt": {
                "secret": "s",
                "access_token_expiry": 60,
                "refresh_token_expiry": 120,
                "issuer": "iss",
                "audience": "aud"
            }
        }))
        .unwrap();

        assert_eq!(config.jwt.issuer, "iss");
        assert_eq!(config.cookie, RefreshCookieConfig::default());
    }
}
