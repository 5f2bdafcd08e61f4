//! Shared configuration and common types for the Reel server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON response envelope returned by every endpoint

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, Environment, JwtConfig, LoggingConfig, RefreshCookieConfig,
    ServerConfig,
};
pub use types::JsonResponse;
