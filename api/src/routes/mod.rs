//! Route handlers
//!
//! - `auth` - login and logout, issuing and clearing the refresh cookie
//! - `admin` - endpoints behind the JWT middleware
//! - `health` - liveness probe

pub mod admin;
pub mod auth;
pub mod health;
