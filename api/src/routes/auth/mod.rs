//! Authentication route handlers
//!
//! This module contains the endpoints that start and end a session:
//! - Credential login issuing a token pair and the refresh cookie
//! - Logout clearing the refresh cookie

pub mod cookie;
pub mod login;
pub mod logout;

pub use cookie::to_http_cookie;
