//! Identity entities handed to the token issuer.

use serde::{Deserialize, Serialize};

/// Minimal identity record a token pair is issued for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Numeric identifier, embedded as the decimal `sub` claim
    pub id: i64,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,
}

impl Identity {
    /// Creates a new identity
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Name shown to clients, "First Last"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Subject claim value for this identity
    pub fn subject(&self) -> String {
        self.id.to_string()
    }
}

/// Stored login record resolving credentials to an identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Identity the account authenticates as
    pub identity: Identity,

    /// Login email, unique per account
    pub email: String,

    /// bcrypt hash of the account password
    pub password_hash: String,
}

impl Account {
    /// Creates a new account record
    pub fn new(identity: Identity, email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            identity,
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
