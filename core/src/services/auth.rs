//! Credential check resolving a login to an identity

use std::sync::{Arc, OnceLock};
use tracing::{debug, error};

use crate::domain::entities::Identity;
use crate::errors::{AuthError, DomainError};
use crate::repositories::IdentityRepository;

/// Hash checked against when the email is unknown, so both outcomes cost one
/// bcrypt verification
fn dummy_hash() -> Option<&'static str> {
    static DUMMY: OnceLock<Option<String>> = OnceLock::new();
    DUMMY
        .get_or_init(|| bcrypt::hash("reel-unknown-account", bcrypt::DEFAULT_COST).ok())
        .as_deref()
}

/// Runs bcrypt off the async worker threads
///
/// Without a stored hash the password is checked against [`dummy_hash`] and
/// never matches.
async fn verify_password(password: &str, stored_hash: Option<&str>) -> Result<bool, DomainError> {
    let password = password.to_string();
    let stored_hash = stored_hash.map(str::to_string);

    tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => bcrypt::verify(password, &hash),
        None => match dummy_hash() {
            Some(hash) => bcrypt::verify(password, hash).map(|_| false),
            None => Ok(false),
        },
    })
    .await
    .map_err(|e| {
        error!(error = %e, "Password check task failed");
        DomainError::Internal {
            message: "failed to verify password".to_string(),
        }
    })?
    .map_err(|e| {
        error!(error = %e, "Stored password hash could not be checked");
        DomainError::Internal {
            message: "failed to verify password".to_string(),
        }
    })
}

/// Resolves email/password logins through an [`IdentityRepository`]
pub struct CredentialAuthenticator<R: IdentityRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: IdentityRepository + ?Sized> Clone for CredentialAuthenticator<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: IdentityRepository + ?Sized> CredentialAuthenticator<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Authenticates a login
    ///
    /// # Returns
    ///
    /// * `Ok(Identity)` - Credentials match a stored account
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// * `Err(DomainError)` - Repository or hashing failure
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, DomainError> {
        let account = match self.repository.find_by_email(email).await? {
            Some(account) => account,
            None => {
                let _ = verify_password(password, None).await;
                debug!("Login attempt for unknown account");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !verify_password(password, Some(&account.password_hash)).await? {
            debug!(subject = account.identity.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(account.identity)
    }
}
