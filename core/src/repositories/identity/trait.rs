//! Identity repository trait defining how login credentials resolve to
//! an identity.
//!
//! The token services never perform lookups themselves; callers resolve an
//! [`Identity`](crate::domain::entities::Identity) through this trait and hand
//! it to the issuer.

use async_trait::async_trait;

use crate::domain::entities::Account;
use crate::errors::DomainError;

/// Repository trait for account lookups
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use reel_core::repositories::IdentityRepository;
/// use reel_core::domain::entities::Account;
/// use reel_core::errors::DomainError;
///
/// struct PostgresIdentityRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl IdentityRepository for PostgresIdentityRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Find an account by its login email
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account registered with this email
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;
}
