//! In-memory implementation of IdentityRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Account, Identity};
use crate::errors::DomainError;

use super::trait_::IdentityRepository;

/// Identity repository backed by a map keyed on email
#[derive(Clone)]
pub struct InMemoryIdentityRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryIdentityRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert an account, replacing any account with the same email
    pub async fn insert(&self, account: Account) {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.email.to_lowercase(), account);
    }

    /// Hash `password` with bcrypt at `cost` and register the account
    pub async fn register(
        &self,
        identity: Identity,
        email: &str,
        password: &str,
        cost: u32,
    ) -> Result<(), DomainError> {
        let password_hash = bcrypt::hash(password, cost).map_err(|e| DomainError::Internal {
            message: format!("failed to hash password: {}", e),
        })?;
        self.insert(Account::new(identity, email, password_hash)).await;
        Ok(())
    }
}

impl Default for InMemoryIdentityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&email.to_lowercase()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_email_is_case_insensitive() {
        let repo = InMemoryIdentityRepository::new();
        repo.insert(Account::new(Identity::new(1, "Jane", "Doe"), "Jane@Example.com", "hash"))
            .await;

        let found = repo.find_by_email("jane@example.com").await.unwrap();
        assert_eq!(found.map(|a| a.identity.id), Some(1));
        assert!(repo.find_by_email("john@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let repo = InMemoryIdentityRepository::new();
        repo.register(Identity::new(2, "John", "Roe"), "john@example.com", "secret", 4)
            .await
            .unwrap();

        let account = repo.find_by_email("john@example.com").await.unwrap().unwrap();
        assert_ne!(account.password_hash, "secret");
        assert!(bcrypt::verify("secret", &account.password_hash).unwrap());
    }
}
