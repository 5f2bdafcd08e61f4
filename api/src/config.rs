use reel_core::domain::entities::Identity;
use reel_shared::config::AppConfig;
use std::env;

/// Account registered at startup so the service can be exercised without a
/// user store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl SeedAccount {
    /// Reads `SEED_EMAIL` and `SEED_PASSWORD`; both must be set
    pub fn from_env() -> Option<Self> {
        let email = env::var("SEED_EMAIL").ok().filter(|v| !v.is_empty())?;
        let password = env::var("SEED_PASSWORD").ok().filter(|v| !v.is_empty())?;

        Some(Self {
            email,
            password,
            first_name: env::var("SEED_FIRST_NAME").unwrap_or_else(|_| "Admin".to_string()),
            last_name: env::var("SEED_LAST_NAME").unwrap_or_else(|_| "User".to_string()),
        })
    }

    /// Seeded accounts always take identity 1
    pub fn identity(&self) -> Identity {
        Identity::new(1, self.first_name.clone(), self.last_name.clone())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub seed: Option<SeedAccount>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig::from_env(),
            seed: SeedAccount::from_env(),
        }
    }

    pub fn is_development(&self) -> bool {
        self.app.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.app.environment.is_production()
    }

    pub fn bind_address(&self) -> String {
        self.app.server.bind_address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_identity() {
        let seed = SeedAccount {
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        };

        let identity = seed.identity();
        assert_eq!(identity.id, 1);
        assert_eq!(identity.display_name(), "Jane Doe");
    }
}
