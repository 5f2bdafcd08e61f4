//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use actix_web::web;
use chrono::{DateTime, Duration};
use std::sync::Arc;

use reel_api::app::AppState;
use reel_core::domain::entities::{Identity, TokenPair};
use reel_core::repositories::{IdentityRepository, InMemoryIdentityRepository};
use reel_core::services::{CookieSettings, ManualClock, TokenServiceConfig};

pub const EMAIL: &str = "jane@example.com";
pub const PASSWORD: &str = "correct horse";
pub const SECRET: &str = "verysecret";

pub fn token_config(secret: &str) -> Arc<TokenServiceConfig> {
    Arc::new(
        TokenServiceConfig::new(
            "example.com",
            "example.com",
            secret,
            Duration::minutes(15),
            Duration::hours(24),
            CookieSettings {
                name: "refresh_token".to_string(),
                path: "/".to_string(),
                domain: "localhost".to_string(),
            },
        )
        .unwrap(),
    )
}

pub fn jane() -> Identity {
    Identity::new(1, "Jane", "Doe")
}

pub fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(DateTime::from_timestamp(1_700_000_000, 0).unwrap()))
}

/// App state with Jane Doe registered, reading `clock`
pub async fn test_state(clock: Arc<ManualClock>) -> web::Data<AppState> {
    let repository = InMemoryIdentityRepository::new();
    repository.register(jane(), EMAIL, PASSWORD, 4).await.unwrap();
    let repository: Arc<dyn IdentityRepository> = Arc::new(repository);

    web::Data::new(AppState::with_clock(token_config(SECRET), repository, clock))
}

pub fn issue_for_jane(state: &AppState) -> TokenPair {
    state.issuer.generate_token_pair(&jane()).unwrap()
}
