use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;
use log::{info, warn};
use std::sync::Arc;

use reel_api::app::{create_app, AppState};
use reel_api::config::Config;
use reel_core::repositories::{IdentityRepository, InMemoryIdentityRepository};
use reel_core::services::TokenServiceConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.app.logging.level.as_str()),
    );

    info!("Starting Reel API Server ({})", config.app.environment);

    if config.app.auth.jwt.is_using_default_secret() {
        if config.is_production() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        warn!("JWT_SECRET is not set, signing tokens with the default secret");
    }

    let token_config = TokenServiceConfig::try_from(&config.app.auth)
        .context("invalid token configuration")?;
    info!("Token configuration: {:?}", token_config);

    let repository = InMemoryIdentityRepository::new();
    match &config.seed {
        Some(seed) => {
            repository
                .register(seed.identity(), &seed.email, &seed.password, bcrypt::DEFAULT_COST)
                .await
                .context("failed to seed account")?;
            info!("Seeded account {}", seed.email);
        }
        None if config.is_development() => {
            warn!("SEED_EMAIL / SEED_PASSWORD not set, no account can log in");
        }
        None => {}
    }
    let repository: Arc<dyn IdentityRepository> = Arc::new(repository);

    let state = web::Data::new(AppState::new(Arc::new(token_config), repository));

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(state.clone()).wrap(Logger::default()))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server error")?;

    Ok(())
}
