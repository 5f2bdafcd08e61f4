//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use actix_web::{web, App, HttpResponse};
use std::sync::Arc;

use reel_core::repositories::IdentityRepository;
use reel_core::services::{
    Clock, CookieManager, CredentialAuthenticator, SystemClock, TokenIssuer, TokenServiceConfig,
    TokenVerifier,
};
use reel_shared::types::JsonResponse;

use crate::handlers::error::json_error_handler;
use crate::middleware::auth::JwtAuth;
use crate::routes::{admin, auth, health};

/// Upper bound on JSON request bodies
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application state that holds shared services
pub struct AppState {
    pub issuer: TokenIssuer,
    pub verifier: Arc<TokenVerifier>,
    pub cookies: CookieManager,
    pub authenticator: CredentialAuthenticator<dyn IdentityRepository>,
}

impl AppState {
    pub fn new(config: Arc<TokenServiceConfig>, repository: Arc<dyn IdentityRepository>) -> Self {
        Self::with_clock(config, repository, Arc::new(SystemClock))
    }

    /// Wires every service to the same configuration and clock
    pub fn with_clock(
        config: Arc<TokenServiceConfig>,
        repository: Arc<dyn IdentityRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            issuer: TokenIssuer::with_clock(Arc::clone(&config), Arc::clone(&clock)),
            verifier: Arc::new(TokenVerifier::with_clock(Arc::clone(&config), Arc::clone(&clock))),
            cookies: CookieManager::with_clock(config, clock),
            authenticator: CredentialAuthenticator::new(repository),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let verifier = Arc::clone(&app_state.verifier);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(
            web::JsonConfig::default()
                .limit(MAX_BODY_BYTES)
                .error_handler(json_error_handler),
        )

        // Health check endpoint
        .route("/health", web::get().to(health::health_check))

        // Session routes
        .route("/authenticate", web::post().to(auth::login::authenticate))
        .route("/logout", web::get().to(auth::logout::logout))

        // Protected routes
        .service(
            web::scope("/admin")
                .wrap(JwtAuth::new(verifier))
                .route("/session", web::get().to(admin::session)),
        )

        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    let body: JsonResponse = JsonResponse::error("the requested resource was not found");
    HttpResponse::NotFound().json(body)
}
