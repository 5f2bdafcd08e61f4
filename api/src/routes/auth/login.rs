use actix_web::{http::StatusCode, web, HttpResponse};
use reel_shared::types::JsonResponse;
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::LoginRequest;
use crate::handlers::error::{error_response, handle_domain_error, handle_token_error};

use super::cookie::to_http_cookie;

/// Handler for POST /authenticate
///
/// Checks the credentials, issues a token pair and sets the refresh cookie.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "admin@example.com",
///     "password": "secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (202 Accepted)
/// ```json
/// {
///     "error": false,
///     "message": "authenticated",
///     "data": {
///         "access_token": "eyJhbGciOiJIUzI1NiIs...",
///         "refresh_token": "eyJhbGciOiJIUzI1NiIs..."
///     }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid body or invalid credentials
/// - 500 Internal Server Error: Token signing failure
pub async fn authenticate(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return error_response(StatusCode::BAD_REQUEST, errors.to_string());
    }

    let identity = match state.authenticator.authenticate(&request.email, &request.password).await {
        Ok(identity) => identity,
        Err(error) => return handle_domain_error(&error),
    };

    let pair = match state.issuer.generate_token_pair(&identity) {
        Ok(pair) => pair,
        Err(error) => return handle_token_error(&error),
    };

    let cookie = state.cookies.build_refresh_cookie(&pair.refresh_token);
    log::info!("Issued token pair for subject {}", identity.subject());

    HttpResponse::Accepted()
        .cookie(to_http_cookie(&cookie))
        .json(JsonResponse::success("authenticated", pair))
}
