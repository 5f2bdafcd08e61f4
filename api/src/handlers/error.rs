use actix_web::{error::{InternalError, JsonPayloadError}, http::StatusCode, HttpRequest, HttpResponse};
use reel_core::errors::{AuthError, DomainError, TokenError};
use reel_shared::types::JsonResponse;

/// Builds an error envelope with the given status
pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    let body: JsonResponse = JsonResponse::error(message);
    HttpResponse::build(status).json(body)
}

/// HTTP status for a token error
///
/// Every verification failure is a 401; only signing failures are server errors.
pub fn token_error_status(error: &TokenError) -> StatusCode {
    match error {
        TokenError::SigningFailure => StatusCode::INTERNAL_SERVER_ERROR,
        TokenError::MissingAuthHeader
        | TokenError::MalformedAuthHeader
        | TokenError::UnsupportedSigningMethod { .. }
        | TokenError::InvalidSignature
        | TokenError::MalformedToken
        | TokenError::ExpiredToken
        | TokenError::InvalidIssuer => StatusCode::UNAUTHORIZED,
    }
}

/// Handle token errors and convert them to appropriate HTTP responses
///
/// Core already records the failure, so nothing is logged here.
pub fn handle_token_error(error: &TokenError) -> HttpResponse {
    let status = token_error_status(error);
    if status.is_server_error() {
        return error_response(status, "internal server error");
    }
    error_response(status, error.to_string())
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Token(token_error) => handle_token_error(token_error),
        DomainError::Auth(AuthError::InvalidCredentials) => {
            error_response(StatusCode::BAD_REQUEST, AuthError::InvalidCredentials.to_string())
        }
        DomainError::Validation { message } => error_response(StatusCode::BAD_REQUEST, message.clone()),
        DomainError::Internal { .. } => {
            log::error!("Domain Error: {:?}", error);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}

/// Renders JSON body errors (size limit, unknown fields, trailing data) as
/// a `400` envelope
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_response(StatusCode::BAD_REQUEST, error.to_string());
    InternalError::from_response(error, response).into()
}
