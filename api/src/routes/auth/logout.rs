use actix_web::{web, HttpResponse};

use crate::app::AppState;

use super::cookie::to_http_cookie;

/// Handler for GET /logout
///
/// Replaces the refresh cookie with an expired, empty one. Access tokens
/// stay valid until they expire.
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    let cookie = state.cookies.build_expired_cookie();
    HttpResponse::Accepted()
        .cookie(to_http_cookie(&cookie))
        .finish()
}
