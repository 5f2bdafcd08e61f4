use actix_web::HttpResponse;
use reel_shared::types::JsonResponse;

use crate::dto::auth::SessionResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /admin/session
///
/// Returns the identity carried by the caller's access token. Only reachable
/// through the JWT middleware.
pub async fn session(auth: AuthContext) -> HttpResponse {
    let response = SessionResponse {
        subject: auth.subject,
        name: auth.name,
    };
    HttpResponse::Ok().json(JsonResponse::success("authenticated", response))
}
