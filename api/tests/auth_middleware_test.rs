//! Integration tests for JWT authentication middleware

mod common;

use actix_web::{dev::ServiceResponse, http::header, test, web, App, HttpResponse};
use reel_api::app::create_app;
use reel_api::middleware::auth::{AuthContext, JwtAuth};
use reel_core::services::{TokenIssuer, TokenVerifier};
use std::sync::Arc;

use common::*;

fn session_request(authorization: Option<&str>) -> test::TestRequest {
    let req = test::TestRequest::get().uri("/admin/session");
    match authorization {
        Some(value) => req.insert_header((header::AUTHORIZATION, value.to_string())),
        None => req,
    }
}

/// Status, `Vary` header and JSON body of a response
async fn inspect(resp: ServiceResponse) -> (u16, Option<String>, serde_json::Value) {
    let status = resp.status().as_u16();
    let vary = resp
        .headers()
        .get(header::VARY)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body: serde_json::Value = test::read_body_json(resp).await;
    (status, vary, body)
}

#[actix_web::test]
async fn test_middleware_requires_auth_header() {
    let state = test_state(manual_clock()).await;
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(&app, session_request(None).to_request()).await;
    let (status, vary, body) = inspect(resp).await;
    assert_eq!(status, 401);
    assert_eq!(vary.as_deref(), Some("Authorization"));
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "no auth header");
}

#[actix_web::test]
async fn test_middleware_rejects_malformed_header() {
    let state = test_state(manual_clock()).await;
    let app = test::init_service(create_app(state)).await;

    for value in ["Basic xxz", "bearer xyz", "Bearer", "Bearer a b"] {
        let resp = test::call_service(&app, session_request(Some(value)).to_request()).await;
        let (status, vary, body) = inspect(resp).await;
        assert_eq!(status, 401, "header {:?}", value);
        assert_eq!(vary.as_deref(), Some("Authorization"));
        assert_eq!(body["message"], "invalid auth header");
    }
}

#[actix_web::test]
async fn test_middleware_accepts_valid_token() {
    let state = test_state(manual_clock()).await;
    let pair = issue_for_jane(&state);
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(&app, session_request(Some(&format!("Bearer {}", pair.access_token))).to_request()).await;
    let (status, vary, body) = inspect(resp).await;
    assert_eq!(status, 200);
    assert_eq!(vary.as_deref(), Some("Authorization"));
    assert_eq!(body["error"], false);
    assert_eq!(body["data"]["subject"], "1");
    assert_eq!(body["data"]["name"], "Jane Doe");
}

#[actix_web::test]
async fn test_middleware_rejects_expired_token() {
    let clock = manual_clock();
    let state = test_state(clock.clone()).await;
    let pair = issue_for_jane(&state);
    let app = test::init_service(create_app(state)).await;

    clock.advance(chrono::Duration::minutes(16));

    let resp = test::call_service(&app, session_request(Some(&format!("Bearer {}", pair.access_token))).to_request()).await;
    let (status, _, body) = inspect(resp).await;
    assert_eq!(status, 401);
    assert_eq!(body["message"], "expired token");
}

#[actix_web::test]
async fn test_middleware_rejects_refresh_token_as_bearer() {
    let state = test_state(manual_clock()).await;
    let pair = issue_for_jane(&state);
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(&app, session_request(Some(&format!("Bearer {}", pair.refresh_token))).to_request()).await;
    let (status, vary, body) = inspect(resp).await;
    assert_eq!(status, 401);
    assert_eq!(vary.as_deref(), Some("Authorization"));
    assert_eq!(body["message"], "invalid issuer");
}

#[actix_web::test]
async fn test_middleware_rejects_foreign_signature() {
    let state = test_state(manual_clock()).await;
    let app = test::init_service(create_app(state)).await;

    let foreign = TokenIssuer::with_clock(token_config("another-secret"), manual_clock());
    let pair = foreign.generate_token_pair(&jane()).unwrap();

    let resp = test::call_service(&app, session_request(Some(&format!("Bearer {}", pair.access_token))).to_request()).await;
    let (status, _, body) = inspect(resp).await;
    assert_eq!(status, 401);
    assert_eq!(body["message"], "invalid token signature");
}

#[actix_web::test]
async fn test_middleware_rejects_unsigned_token() {
    let state = test_state(manual_clock()).await;
    let pair = issue_for_jane(&state);
    let app = test::init_service(create_app(state)).await;

    // Swap the header for alg "none" and drop the signature
    let payload = pair.access_token.split('.').nth(1).unwrap();
    let unsigned = format!("eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.{}.", payload);

    let resp = test::call_service(&app, session_request(Some(&format!("Bearer {}", unsigned))).to_request()).await;
    let (status, _, body) = inspect(resp).await;
    assert_eq!(status, 401);
    assert_eq!(body["message"], "unexpected signing method: none");
}

#[actix_web::test]
async fn test_middleware_standalone_on_custom_route() {
    let clock = manual_clock();
    let verifier = Arc::new(TokenVerifier::with_clock(token_config(SECRET), clock.clone()));
    let issuer = TokenIssuer::with_clock(token_config(SECRET), clock);
    let pair = issuer.generate_token_pair(&jane()).unwrap();

    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(verifier))
            .route("/protected", web::get().to(|auth: AuthContext| async move {
                HttpResponse::Ok().body(auth.subject)
            })),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", pair.access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get(header::VARY).unwrap(), "Authorization");

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"1");
}

#[actix_web::test]
async fn test_auth_context_extractor() {
    // Test handler that uses AuthContext
    async fn protected_handler(auth: AuthContext) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({
            "subject": auth.subject,
            "name": auth.name,
        }))
    }

    let app = test::init_service(
        App::new()
            .route("/protected", web::get().to(protected_handler))
    ).await;

    // Request without auth context should fail
    let req = test::TestRequest::get()
        .uri("/protected")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}
