//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware reads the `Authorization` header, verifies the bearer
//! access token, and injects the caller's context into the request.
//! Every response it produces, successful or not, carries
//! `Vary: Authorization`.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::{HeaderValue, AUTHORIZATION, VARY},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use reel_core::{
    domain::entities::VerifiedToken,
    errors::TokenError,
    services::token::TokenVerifier,
};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::handle_token_error;

/// Authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Subject claim (identity ID)
    pub subject: String,
    /// Display name claim
    pub name: String,
    /// The verified bearer credential
    pub token: String,
}

impl From<VerifiedToken> for AuthContext {
    fn from(verified: VerifiedToken) -> Self {
        Self {
            subject: verified.claims.sub,
            name: verified.claims.name,
            token: verified.raw,
        }
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    verifier: Arc<TokenVerifier>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new(verifier: Arc<TokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<TokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let verified = match authorization_header(&req) {
                Ok(header) => verifier.extract_and_verify(header),
                Err(e) => Err(e),
            };

            let mut res = match verified {
                Ok(verified) => {
                    req.extensions_mut().insert(AuthContext::from(verified));
                    service.call(req).await?.map_into_left_body()
                }
                Err(e) => req.into_response(handle_token_error(&e)).map_into_right_body(),
            };

            res.headers_mut()
                .append(VARY, HeaderValue::from_static("Authorization"));
            Ok(res)
        })
    }
}

/// Reads the `Authorization` header; a value that is not visible ASCII
/// counts as malformed
fn authorization_header(req: &ServiceRequest) -> Result<Option<&str>, TokenError> {
    match req.headers().get(AUTHORIZATION) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(Some)
            .map_err(|_| TokenError::MalformedAuthHeader),
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
