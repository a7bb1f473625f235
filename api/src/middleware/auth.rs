//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware resolves the bearer token from the Authorization header,
//! authenticates it against the token service (signature, expiry, live
//! directory lookup), and injects the resulting principal into the request
//! for handlers to extract.

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use tracing::debug;

use sf_core::domain::Principal;
use sf_core::errors::DomainError;
use sf_core::repositories::UserDirectory;
use sf_core::services::token::{resolve_bearer, TokenService};

use crate::handlers::error::ApiError;

/// Object-safe authentication capability held by the middleware
///
/// Implemented by `TokenService` for any user directory, so the middleware
/// can be constructed with `Arc<dyn Authenticator>` instead of carrying the
/// directory type parameter around.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<Principal, DomainError>;
}

#[async_trait]
impl<D: UserDirectory> Authenticator for TokenService<D> {
    async fn authenticate(&self, token: &str) -> Result<Principal, DomainError> {
        TokenService::authenticate(self, token).await
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    authenticator: Arc<dyn Authenticator>,
}

impl JwtAuth {
    /// Creates the middleware around an explicitly injected authenticator
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self { authenticator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            authenticator: Arc::clone(&self.authenticator),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    authenticator: Arc<dyn Authenticator>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authenticator = Arc::clone(&self.authenticator);

        Box::pin(async move {
            // Absence of a bearer token is an anonymous request; on a
            // protected route that means unauthorized.
            let header = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());
            let token = match resolve_bearer(header) {
                Some(token) => token.to_owned(),
                None => return Err(ApiError::unauthorized().into()),
            };

            match authenticator.authenticate(&token).await {
                Ok(principal) => {
                    req.extensions_mut().insert(principal);
                }
                Err(error) => {
                    debug!(%error, "request authentication failed");
                    return Err(ApiError::from(error).into());
                }
            }

            service.call(req).await
        })
    }
}

/// Extractor for required authentication
///
/// Fails with 401 when no principal was injected, i.e. the route was not
/// wrapped in [`JwtAuth`] or the request is anonymous.
pub struct AuthPrincipal(pub Principal);

impl FromRequest for AuthPrincipal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<Principal>()
            .cloned()
            .map(AuthPrincipal)
            .ok_or_else(|| ApiError::unauthorized().into());

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<Principal>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let principal = req.extensions().get::<Principal>().cloned();
        ready(Ok(OptionalAuth(principal)))
    }
}
