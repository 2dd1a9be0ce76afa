//! Session cookie authentication middleware for protected pages.
//!
//! The middleware reads the session token from the configured cookie,
//! verifies it through the core `TokenService` and injects a
//! [`SessionContext`] into the request. Requests that are not authenticated
//! are redirected to the login page; internal failures become a 500.

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::LOCATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use ts_core::{domain::entities::session::SessionClaims, errors::DomainError};

use crate::handlers::error::{handle_domain_error, internal_error};
use crate::routes::auth::AppState;

/// Default page unauthenticated visitors are sent to
pub const LOGIN_PATH: &str = "/login";

/// Authenticated session injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Username asserted by the session token
    pub username: String,
    /// When the session token stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl From<SessionClaims> for SessionContext {
    fn from(claims: SessionClaims) -> Self {
        let expires_at = claims.expires_at();
        Self {
            username: claims.username,
            expires_at,
        }
    }
}

/// Why a request did not get a session
#[derive(Debug)]
enum Rejection {
    /// No cookie, or the token failed verification
    Unauthenticated,
    /// Application state missing from the app
    Misconfigured,
    /// Anything else raised while verifying
    Internal(DomainError),
}

impl Rejection {
    fn into_response(self, login_path: &str) -> HttpResponse {
        match self {
            Rejection::Unauthenticated => HttpResponse::Found()
                .insert_header((LOCATION, login_path))
                .finish(),
            Rejection::Misconfigured => {
                log::error!("SessionAuth used without application state");
                internal_error()
            }
            Rejection::Internal(error) => handle_domain_error(&error),
        }
    }
}

/// Session authentication middleware factory
pub struct SessionAuth {
    login_path: Rc<str>,
}

impl SessionAuth {
    /// Creates the middleware redirecting to `/login`
    pub fn new() -> Self {
        Self::with_login_path(LOGIN_PATH)
    }

    /// Creates the middleware redirecting to a custom login page
    pub fn with_login_path(login_path: &str) -> Self {
        Self {
            login_path: Rc::from(login_path),
        }
    }
}

impl Default for SessionAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            login_path: Rc::clone(&self.login_path),
        }))
    }
}

/// Session authentication middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    login_path: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let login_path = Rc::clone(&self.login_path);

        Box::pin(async move {
            match authenticate(&req) {
                Ok(session) => {
                    req.extensions_mut().insert(session);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(rejection) => {
                    let response = rejection.into_response(&login_path);
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Reads and verifies the session cookie
fn authenticate(req: &ServiceRequest) -> Result<SessionContext, Rejection> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or(Rejection::Misconfigured)?;

    let cookie = req
        .cookie(&state.cookie.name)
        .ok_or(Rejection::Unauthenticated)?;

    match state.auth_service.authenticate(cookie.value()) {
        Ok(claims) => Ok(SessionContext::from(claims)),
        Err(e) if e.is_authentication_failure() => {
            log::debug!("Rejected session cookie: {}", e);
            Err(Rejection::Unauthenticated)
        }
        Err(e) => Err(Rejection::Internal(e)),
    }
}

/// Extractor for the authenticated session
impl FromRequest for SessionContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<SessionContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
