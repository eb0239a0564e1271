//! Session token gate for protected scopes.
//!
//! Rejects requests without a usable `Authorization` header before they reach
//! the wrapped service:
//! - header absent or empty → 401 `{"error": "missing token"}`
//! - anything that fails validation → 401 `{"error": "invalid token"}`
//!
//! A literal `"Bearer "` prefix is stripped when present; the remainder is
//! validated as-is. Claims are not attached to the request.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::auth::jwt::validate_session_token;
use crate::error::AppError;
use crate::logging::Redacted;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

const BEARER_PREFIX: &str = "Bearer ";

pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware { service }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let outcome = match req.app_data::<web::Data<AppState>>() {
            Some(state) => authorize(req.headers().get(header::AUTHORIZATION), &state.security),
            None => Err(AppError::internal("AppState not available".to_string())),
        };

        match outcome {
            Ok(()) => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
            }
            // Build the response inside the future so it picks up the request's trace id.
            Err(err) => Box::pin(async move {
                let response = err.error_response();
                Ok(req.into_response(response).map_into_right_body())
            }),
        }
    }
}

/// Decide whether a request carrying `header_value` may proceed.
pub fn authorize(
    header_value: Option<&HeaderValue>,
    security: &SecurityConfig,
) -> Result<(), AppError> {
    let raw = match header_value {
        None => return Err(AppError::missing_token()),
        Some(value) if value.is_empty() => return Err(AppError::missing_token()),
        Some(value) => value.to_str().map_err(|_| {
            debug!("authorization header is not visible ASCII");
            AppError::invalid_token()
        })?,
    };

    let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw);

    validate_session_token(token, security)
        .map(|_claims| ())
        .map_err(|kind| {
            debug!(reason = %kind, token = %Redacted(token), "rejected session token");
            AppError::from(kind)
        })
}
