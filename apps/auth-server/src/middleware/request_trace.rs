//! Per-request id, tracing span and trace context.
//!
//! Generates a UUID v4 request id, stores it in request extensions as
//! [`RequestId`], runs the downstream service inside a `request` span and the
//! task-local trace context, and echoes the id in `x-request-id`.
//!
//! Wire it outermost so `StructuredLogger` and handlers can see the id:
//!
//! App::new()
//!     .wrap(StructuredLogger)
//!     .wrap(RequestTrace)

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::trace_ctx;

/// Request id stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(RequestId(request_id.clone()));

        let span = info_span!(
            "request",
            trace_id = %request_id,
            method = %req.method(),
            path = %req.path()
        );

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = trace_ctx::with_trace_id(request_id.clone(), fut.instrument(span)).await?;

            res.headers_mut().insert(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_str(&request_id)
                    .unwrap_or_else(|_| HeaderValue::from_static("invalid-uuid")),
            );

            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test as actix_test;
    use actix_web::{web, App, HttpMessage, HttpRequest, HttpResponse};

    use super::*;

    #[actix_web::test]
    async fn sets_request_id_header_matching_extension() {
        let app = actix_test::init_service(App::new().wrap(RequestTrace).route(
            "/echo",
            web::get().to(|req: HttpRequest| async move {
                let id = req
                    .extensions()
                    .get::<RequestId>()
                    .map(|id| id.0.clone())
                    .unwrap_or_default();
                HttpResponse::Ok().body(id)
            }),
        ))
        .await;

        let resp = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/echo").to_request()).await;
        let header = resp
            .headers()
            .get("x-request-id")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let body = actix_test::read_body(resp).await;

        assert!(Uuid::parse_str(&header).is_ok());
        assert_eq!(body, header.as_bytes());
    }

    #[actix_web::test]
    async fn handlers_see_trace_context() {
        let app = actix_test::init_service(App::new().wrap(RequestTrace).route(
            "/trace",
            web::get().to(|| async { HttpResponse::Ok().body(trace_ctx::trace_id()) }),
        ))
        .await;

        let resp =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/trace").to_request()).await;
        let header = resp.headers().get("x-request-id").unwrap().clone();
        let body = actix_test::read_body(resp).await;

        assert_eq!(body, header.as_bytes());
    }
}
