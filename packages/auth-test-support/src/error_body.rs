//! Assertions for the auth server's error contract.
//!
//! Every error response is `{"error": "<message>"}` with an `x-trace-id`
//! header; 401 responses additionally carry `WWW-Authenticate: Bearer`.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{CONTENT_TYPE, WWW_AUTHENTICATE};
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the server's error body; `deny_unknown_fields` keeps the
/// contract to exactly one key.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ErrorBodyLike {
    error: String,
}

/// Assert that a service response is an error with the given status and message.
pub async fn assert_error_body<B>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
    expected_message: &str,
) where
    B: MessageBody,
{
    assert_eq!(resp.status(), expected_status);

    let headers = resp.headers().clone();

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );

    let trace_id = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    if expected_status == StatusCode::UNAUTHORIZED {
        let challenge = headers
            .get(WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok())
            .expect("401 responses should carry WWW-Authenticate");
        assert_eq!(challenge, "Bearer");
    }

    let body = actix_web::test::read_body(resp).await;
    let parsed: ErrorBodyLike =
        serde_json::from_slice(&body).expect("Response body should be {\"error\": string}");
    assert_eq!(parsed.error, expected_message);
}
