#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error as ActixError;
use auth_server::state::{AppState, SecurityConfig};
use auth_server::test_support::create_test_app_builder;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

// Logging is auto-installed for every test binary that pulls in `common`.
#[ctor::ctor]
fn init_logging() {
    auth_test_support::logging::init();
}

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET.as_bytes())
}

/// Production routes and middleware over the given security config.
pub async fn build_app(
    security: SecurityConfig,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    create_test_app_builder(AppState::new(security)).build().await
}
