#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod test_support;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::jwt::{issue_session_token, validate_session_token, TokenError};
pub use auth::SessionClaims;
pub use config::ServerConfig;
pub use error::AppError;
pub use middleware::{AuthGate, RequestTrace, StructuredLogger};
pub use services::auth::{login, STUB_SUBJECT_ID};
pub use state::{AppState, SecurityConfig};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    auth_test_support::logging::init();
}
