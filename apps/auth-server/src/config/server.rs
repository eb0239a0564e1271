//! Process configuration read from the environment at startup.
//!
//! Variables:
//! - `JWT_SECRET` — HMAC signing secret. Unset means an empty secret.
//! - `AUTH_HOST` — bind host (default `0.0.0.0`).
//! - `AUTH_PORT` — bind port (default `8080`).

use std::env;

use tracing::warn;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

pub const JWT_SECRET_VAR: &str = "JWT_SECRET";
pub const HOST_VAR: &str = "AUTH_HOST";
pub const PORT_VAR: &str = "AUTH_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub security: SecurityConfig,
}

impl ServerConfig {
    /// Read configuration once from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var(HOST_VAR)
            .ok()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env::var(PORT_VAR) {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::config(format!("{PORT_VAR} must be a valid port number: {e}"))
            })?,
            Err(env::VarError::NotPresent) => DEFAULT_PORT,
            Err(e) => return Err(AppError::config(format!("{PORT_VAR}: {e}"))),
        };

        let secret = match env::var_os(JWT_SECRET_VAR) {
            Some(value) => value.into_encoded_bytes(),
            None => Vec::new(),
        };
        let security = SecurityConfig::new(secret);
        if security.has_empty_secret() {
            warn!("{JWT_SECRET_VAR} is unset or empty; tokens are signed with an empty key");
        }

        Ok(Self {
            host,
            port,
            security,
        })
    }
}
