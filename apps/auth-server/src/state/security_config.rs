use std::fmt;
use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Issuer written into every session token.
pub const DEFAULT_ISSUER: &str = "go-auth";

/// Lifetime of an issued session token.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Configuration for session token signing and verification.
///
/// Built once at startup and handed to the token functions explicitly, so
/// tests can run any number of independently keyed services side by side.
#[derive(Clone)]
pub struct SecurityConfig {
    /// Shared HMAC secret for signing and verifying tokens (may be empty)
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (HS256)
    pub algorithm: Algorithm,
    /// Value of the `iss` claim on issued tokens
    pub issuer: String,
    /// How long an issued token stays valid
    pub token_ttl: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            issuer: DEFAULT_ISSUER.to_string(),
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn has_empty_secret(&self) -> bool {
        self.jwt_secret.is_empty()
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &format_args!("<{} bytes>", self.jwt_secret.len()))
            .field("algorithm", &self.algorithm)
            .field("issuer", &self.issuer)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
