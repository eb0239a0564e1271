//! Claims carried by session tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in every session token.
///
/// The wire keys are exactly `sub`, `email`, `iss` and `exp`; none of them is
/// optional, so a token missing any of them fails to decode.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject identifier
    pub sub: String,
    pub email: String,
    /// Issuer (constant per deployment)
    pub iss: String,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
