use std::time::SystemTime;

use tracing::info;

use crate::auth::jwt::{issue_session_token, TokenError};
use crate::logging::Redacted;
use crate::state::security_config::SecurityConfig;

/// Subject assigned to every login.
///
/// There is no credential store behind login yet: every caller receives a
/// token for this fixed subject and the password is never checked.
pub const STUB_SUBJECT_ID: &str = "123";

/// Issue a session token for `email`.
///
/// The password is accepted and ignored until real credential verification
/// exists.
pub fn login(
    email: &str,
    _password: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    let token = issue_session_token(STUB_SUBJECT_ID, email, now, security)?;
    info!(sub = STUB_SUBJECT_ID, email = %Redacted(email), "issued session token");
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::validate_session_token;

    #[test]
    fn subject_is_fixed_regardless_of_input() {
        let security = SecurityConfig::new("login-test-secret");

        for (email, password) in [
            ("alice@example.com", "correct horse"),
            ("bob@example.com", ""),
            ("", "anything"),
        ] {
            let token = login(email, password, SystemTime::now(), &security).unwrap();
            let claims = validate_session_token(&token, &security).unwrap();
            assert_eq!(claims.sub, STUB_SUBJECT_ID);
            assert_eq!(claims.email, email);
        }
    }

    #[test]
    fn signing_failure_propagates() {
        let security = SecurityConfig::new("login-test-secret");
        let before_epoch = std::time::UNIX_EPOCH - std::time::Duration::from_secs(60);

        let result = login("alice@example.com", "pw", before_epoch, &security);
        assert!(matches!(result, Err(TokenError::Signing(_))));
    }
}
