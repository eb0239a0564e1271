use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::auth::claims::SessionClaims;
use crate::state::security_config::SecurityConfig;

/// Why issuing or validating a session token failed.
///
/// Callers outside the token layer only ever report the coarse outcome; the
/// kind is kept for logs and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature does not verify")]
    BadSignature,
    #[error("token has expired")]
    Expired,
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Mint an HS256 session token for `sub`/`email`, valid for `security.token_ttl` from `now`.
pub fn issue_session_token(
    sub: &str,
    email: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    let issued_at = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TokenError::Signing("system clock is before the Unix epoch".to_string()))?
        .as_secs() as i64;

    let claims = SessionClaims {
        sub: sub.to_string(),
        email: email.to_string(),
        iss: security.issuer.clone(),
        exp: issued_at + security.token_ttl.as_secs() as i64,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Verify a session token and return its claims.
///
/// Only the signature, algorithm, claim shape and expiry are checked. Issuer
/// and subject are taken as-is.
pub fn validate_session_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<SessionClaims, TokenError> {
    // Pin the algorithm; expiry is enforced to the second.
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp"]);

    let claims = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::BadSignature,
        _ => TokenError::Malformed,
    })?;

    // jsonwebtoken only rejects `exp < now`; a token is already dead at `exp == now`.
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TokenError::Expired)?
        .as_secs() as i64;
    if claims.exp <= now {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde_json::json;

    use super::{issue_session_token, validate_session_token, TokenError};
    use crate::state::security_config::SecurityConfig;

    fn security() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
    }

    fn unix_now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }

    #[test]
    fn test_issue_and_validate_roundtrip() {
        let security = security();
        let now = SystemTime::now();

        let token = issue_session_token("sub-roundtrip", "test@example.com", now, &security).unwrap();
        let claims = validate_session_token(&token, &security).unwrap();

        assert_eq!(claims.sub, "sub-roundtrip");
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.iss, "go-auth");
        assert_eq!(
            claims.exp,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64 + 24 * 60 * 60
        );
    }

    #[test]
    fn test_token_has_three_segments() {
        let token =
            issue_session_token("sub", "a@example.com", SystemTime::now(), &security()).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_expired_token() {
        let security = security();
        // 25 hours ago so the 24-hour token is already past exp
        let now = SystemTime::now() - Duration::from_secs(25 * 60 * 60);

        let token = issue_session_token("sub-expired", "test@example.com", now, &security).unwrap();

        assert_eq!(
            validate_session_token(&token, &security),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_expiry_has_no_leeway() {
        let security = security();
        let stale = json!({
            "sub": "123",
            "email": "test@example.com",
            "iss": "go-auth",
            "exp": unix_now() - 5,
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &stale,
            &EncodingKey::from_secret(&security.jwt_secret),
        )
        .unwrap();

        assert_eq!(
            validate_session_token(&token, &security),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_token_expiring_this_second_is_rejected() {
        let security = security();
        let boundary = json!({
            "sub": "123",
            "email": "test@example.com",
            "iss": "go-auth",
            "exp": unix_now(),
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &boundary,
            &EncodingKey::from_secret(&security.jwt_secret),
        )
        .unwrap();

        assert_eq!(
            validate_session_token(&token, &security),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_token_expiring_next_minute_is_accepted() {
        let security = security();
        let fresh = json!({
            "sub": "123",
            "email": "test@example.com",
            "iss": "go-auth",
            "exp": unix_now() + 60,
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &fresh,
            &EncodingKey::from_secret(&security.jwt_secret),
        )
        .unwrap();

        assert_eq!(validate_session_token(&token, &security).unwrap().sub, "123");
    }

    #[test]
    fn test_bad_signature() {
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let security_b = SecurityConfig::new("secret-B".as_bytes());

        let token =
            issue_session_token("sub", "test@example.com", SystemTime::now(), &security_a).unwrap();

        assert_eq!(
            validate_session_token(&token, &security_b),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let security = security();
        let claims = json!({
            "sub": "123",
            "email": "test@example.com",
            "iss": "go-auth",
            "exp": unix_now() + 3600,
        });
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(&security.jwt_secret),
        )
        .unwrap();

        assert_eq!(
            validate_session_token(&token, &security),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        let security = security();
        for garbage in ["garbage", "", "a.b.c", "Bearer x.y.z"] {
            assert_eq!(
                validate_session_token(garbage, &security),
                Err(TokenError::Malformed),
                "input {garbage:?}"
            );
        }
    }

    #[test]
    fn test_missing_claim_is_malformed() {
        let security = security();
        let without_email = json!({
            "sub": "123",
            "iss": "go-auth",
            "exp": unix_now() + 3600,
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &without_email,
            &EncodingKey::from_secret(&security.jwt_secret),
        )
        .unwrap();

        assert_eq!(
            validate_session_token(&token, &security),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_issuer_is_not_checked() {
        let security = security();
        let foreign_issuer = json!({
            "sub": "someone",
            "email": "x@example.com",
            "iss": "somebody-else",
            "exp": unix_now() + 3600,
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &foreign_issuer,
            &EncodingKey::from_secret(&security.jwt_secret),
        )
        .unwrap();

        let claims = validate_session_token(&token, &security).unwrap();
        assert_eq!(claims.iss, "somebody-else");
    }

    #[test]
    fn test_empty_secret_still_signs() {
        let security = SecurityConfig::new(Vec::new());
        let token =
            issue_session_token("sub", "e@example.com", SystemTime::now(), &security).unwrap();
        assert!(validate_session_token(&token, &security).is_ok());
        assert_eq!(
            validate_session_token(&token, &SecurityConfig::new("not-empty")),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_clock_before_epoch_is_signing_error() {
        let before_epoch = UNIX_EPOCH - Duration::from_secs(1);
        let result = issue_session_token("sub", "e@example.com", before_epoch, &security());
        assert!(matches!(result, Err(TokenError::Signing(_))));
    }
}
