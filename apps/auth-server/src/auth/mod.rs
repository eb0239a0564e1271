pub mod claims;
pub mod jwt;

pub use claims::SessionClaims;
pub use jwt::{issue_session_token, validate_session_token, TokenError};
