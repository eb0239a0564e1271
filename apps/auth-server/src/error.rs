use actix_web::error::ResponseError;
use actix_web::http::header::WWW_AUTHENTICATE;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::auth::jwt::TokenError;
use crate::trace_ctx;

/// Body of every error response: `{"error": "<message>"}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing token")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("failed to issue token: {detail}")]
    TokenIssue { detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Message returned to the client. Server-side details are never exposed.
    fn public_message(&self) -> String {
        match self {
            AppError::MissingToken => "missing token".to_string(),
            AppError::InvalidToken => "invalid token".to_string(),
            AppError::TokenIssue { .. } => "failed to issue token".to_string(),
            AppError::BadRequest { detail } => detail.clone(),
            AppError::Config { .. } | AppError::Internal { .. } => "internal error".to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingToken | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::TokenIssue { .. } | AppError::Config { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn missing_token() -> Self {
        Self::MissingToken
    }

    pub fn invalid_token() -> Self {
        Self::InvalidToken
    }

    pub fn bad_request(detail: String) -> Self {
        Self::BadRequest { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Signing(detail) => AppError::TokenIssue { detail },
            TokenError::Malformed | TokenError::BadSignature | TokenError::Expired => {
                AppError::InvalidToken
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            error!(trace_id = %trace_id, error = %self, "request failed");
        }

        let mut builder = HttpResponse::build(status);
        builder.insert_header(("x-trace-id", trace_id));
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((WWW_AUTHENTICATE, "Bearer"));
        }

        builder.json(ErrorBody {
            error: self.public_message(),
        })
    }
}
