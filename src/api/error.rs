use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::MessageResponse;
use crate::services::{AuthError, FactError};

#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),

    /// A request body the JSON extractor refused, with its status.
    InvalidBody(StatusCode, String),

    Unauthorized(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::InvalidBody(status, msg) => write!(f, "Invalid body ({status}): {msg}"),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::InvalidBody(status, msg) => (status, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::InvalidToken => {
                Self::Unauthorized(err.to_string())
            }
        }
    }
}

impl From<FactError> for ApiError {
    fn from(err: FactError) -> Self {
        match err {
            FactError::Validation(msg) => Self::ValidationError(msg),
        }
    }
}

impl ApiError {
    pub fn invalid_body(status: StatusCode, msg: impl Into<String>) -> Self {
        Self::InvalidBody(status, msg.into())
    }

    #[must_use]
    pub fn invalid_token() -> Self {
        Self::Unauthorized(AuthError::InvalidToken.to_string())
    }
}
