use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use warden_application::AuthError;
use warden_core::AccountError;

/// Message for every authentication failure, whatever the cause.
pub const AUTHENTICATION_FAILED: &str = "Authentication failed";

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Account already registered")]
    AlreadyRegistered,

    #[error("{}", AUTHENTICATION_FAILED)]
    Unauthorized,

    #[error("Access denied")]
    AccessDenied,

    #[error("Member not found")]
    MemberNotFound,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            AuthApiError::AlreadyRegistered => (StatusCode::CONFLICT, self.to_string()),

            AuthApiError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),

            AuthApiError::AccessDenied => (StatusCode::FORBIDDEN, self.to_string()),

            AuthApiError::MemberNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            AuthApiError::UnexpectedError(ref e) => {
                tracing::error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error".to_owned(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<AccountError> for AuthApiError {
    fn from(error: AccountError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<AuthError> for AuthApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::AlreadyRegistered => AuthApiError::AlreadyRegistered,
            AuthError::MismatchPassword
            | AuthError::InvalidRefreshToken
            | AuthError::InvalidAccessToken
            | AuthError::NotFound => AuthApiError::Unauthorized,
            AuthError::AccessDenied => AuthApiError::AccessDenied,
            AuthError::Unexpected(e) => AuthApiError::UnexpectedError(e),
        }
    }
}
