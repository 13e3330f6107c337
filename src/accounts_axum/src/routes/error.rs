use accounts_application::{GetProfileError, LoginError, UpdateProfileError};
use accounts_core::{AccountStoreError, SessionError, ValidationError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("User already exists")]
    AccountAlreadyExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not authorized")]
    Unauthorized,

    #[error("Not Found - {0}")]
    NotFound(String),

    #[error("Internal server error")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::AccountAlreadyExists => StatusCode::CONFLICT,
            ApiError::InvalidCredentials | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnexpectedError(detail) => {
                tracing::error!(error = %detail, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<AccountStoreError> for ApiError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::AccountAlreadyExists => ApiError::AccountAlreadyExists,
            AccountStoreError::IncorrectPassword => ApiError::InvalidCredentials,
            // A session pointing at a vanished account is just a bad session.
            AccountStoreError::AccountNotFound => ApiError::Unauthorized,
            AccountStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::Unexpected(e) => ApiError::UnexpectedError(e),
            _ => ApiError::Unauthorized,
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => ApiError::InvalidCredentials,
            LoginError::AccountStoreError(e) => e.into(),
            LoginError::SessionError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<GetProfileError> for ApiError {
    fn from(error: GetProfileError) -> Self {
        match error {
            GetProfileError::AccountStoreError(e) => e.into(),
        }
    }
}

impl From<UpdateProfileError> for ApiError {
    fn from(error: UpdateProfileError) -> Self {
        match error {
            UpdateProfileError::AccountStoreError(e) => e.into(),
        }
    }
}

/// Fallback for routes nothing else matched.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
