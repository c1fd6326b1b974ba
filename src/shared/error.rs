use crate::domain::tokens::TokenError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

/// Request-scoped error taxonomy. Nothing here is fatal to the process;
/// every variant maps to a response and the request can be retried.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    /// Unknown user, wrong password and disabled user collapse into this
    /// single outcome so login cannot be used as an account oracle.
    #[error("Incorrect username or password")]
    InvalidCredentials,
    #[error("Not authorized")]
    MissingCredential,
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("Token type mismatch")]
    TokenTypeMismatch,
    #[error("Refresh token does not match the stored one")]
    RefreshTokenStale,
    #[error("Resource not found")]
    NotFound,
    #[error("User with this login already exists")]
    LoginTaken,
    #[error("Could not allocate a unique short key")]
    KeyGenerationFailed,
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::InvalidCredentials | AppError::MissingCredential => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::Token(TokenError::EncodingFailure) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            AppError::Token(e) => {
                // The kinds all end up unauthorized, but are reported apart.
                tracing::debug!(kind = ?e, "token rejected");
                (StatusCode::UNAUTHORIZED, e.to_string())
            }
            AppError::TokenTypeMismatch | AppError::RefreshTokenStale => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::LoginTaken => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::KeyGenerationFailed => {
                tracing::error!("short key retry budget exhausted");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal server error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({
            "errors": [
                {
                    "status": status.as_u16(),
                    "detail": message
                }
            ]
        });

        (status, Json(body)).into_response()
    }
}

/// Error body shape, for the API docs.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorDetail>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub status: u16,
    pub detail: String,
}
