// Centralized error handling for the users API

use crate::models::user::{ErrorMessageResponse, MessageResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

pub const NOT_FOUND_MESSAGE: &str = "User not found";
pub const INVALID_PAYLOAD_MESSAGE: &str = "Please provide name and bio for the user";
pub const INTERNAL_MESSAGE: &str = "The user information could not be processed";

/// Errors raised by the record store
///
/// Unknown ids are not errors; lookups return `None` for those.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User store lock poisoned")]
    Poisoned,

    #[error("No unused id after {attempts} attempts")]
    IdsExhausted { attempts: usize },
}

/// Errors returned by the request handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("User not found")]
    NotFound,

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Required field is empty: {0}")]
    EmptyField(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidPayload(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse {
                    message: NOT_FOUND_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            ApiError::InvalidPayload(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorMessageResponse {
                    error_message: INVALID_PAYLOAD_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                error!(error = %detail, "Request failed with internal error");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorMessageResponse {
                        error_message: INTERNAL_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
