//! Client-facing errors for the users resource.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error};

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User ID {0} not found")]
    NotFound(i32),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid user ID: {0}")]
    InvalidId(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::debug!("Rejected users request: {}", err);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<JsonRejection> for error::Error {
    fn from(rejection: JsonRejection) -> Self {
        UserError::InvalidBody(rejection.body_text()).into()
    }
}

impl From<PathRejection> for error::Error {
    fn from(rejection: PathRejection) -> Self {
        UserError::InvalidId(rejection.body_text()).into()
    }
}
