use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::{config::Environment, domain::AvatarError};

const GENERIC_INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Map a pipeline error to its response. Downstream failures are logged
    /// with their cause and, outside local runs, collapsed to one generic
    /// message so internal detail never leaks to clients.
    pub fn from_avatar(err: AvatarError, environment: Environment) -> Self {
        match err {
            AvatarError::UserNotFound => Self::not_found(err.to_string()),
            err if err.is_internal() => {
                tracing::error!("avatar pipeline failed: {err}");
                if environment.is_production() {
                    Self::internal(GENERIC_INTERNAL_MESSAGE)
                } else {
                    Self::internal(err.to_string())
                }
            }
            err => Self::bad_request(err.to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
