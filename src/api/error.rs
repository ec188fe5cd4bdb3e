//! HTTP error mapping for facade failures.

use crate::activity::services::TaskTrackError;
use crate::task::{ports::TaskRepositoryError, services::TaskFactoryError};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A facade operation failed.
    #[error(transparent)]
    Facade(#[from] TaskTrackError),
    /// The request body was not acceptable JSON.
    #[error(transparent)]
    Body(#[from] JsonRejection),
    /// The query string could not be decoded.
    #[error(transparent)]
    Query(#[from] QueryRejection),
    /// An HTML page could not be rendered.
    #[error("page rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl ApiError {
    /// Returns the HTTP status reported for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Facade(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Body(_) | Self::Query(_) => StatusCode::BAD_REQUEST,
            Self::Facade(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Facade(TaskTrackError::Factory(TaskFactoryError::UnknownTaskType(_))) => {
                "unknown_task_type"
            }
            Self::Facade(
                TaskTrackError::Factory(TaskFactoryError::Validation(_))
                | TaskTrackError::Activity(_),
            ) => "validation_error",
            Self::Facade(TaskTrackError::UnknownStrategy(_)) => "unknown_strategy",
            Self::Facade(TaskTrackError::Repository(TaskRepositoryError::DuplicateTask(_))) => {
                "duplicate_id"
            }
            Self::Body(_) | Self::Query(_) => "invalid_request",
            Self::Facade(TaskTrackError::Repository(TaskRepositoryError::Persistence(_)))
            | Self::Render(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(code = self.code(), error = %self, "request failed");
        } else {
            warn!(code = self.code(), error = %self, "request rejected");
        }

        let body = Json(json!({
            "error": self.code(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
