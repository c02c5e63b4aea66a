//! # API Errors
//!
//! Every handler returns `ApiResult<T>`; the error side is rendered here.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use foodie_core::errors::CoreError;
use foodie_core::responses::{ErrorResponse, MessageResponse};
use foodie_db::error::DatabaseError;
use thiserror::Error;

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A path or query parameter failed validation.
    #[error(transparent)]
    BadRequest(#[from] CoreError),

    /// The query ran but matched nothing.
    #[error("{0}")]
    NotFound(String),

    /// The query layer failed (connectivity, malformed SQL, bad row data).
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ApiError {
    /// HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::NotFound(message) => (status, Json(MessageResponse { message })).into_response(),
            Self::BadRequest(error) => {
                tracing::debug!(%error, "rejected request parameters");
                (
                    status,
                    Json(ErrorResponse {
                        error: error.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Database(error) => {
                tracing::error!(%error, "catalog query failed");
                (
                    status,
                    Json(ErrorResponse {
                        error: error.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
