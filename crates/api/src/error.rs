use axum::http::header::WWW_AUTHENTICATE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hourlypitch_core::error::CoreError;

use crate::auth::basic::CHALLENGE;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds store and template
/// failures. Implements [`IntoResponse`] to produce plain-text error pages;
/// internal details go to the log, never to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hourlypitch_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A template lookup or render failure.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone()).into_response()
            }
            AppError::Core(CoreError::Unauthorized(_)) => (
                StatusCode::UNAUTHORIZED,
                [(WWW_AUTHENTICATE, CHALLENGE)],
                "Unauthorized.",
            )
                .into_response(),
            AppError::Core(CoreError::InvalidConfig(msg)) => {
                tracing::error!(error = %msg, "Configuration error while serving request");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE).into_response()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE).into_response()
            }
            AppError::Template(err) => {
                tracing::error!(error = ?err, "Template render error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE).into_response()
            }
        }
    }
}
