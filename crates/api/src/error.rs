use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use postline_core::error::CoreError;
use postline_db::StoreError;

use crate::response::Envelope;
use crate::services::Operation;

/// Application-level error type for the resource service and its handlers.
///
/// Wraps [`CoreError`] for domain errors and adds store failures tagged with
/// the operation they interrupted. Implements [`IntoResponse`] to produce the
/// error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `postline_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The gateway raised an error during `operation`.
    #[error("{operation} failed: {source}")]
    Store {
        operation: Operation,
        source: StoreError,
    },

    /// The gateway returned without error but produced nothing usable
    /// (no row from an insert, or a row count other than 1).
    #[error("{operation} failed: {reason}")]
    Unexpected {
        operation: Operation,
        reason: String,
    },
}

/// Convenience type alias for service and handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` adapter tagging a [`StoreError`] with `operation`.
    pub fn store(operation: Operation) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { operation, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Store { .. }
            | AppError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Core(CoreError::NotFound { entity }) => format!("{entity} not found"),
            AppError::Core(CoreError::Validation(msg)) => msg.clone(),
            AppError::Store { operation, source } => {
                tracing::error!(%operation, error = %source, "Store failure");
                operation.failure_message().to_string()
            }
            AppError::Unexpected { operation, reason } => {
                tracing::error!(%operation, %reason, "Unexpected store result");
                operation.failure_message().to_string()
            }
        };

        (status, axum::Json(Envelope::error(message))).into_response()
    }
}
