use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ibancheck_core::IbanError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`IbanError`] for domain rejections and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A rejected IBAN from `ibancheck_core`.
    #[error(transparent)]
    Iban(#[from] IbanError),

    /// The request body could not be read as the expected JSON document.
    #[error(transparent)]
    InvalidJson(#[from] JsonRejection),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- Domain errors ---
            AppError::Iban(err) => (StatusCode::BAD_REQUEST, err.code(), err.to_string()),

            // --- HTTP-specific errors ---
            AppError::InvalidJson(rejection) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", rejection.body_text())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Render a handler panic as a sanitized 500 JSON body.
///
/// Plugged into `CatchPanicLayer::custom` so panics look like any other
/// internal error to clients.
pub fn panic_response(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalError(detail).into_response()
}
