/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, so handlers can
 * return them directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Internal failures are logged here with full detail; auth failures are
 * logged with their specific reason. Neither detail reaches the client.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        match &self {
            BackendError::Auth(reason) => {
                tracing::warn!("Request rejected ({}): {}", status.as_u16(), reason);
            }
            _ if self.is_internal() => {
                tracing::error!("Internal error: {:?}", self);
            }
            _ => {
                tracing::debug!("Request failed ({}): {}", status.as_u16(), message);
            }
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Convenience alias for handler results
pub type HandlerResult<T> = Result<T, BackendError>;

/// Fallback for routes that match nothing
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found", "status": 404 })),
    )
        .into_response()
}
