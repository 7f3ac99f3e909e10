/**
 * Error Conversion
 *
 * Turns an `ApiError` into an HTTP response. Every error body has the same
 * `{success: false, message}` shape the rest of the API uses, so clients
 * parse one envelope everywhere.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use super::types::ApiError;
use crate::shared::MessageResponse;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {self}");
        } else {
            tracing::debug!("request rejected ({status}): {self}");
        }

        (status, Json(MessageResponse::error(self.to_string()))).into_response()
    }
}
