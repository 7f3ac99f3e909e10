/**
 * API Error Types
 *
 * The failure taxonomy of the HTTP surface:
 *
 * - `Unauthenticated` - no token, bad scheme, or invalid/expired token
 * - `Forbidden`       - valid identity that does not own the resource
 * - `NotFound`        - the addressed resource does not exist
 * - `Validation`      - missing or malformed request fields
 * - `Upstream`        - store failure, surfaced as a generic 500
 *
 * The auth middleware and the ownership checks resolve failures into these
 * variants before any handler logic runs.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// API-level error, convertible to an HTTP response
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid credentials
    #[error("{0}")]
    Unauthenticated(String),

    /// Valid identity, but not the author of the resource
    #[error("you are not the author of this blog")]
    Forbidden,

    /// Resource id does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Missing or malformed request fields
    #[error("{0}")]
    Validation(String),

    /// Store or internal failure; details are logged, not returned
    #[error("internal server error")]
    Upstream,
}

impl ApiError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(key) => {
                Self::Validation(format!("{key} is already registered"))
            }
            StoreError::Database(e) => {
                tracing::error!("store error: {e:?}");
                Self::Upstream
            }
        }
    }
}
