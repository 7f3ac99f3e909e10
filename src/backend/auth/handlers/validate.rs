/**
 * Identity Resolution Handler
 *
 * GET /api/users/validate-user
 *
 * The "whoami" endpoint the client calls to rehydrate its session from a
 * stored token. Runs behind the auth gate, which has already verified the
 * token and resolved it to a live user record; this handler only shapes
 * the response.
 */

use axum::response::Json;

use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::shared::ValidateResponse;

/// Resolve the caller's bearer token to its identity
///
/// # Errors
///
/// * `401` - rejected by the auth gate before this handler runs
pub async fn validate_user(AuthUser(user): AuthUser) -> Result<Json<ValidateResponse>, ApiError> {
    tracing::debug!("validated identity {}", user.email);

    Ok(Json(ValidateResponse { success: true, data: user.profile() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::middleware::CurrentUser;

    #[tokio::test]
    async fn test_validate_returns_profile_of_resolved_identity() {
        let user = CurrentUser {
            id: uuid::Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        };

        let response = validate_user(AuthUser(user.clone())).await.unwrap();
        assert!(response.success);
        assert_eq!(response.data.id, user.id);
        assert_eq!(response.data.email, "a@x.com");
    }
}
