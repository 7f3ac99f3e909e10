/**
 * Login Handler
 *
 * POST /api/users/login
 *
 * 1. Look the user up by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a signed session token
 *
 * Bad credentials return `200 {success: false}` with one shared message,
 * whether the email is unknown or the password is wrong, so the endpoint
 * cannot be used to enumerate accounts.
 */

use axum::extract::State;
use axum::response::Json;
use bcrypt::verify;

use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::{LoginRequest, LoginResponse};

const BAD_CREDENTIALS: &str = "invalid email or password";

fn rejected() -> Json<LoginResponse> {
    Json(LoginResponse {
        success: false,
        token: None,
        message: Some(BAD_CREDENTIALS.to_string()),
    })
}

/// Login handler
///
/// # Errors
///
/// * `500` - store failure, hash comparison failure, or token issuance
///   failure; bad credentials are not an error status (see module docs)
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    tracing::info!("login request for {}", request.email);

    let Some(user) = state.store.find_user_by_email(&request.email).await? else {
        tracing::warn!("login for unknown email: {}", request.email);
        return Ok(rejected());
    };

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("password verification error: {e:?}");
        ApiError::Upstream
    })?;

    if !valid {
        tracing::warn!("wrong password for {}", request.email);
        return Ok(rejected());
    }

    let token = state.tokens.issue(user.id).map_err(|e| {
        tracing::error!("failed to issue token: {e:?}");
        ApiError::Upstream
    })?;

    tracing::info!("user logged in: {} ({})", user.name, user.email);

    Ok(Json(LoginResponse { success: true, token: Some(token), message: None }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::TokenService;
    use crate::backend::store::{MemoryStore, NewUser, Store};
    use std::sync::Arc;

    async fn state_with_user(email: &str, password: &str) -> AppState {
        let store = MemoryStore::new();
        store
            .insert_user(NewUser {
                name: "Test".to_string(),
                email: email.to_string(),
                password_hash: bcrypt::hash(password, 4).unwrap(),
            })
            .await
            .unwrap();
        AppState::new(Arc::new(store), TokenService::new("test-secret", Some(3600)))
    }

    #[tokio::test]
    async fn test_login_success_issues_resolvable_token() {
        let state = state_with_user("a@x.com", "password1").await;
        let request = LoginRequest { email: "a@x.com".to_string(), password: "password1".to_string() };

        let response = login(State(state.clone()), Json(request)).await.unwrap();
        assert!(response.success);

        let token = response.token.as_deref().unwrap();
        let user_id = state.tokens.verify(token).unwrap();
        let user = state.store.find_user_by_id(user_id).await.unwrap().unwrap();
        assert_eq!(user.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let state = state_with_user("a@x.com", "password1").await;
        let request = LoginRequest { email: "a@x.com".to_string(), password: "nope".to_string() };

        let response = login(State(state), Json(request)).await.unwrap();
        assert!(!response.success);
        assert!(response.token.is_none());
    }

    #[tokio::test]
    async fn test_login_unknown_email_same_shape() {
        let state = state_with_user("a@x.com", "password1").await;
        let request = LoginRequest { email: "b@y.com".to_string(), password: "password1".to_string() };

        let response = login(State(state), Json(request)).await.unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some(BAD_CREDENTIALS));
    }
}
