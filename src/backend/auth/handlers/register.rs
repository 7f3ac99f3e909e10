/**
 * Registration Handler
 *
 * POST /api/users/register
 *
 * 1. Validate name, email and password
 * 2. Reject duplicate emails explicitly
 * 3. Hash the password with bcrypt
 * 4. Insert the user record
 *
 * Returns `{success: true}`; the client logs in separately. Passwords are
 * hashed with bcrypt's default cost and never stored or logged as-is.
 */

use axum::extract::State;
use axum::response::Json;
use bcrypt::{hash, DEFAULT_COST};

use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::store::NewUser;
use crate::shared::{MessageResponse, RegisterRequest};

/// Registration handler
///
/// # Errors
///
/// * `400` - missing fields, malformed email, short password, or an email
///   that is already registered
/// * `500` - store failure or hashing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    tracing::info!("registration request for {}", request.email);

    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }
    if !request.email.contains('@') {
        return Err(ApiError::validation("invalid email format"));
    }
    if request.password.len() < 8 {
        return Err(ApiError::validation("password must be at least 8 characters"));
    }

    if state.store.find_user_by_email(&request.email).await?.is_some() {
        tracing::warn!("email already registered: {}", request.email);
        return Err(ApiError::validation("email is already registered"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("failed to hash password: {e:?}");
        ApiError::Upstream
    })?;

    let user = state
        .store
        .insert_user(NewUser {
            name: request.name.trim().to_string(),
            email: request.email,
            password_hash,
        })
        .await?;

    tracing::info!("user registered: {} ({})", user.name, user.email);

    Ok(Json(MessageResponse::ok()))
}
