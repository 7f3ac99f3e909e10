/**
 * Authentication Gate
 *
 * Middleware for routes that require an authenticated caller. It extracts
 * the bearer token, verifies it through the token service, resolves the
 * embedded user id to a live record, and attaches the resolved identity to
 * the request. Requests that fail any step are rejected with 401 before
 * reaching business logic.
 *
 * The gate knows nothing about which resource is being accessed; ownership
 * checks live with the blog handlers.
 */

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::UserProfile;

/// Identity resolved by the gate, stored in request extensions
///
/// Carries everything downstream code needs, so no handler re-derives
/// identity on its own: the id from the token, plus the name and email
/// looked up from the store.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
}

impl CurrentUser {
    pub fn profile(&self) -> UserProfile {
        UserProfile { id: self.id, name: self.name.clone(), email: self.email.clone() }
    }
}

/// Authentication middleware
///
/// 1. Require `Authorization: Bearer <token>`; absence or a different
///    scheme fails with 401
/// 2. Verify the token signature (and expiry, when configured)
/// 3. Resolve the embedded user id against the store; a valid token whose
///    user no longer exists fails with 401
/// 4. Attach the resolved [`CurrentUser`] to the request extensions
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing authorization header");
            ApiError::unauthenticated("no valid token provided")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("authorization header is not a bearer token");
        ApiError::unauthenticated("no valid token provided")
    })?;

    let user_id = state.tokens.verify(token).map_err(|e| {
        // The reason stays in the logs; clients get a generic message.
        tracing::warn!("token verification failed: {e:?}");
        ApiError::unauthenticated("authentication failed")
    })?;

    let user = state
        .store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("token subject {user_id} does not resolve to a user");
            ApiError::unauthenticated("authentication failed")
        })?;

    request.extensions_mut().insert(CurrentUser {
        id: user.id,
        name: user.name,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Extractor for the identity attached by [`require_auth`]
///
/// Usable as a handler parameter on any route behind the gate.
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("CurrentUser missing from request extensions");
                ApiError::unauthenticated("authentication failed")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    #[tokio::test]
    async fn test_extractor_reads_attached_identity() {
        let user = CurrentUser {
            id: uuid::Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        };

        let mut request = HttpRequest::builder().uri("/").body(()).unwrap();
        request.extensions_mut().insert(user.clone());
        let (mut parts, _) = request.into_parts();

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted.id, user.id);
        assert_eq!(extracted.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_extractor_rejects_without_identity() {
        let request = HttpRequest::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthenticated(_))));
    }

    #[test]
    fn test_profile_drops_nothing_sensitive() {
        let user = CurrentUser {
            id: uuid::Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        };
        let profile = user.profile();
        assert_eq!(profile.email, user.email);
        assert_eq!(profile.name, user.name);
    }
}
