/**
 * Router Configuration
 *
 * Builds the Axum router. Routes are split into a public group and a
 * protected group; the authentication gate is layered onto the protected
 * group only, so public reads never pay for token verification.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/users/register`     - user registration
 * - `POST /api/users/login`        - credential verification, token issuance
 * - `GET  /api/blogs/all-blogs`    - list all posts
 * - `GET  /api/blogs/blog/{id}`    - fetch one post
 *
 * ## Protected (bearer token required)
 * - `GET    /api/users/validate-user` - resolve token to identity
 * - `POST   /api/blogs/create`        - create a post
 * - `PUT    /api/blogs/edit/{id}`     - edit (author only)
 * - `DELETE /api/blogs/delete/{id}`   - delete (author only)
 *
 * CORS is permissive: the API serves browser and desktop clients from any
 * origin, as the original deployment did.
 */

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::auth::{login, register, validate_user};
use crate::backend::blogs::{create_blog, delete_blog, edit_blog, get_blog, list_blogs};
use crate::backend::error::ApiError;
use crate::backend::middleware::require_auth;
use crate::backend::server::state::AppState;

/// Create the router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
        .route("/api/blogs/all-blogs", get(list_blogs))
        .route("/api/blogs/blog/{id}", get(get_blog));

    let protected = Router::new()
        .route("/api/users/validate-user", get(validate_user))
        .route("/api/blogs/create", post(create_blog))
        .route("/api/blogs/edit/{id}", put(edit_blog))
        .route("/api/blogs/delete/{id}", delete(delete_blog))
        .route_layer(axum::middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn fallback() -> ApiError {
    ApiError::NotFound("route")
}
