/**
 * API Client
 *
 * Typed HTTP client functions for the server API. Each function performs a
 * single blocking request (callers run them on background threads) and
 * maps the response onto [`ApiError`], so views never look at raw status
 * codes.
 */

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::runtime::Runtime;
use uuid::Uuid;

use crate::egui_app::config::Config;
use crate::shared::{
    BlogEnvelope, BlogPost, CreateBlogRequest, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, UpdateBlogRequest, UserProfile, ValidateResponse,
};

/// Client-side failure taxonomy
///
/// Mirrors the server's error classes plus the purely client-side ones
/// (network, parse). Views decide presentation from the variant:
/// `Unauthenticated` clears the session and redirects to login,
/// `Validation`/`Forbidden` render inline, `Network` offers a retry.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("your session has expired, please log in again")]
    Unauthenticated,

    #[error("{0}")]
    Forbidden(String),

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("could not reach the server: {0}")]
    Network(String),

    #[error("unexpected server response: {0}")]
    Unexpected(String),
}

/// Map a failed response onto the error taxonomy, using the body message
/// where the server provides one
async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<MessageResponse>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| "request failed".to_string());

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthenticated,
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::BAD_REQUEST => ApiError::Validation(message),
        other => ApiError::Unexpected(format!("{other}: {message}")),
    }
}

/// Execute a request and parse the success body
///
/// One runtime per call: these functions run on short-lived background
/// threads, never on the UI thread.
fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let rt = Runtime::new()
        .map_err(|e| ApiError::Unexpected(format!("failed to create runtime: {e}")))?;

    rt.block_on(async {
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Unexpected(format!("failed to parse response: {e}")))
    })
}

/// Register a new user
pub fn register(
    config: &Config,
    name: String,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let request = Client::new()
        .post(config.api_url("/api/users/register"))
        .json(&RegisterRequest { name, email, password });

    execute::<MessageResponse>(request)?;
    Ok(())
}

/// Log in and return the issued token
///
/// Bad credentials come back as `200 {success: false}`, not an error
/// status, and are mapped to [`ApiError::InvalidCredentials`].
pub fn login(config: &Config, email: String, password: String) -> Result<String, ApiError> {
    let request = Client::new()
        .post(config.api_url("/api/users/login"))
        .json(&LoginRequest { email, password });

    let body: LoginResponse = execute(request)?;
    match (body.success, body.token) {
        (true, Some(token)) => Ok(token),
        (true, None) => Err(ApiError::Unexpected("login succeeded without a token".to_string())),
        (false, _) => Err(ApiError::InvalidCredentials),
    }
}

/// Resolve a stored token to its identity
pub fn whoami(config: &Config, token: &str) -> Result<UserProfile, ApiError> {
    let request = Client::new()
        .get(config.api_url("/api/users/validate-user"))
        .bearer_auth(token);

    let body: ValidateResponse = execute(request)?;
    Ok(body.data)
}

/// Fetch all blog posts (public)
pub fn all_blogs(config: &Config) -> Result<Vec<BlogPost>, ApiError> {
    execute(Client::new().get(config.api_url("/api/blogs/all-blogs")))
}

/// Fetch a single blog post (public)
pub fn get_blog(config: &Config, id: Uuid) -> Result<BlogPost, ApiError> {
    execute(Client::new().get(config.api_url(&format!("/api/blogs/blog/{id}"))))
}

/// Create a blog post
pub fn create_blog(
    config: &Config,
    token: &str,
    title: String,
    content: String,
) -> Result<BlogPost, ApiError> {
    let request = Client::new()
        .post(config.api_url("/api/blogs/create"))
        .bearer_auth(token)
        .json(&CreateBlogRequest { title, content, author: None });

    let body: BlogEnvelope = execute(request)?;
    Ok(body.blog)
}

/// Update a blog post (author only)
pub fn update_blog(
    config: &Config,
    token: &str,
    id: Uuid,
    update: &UpdateBlogRequest,
) -> Result<BlogPost, ApiError> {
    let request = Client::new()
        .put(config.api_url(&format!("/api/blogs/edit/{id}")))
        .bearer_auth(token)
        .json(update);

    let body: BlogEnvelope = execute(request)?;
    Ok(body.blog)
}

/// Delete a blog post (author only)
pub fn delete_blog(config: &Config, token: &str, id: Uuid) -> Result<(), ApiError> {
    let request = Client::new()
        .delete(config.api_url(&format!("/api/blogs/delete/{id}")))
        .bearer_auth(token);

    execute::<MessageResponse>(request)?;
    Ok(())
}
