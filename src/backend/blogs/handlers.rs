/**
 * Blog Handlers
 *
 * - GET    /api/blogs/all-blogs    - list all posts, newest first (public)
 * - GET    /api/blogs/blog/{id}    - fetch one post (public)
 * - POST   /api/blogs/create       - create a post (authenticated)
 * - PUT    /api/blogs/edit/{id}    - partial update (author only)
 * - DELETE /api/blogs/delete/{id}  - delete (author only)
 *
 * # Ownership Authorization
 *
 * Every mutating path on an existing post runs the same policy: load the
 * post (404 if missing, before any identity comparison), compare its
 * recorded author to the identity resolved by the auth gate, 403 on
 * mismatch. The author field is written once at creation from the resolved
 * identity and never changes afterwards.
 */

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::middleware::{AuthUser, CurrentUser};
use crate::backend::server::state::AppState;
use crate::backend::store::{BlogPatch, BlogRecord, NewBlog};
use crate::shared::{BlogEnvelope, BlogPost, CreateBlogRequest, MessageResponse, UpdateBlogRequest};

impl From<BlogRecord> for BlogPost {
    fn from(record: BlogRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            author: record.author,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Load a post and check the caller is its author
///
/// The shared ownership policy for edit and delete.
async fn load_owned_blog(
    state: &AppState,
    id: Uuid,
    user: &CurrentUser,
) -> Result<BlogRecord, ApiError> {
    let blog = state
        .store
        .find_blog_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("blog"))?;

    if blog.author != user.email {
        tracing::warn!("{} attempted to modify blog {} owned by {}", user.email, id, blog.author);
        return Err(ApiError::Forbidden);
    }

    Ok(blog)
}

/// List all blog posts, newest first
pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let blogs = state.store.list_blogs().await?;
    Ok(Json(blogs.into_iter().map(BlogPost::from).collect()))
}

/// Fetch a single blog post
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPost>, ApiError> {
    let blog = state
        .store
        .find_blog_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("blog"))?;

    Ok(Json(blog.into()))
}

/// Create a blog post
///
/// The `author` field in the request body is ignored; the recorded author
/// is always the authenticated identity's email.
pub async fn create_blog(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogEnvelope>), ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::validation("title is required"));
    }
    if request.content.trim().is_empty() {
        return Err(ApiError::validation("content is required"));
    }

    let blog = state
        .store
        .insert_blog(NewBlog {
            title: request.title,
            content: request.content,
            author: user.email.clone(),
        })
        .await?;

    tracing::info!("blog {} created by {}", blog.id, user.email);

    Ok((StatusCode::CREATED, Json(BlogEnvelope { blog: blog.into() })))
}

/// Partially update a blog post (author only)
///
/// Fields left out of the request keep their stored values; a field that
/// is present but blank is rejected, preserving the non-empty invariants.
pub async fn edit_blog(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBlogRequest>,
) -> Result<Json<BlogEnvelope>, ApiError> {
    load_owned_blog(&state, id, &user).await?;

    if matches!(request.title.as_deref(), Some(t) if t.trim().is_empty()) {
        return Err(ApiError::validation("title cannot be empty"));
    }
    if matches!(request.content.as_deref(), Some(c) if c.trim().is_empty()) {
        return Err(ApiError::validation("content cannot be empty"));
    }

    let patch = BlogPatch { title: request.title, content: request.content };
    let blog = state
        .store
        .update_blog(id, patch)
        .await?
        .ok_or(ApiError::NotFound("blog"))?;

    tracing::info!("blog {} edited by {}", id, user.email);

    Ok(Json(BlogEnvelope { blog: blog.into() }))
}

/// Delete a blog post (author only)
///
/// Deleting an id that does not exist is 404, never a silent success.
pub async fn delete_blog(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    load_owned_blog(&state, id, &user).await?;

    if !state.store.delete_blog(id).await? {
        return Err(ApiError::NotFound("blog"));
    }

    tracing::info!("blog {} deleted by {}", id, user.email);

    Ok(Json(MessageResponse::ok()))
}
