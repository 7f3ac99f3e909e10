//! Credential Store
//!
//! The persistence collaborator for user and blog records. The core only
//! ever talks to it through the [`Store`] trait: find/insert/update/delete
//! by id. Two implementations exist:
//!
//! - **`postgres`** - sqlx/Postgres, used in production
//! - **`memory`** - in-process maps, used in tests and as the fallback when
//!   no database is configured
//!
//! Single-record updates are atomic in both implementations; nothing in
//! this application needs a cross-record transaction. Concurrent edits to
//! the same blog are last-write-wins.

/// In-memory implementation
pub mod memory;

/// Postgres implementation
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Stored user identity
///
/// Immutable after registration. The password hash never leaves the
/// backend; wire types carry [`crate::shared::UserProfile`] instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Stored blog post
///
/// `author` is the creating user's email, recorded at creation and never
/// changed by any operation.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Fields for inserting a new blog post
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Partial update for a blog post: `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Store-level failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unique-key violation on insert (duplicate email)
    #[error("record already exists: {0}")]
    Duplicate(String),
}

/// Minimal record interface the core depends on
///
/// Implementations must provide their own atomicity for a single record
/// update; callers never hold locks across calls.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError>;

    async fn insert_blog(&self, blog: NewBlog) -> Result<BlogRecord, StoreError>;
    /// All blog posts, newest first
    async fn list_blogs(&self) -> Result<Vec<BlogRecord>, StoreError>;
    async fn find_blog_by_id(&self, id: Uuid) -> Result<Option<BlogRecord>, StoreError>;
    /// Apply a partial update; returns `None` if the id does not exist
    async fn update_blog(&self, id: Uuid, patch: BlogPatch)
        -> Result<Option<BlogRecord>, StoreError>;
    /// Returns `true` if a record was deleted, `false` if the id was unknown
    async fn delete_blog(&self, id: Uuid) -> Result<bool, StoreError>;
}
