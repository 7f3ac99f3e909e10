/**
 * Postgres Store
 *
 * sqlx-backed implementation of the store trait. Migrations are embedded
 * and run at connect time.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::{BlogPatch, BlogRecord, NewBlog, NewUser, Store, StoreError, UserRecord};

/// Postgres-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database and run embedded migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await?;
        sqlx::migrate!().run(&pool).await.map_err(sqlx::Error::from)?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint violation to `StoreError::Duplicate`
fn map_insert_error(err: sqlx::Error, key: &str) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return StoreError::Duplicate(key.to_string());
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl Store for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &user.email))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_blog(&self, blog: NewBlog) -> Result<BlogRecord, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let record = sqlx::query_as::<_, BlogRecord>(
            r#"
            INSERT INTO blogs (id, title, content, author, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, content, author, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.author)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list_blogs(&self) -> Result<Vec<BlogRecord>, StoreError> {
        let blogs = sqlx::query_as::<_, BlogRecord>(
            r#"
            SELECT id, title, content, author, created_at, updated_at
            FROM blogs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(blogs)
    }

    async fn find_blog_by_id(&self, id: Uuid) -> Result<Option<BlogRecord>, StoreError> {
        let blog = sqlx::query_as::<_, BlogRecord>(
            r#"
            SELECT id, title, content, author, created_at, updated_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(blog)
    }

    async fn update_blog(
        &self,
        id: Uuid,
        patch: BlogPatch,
    ) -> Result<Option<BlogRecord>, StoreError> {
        let now = Utc::now();

        // COALESCE keeps the stored value for fields the patch leaves unset.
        let blog = sqlx::query_as::<_, BlogRecord>(
            r#"
            UPDATE blogs
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                updated_at = $4
            WHERE id = $1
            RETURNING id, title, content, author, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(blog)
    }

    async fn delete_blog(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
