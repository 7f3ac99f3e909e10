/**
 * In-Memory Store
 *
 * HashMap-backed implementation of the store trait. Used by the test suite
 * and as the degraded-mode fallback when no DATABASE_URL is configured, so
 * the server always starts.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BlogPatch, BlogRecord, NewBlog, NewUser, Store, StoreError, UserRecord};

/// In-memory store backed by `RwLock`ed maps
///
/// Cloning shares the underlying maps, mirroring how a connection pool is
/// shared across request handlers.
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<HashMap<Uuid, UserRecord>>>,
    blogs: Arc<RwLock<HashMap<Uuid, BlogRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(user.email));
        }
        let record = UserRecord {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn insert_blog(&self, blog: NewBlog) -> Result<BlogRecord, StoreError> {
        let now = Utc::now();
        let record = BlogRecord {
            id: Uuid::new_v4(),
            title: blog.title,
            content: blog.content,
            author: blog.author,
            created_at: now,
            updated_at: now,
        };
        self.blogs.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list_blogs(&self) -> Result<Vec<BlogRecord>, StoreError> {
        let blogs = self.blogs.read().await;
        let mut all: Vec<BlogRecord> = blogs.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_blog_by_id(&self, id: Uuid) -> Result<Option<BlogRecord>, StoreError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.get(&id).cloned())
    }

    async fn update_blog(
        &self,
        id: Uuid,
        patch: BlogPatch,
    ) -> Result<Option<BlogRecord>, StoreError> {
        let mut blogs = self.blogs.write().await;
        let Some(record) = blogs.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            record.title = title;
        }
        if let Some(content) = patch.content {
            record.content = content;
        }
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }

    async fn delete_blog(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.blogs.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Test".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    fn new_blog(author: &str) -> NewBlog {
        NewBlog {
            title: "Title".to_string(),
            content: "Content".to_string(),
            author: author.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_user() {
        let store = MemoryStore::new();
        let created = store.insert_user(new_user("a@x.com")).await.unwrap();

        let by_email = store.find_user_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);

        let by_id = store.find_user_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryStore::new();
        store.insert_user(new_user("a@x.com")).await.unwrap();

        let result = store.insert_user(new_user("a@x.com")).await;
        assert!(matches!(result, Err(StoreError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_find_missing_user() {
        let store = MemoryStore::new();
        assert!(store.find_user_by_id(Uuid::new_v4()).await.unwrap().is_none());
        assert!(store.find_user_by_email("nobody@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_blogs_newest_first() {
        let store = MemoryStore::new();
        let first = store.insert_blog(new_blog("a@x.com")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = store.insert_blog(new_blog("a@x.com")).await.unwrap();

        let all = store.list_blogs().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }

    #[tokio::test]
    async fn test_patch_none_keeps_stored_value() {
        let store = MemoryStore::new();
        let blog = store.insert_blog(new_blog("a@x.com")).await.unwrap();

        let patch = BlogPatch { title: Some("Changed".to_string()), content: None };
        let updated = store.update_blog(blog.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.title, "Changed");
        assert_eq!(updated.content, "Content");
        assert_eq!(updated.author, "a@x.com");
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_blog() {
        let store = MemoryStore::new();
        let result = store.update_blog(Uuid::new_v4(), BlogPatch::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_blog_twice() {
        let store = MemoryStore::new();
        let blog = store.insert_blog(new_blog("a@x.com")).await.unwrap();

        assert!(store.delete_blog(blog.id).await.unwrap());
        assert!(!store.delete_blog(blog.id).await.unwrap());
    }
}
