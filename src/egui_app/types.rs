/**
 * Client Route Types
 *
 * The set of screens the client can show. Routes that require
 * authentication pass through the protected-route gate before rendering.
 */

use uuid::Uuid;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public feed of all posts
    Home,
    /// Login / registration screen
    Auth,
    /// One post, publicly readable
    Detail(Uuid),
    /// New post editor (protected)
    Create,
    /// Edit an existing post (protected)
    Edit(Uuid),
    /// The caller's own posts (protected)
    MyBlogs,
}

impl Route {
    /// Whether this route requires an authenticated session
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Create | Route::Edit(_) | Route::MyBlogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_routes() {
        assert!(Route::Create.is_protected());
        assert!(Route::Edit(Uuid::new_v4()).is_protected());
        assert!(Route::MyBlogs.is_protected());

        assert!(!Route::Home.is_protected());
        assert!(!Route::Auth.is_protected());
        assert!(!Route::Detail(Uuid::new_v4()).is_protected());
    }
}
