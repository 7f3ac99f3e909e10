/**
 * Shared Wire Types
 *
 * Request and response bodies for every API endpoint. The server builds its
 * responses from these types and the client parses into them.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public view of a user identity
///
/// Safe to return to clients: never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Server-assigned user id
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Unique email address
    pub email: String,
}

/// Public view of a blog post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    /// Server-assigned post id
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Email of the creating user, recorded at creation and immutable
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration request
///
/// Contains the name, email and password for user registration. Fields
/// default to empty so a missing field fails validation (400) rather than
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Plain password; hashed before storage, never stored as-is
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
///
/// Bad credentials are reported with `success: false` and no token rather
/// than an error status, so the client can render an inline message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response carrying the resolved identity for `GET /api/users/validate-user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub success: bool,
    pub data: UserProfile,
}

/// Generic success/failure envelope
///
/// Used for registration, deletion, and every error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MessageResponse {
    pub fn ok() -> Self {
        Self { success: true, message: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()) }
    }
}

/// Create-blog request
///
/// `author` is accepted for wire compatibility with older clients but the
/// server always records the authenticated identity's email instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Partial update for a blog post
///
/// Each field is either set (`Some`) or unchanged (`None`). Omitted JSON
/// fields deserialize to `None`, so a client sending only a new title
/// leaves the content untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Envelope wrapping a single blog post in create/edit responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogEnvelope {
    pub blog: BlogPost,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_update_request_missing_fields_deserialize_to_none() {
        let req: UpdateBlogRequest = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("New"));
        assert!(req.content.is_none());

        let req: UpdateBlogRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
        assert!(req.content.is_none());
    }

    #[test]
    fn test_login_response_omits_absent_token() {
        let resp = LoginResponse { success: false, token: None, message: Some("no".into()) };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("token"));
    }

    #[test]
    fn test_user_profile_round_trip() {
        let profile = UserProfile {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        };
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
