//! Blogs Module
//!
//! Handlers for the blog endpoints. Reads are public; create requires an
//! authenticated caller; edit and delete additionally require that the
//! caller is the recorded author.

/// HTTP handlers for blog endpoints
pub mod handlers;

pub use handlers::{create_blog, delete_blog, edit_blog, get_blog, list_blogs};
