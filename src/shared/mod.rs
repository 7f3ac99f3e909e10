//! Shared Types Module
//!
//! Types that cross the wire between the egui client and the axum server.
//! Both binaries serialize and deserialize the same structs, so the two
//! sides cannot drift apart.

/// Request and response bodies for the HTTP API
pub mod types;

pub use types::{
    BlogEnvelope, BlogPost, CreateBlogRequest, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, UpdateBlogRequest, UserProfile, ValidateResponse,
};
