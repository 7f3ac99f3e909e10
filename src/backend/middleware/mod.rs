//! Middleware Module
//!
//! HTTP middleware applied before handlers run. Currently one member: the
//! authentication gate protecting mutating and identity routes.

/// Authentication gate
pub mod auth;

pub use auth::{require_auth, AuthUser, CurrentUser};
