//! Authentication Handlers
//!
//! HTTP handlers for the user-facing authentication endpoints.
//!
//! - **`register`** - POST /api/users/register
//! - **`login`** - POST /api/users/login
//! - **`validate`** - GET /api/users/validate-user (behind the auth gate)

/// User registration handler
pub mod register;

/// Login handler
pub mod login;

/// Identity resolution handler
pub mod validate;

pub use login::login;
pub use register::register;
pub use validate::validate_user;
