//! Backend Error Module
//!
//! The error taxonomy for the HTTP API and its conversion to responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Every handler returns `Result<_, ApiError>`; axum converts the error
//! into a `{success: false, message}` body with the matching status code.
//! Store and crypto internals are logged, never sent to clients.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
