//! Authentication Module
//!
//! User registration, credential verification, and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── tokens.rs       - Token service (issue/verify)
//! └── handlers/       - HTTP handlers
//!     ├── register.rs - User registration
//!     ├── login.rs    - Credential verification and token issuance
//!     └── validate.rs - Resolve a bearer token to its identity
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name + email + password -> user created
//! 2. **Login**: credentials verified -> signed token returned
//! 3. **Validate**: bearer token verified by the middleware -> identity returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are stateless; the server re-derives identity from the
//!   signature on every request
//! - Bad credentials never reveal whether the email exists

/// Token issuance and verification
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register, validate_user};
pub use tokens::{TokenError, TokenService};
