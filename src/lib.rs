//! BlogIT - Main Library
//!
//! BlogIT is a small multi-user publishing application: users register,
//! authenticate, and author text posts that are publicly readable but
//! privately mutable by their author.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Wire types shared between the client and the server
//!   - Request/response bodies for every API endpoint
//!   - The public user profile and blog post representations
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with bearer-token authentication middleware
//!   - Ownership authorization on every mutating blog endpoint
//!   - Credential store behind a minimal record trait (Postgres or in-memory)
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!   - Session controller holding the authenticated identity
//!   - Protected-route gate for author-only views
//!   - Typed HTTP client for the server API
//!
//! # Authentication Flow
//!
//! 1. **Register**: name + email + password -> user created
//! 2. **Login**: email + password verified -> signed token returned
//! 3. **Validate**: bearer token verified -> resolved identity returned
//!
//! Every protected request passes the auth middleware, which verifies the
//! token signature and resolves the embedded user id against the store
//! before any handler runs.

/// Wire types shared between frontend and backend
pub mod shared;

/// Server-side code (axum HTTP server)
pub mod backend;

/// Native desktop client (egui/eframe)
pub mod egui_app;
