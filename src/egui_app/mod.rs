//! Native Desktop Client (egui/eframe)
//!
//! The BlogIT client. All identity handling flows through one place: the
//! [`session::SessionController`] owns the stored token and the resolved
//! identity, and every view reads it instead of re-deriving identity on
//! its own. Views that require authentication are wrapped by the
//! [`guard`] route gate.
//!
//! # Module Structure
//!
//! - **`config`** - server URL configuration
//! - **`token_store`** - durable token persistence
//! - **`api`** - typed HTTP client for the server API
//! - **`session`** - session controller (identity state machine)
//! - **`guard`** - protected-route gate
//! - **`types`** - client-side routes
//! - **`state`** - central application state and background jobs
//! - **`theme`** - color palette
//! - **`views`** - screens

/// Server URL configuration
pub mod config;

/// Durable token persistence
pub mod token_store;

/// HTTP client functions
pub mod api;

/// Session controller
pub mod session;

/// Protected-route gate
pub mod guard;

/// Client route types
pub mod types;

/// Central application state
pub mod state;

/// Color palette
pub mod theme;

/// Screens
pub mod views;

pub use config::Config;
pub use session::{Session, SessionController};
pub use state::AppState;
pub use token_store::TokenStore;
pub use types::Route;
