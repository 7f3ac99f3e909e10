//! Server Module
//!
//! Configuration, shared state, and startup for the HTTP server.

/// Environment-driven configuration
pub mod config;

/// Application assembly
pub mod init;

/// Shared application state
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;
