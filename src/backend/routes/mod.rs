//! Routes Module
//!
//! Route table assembly for the HTTP server.

/// Router construction
pub mod router;

pub use router::create_router;
