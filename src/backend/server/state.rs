/**
 * Application State
 *
 * Central state container cloned into every request handler. Holds the
 * store behind its trait and the token service; both are internally
 * shareable, so cloning is cheap.
 *
 * Neither the auth gate nor the ownership checks touch any other shared
 * mutable state: requests are handled independently and concurrently.
 */

use std::sync::Arc;

use crate::backend::auth::TokenService;
use crate::backend::store::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Credential store (users and blogs)
    pub store: Arc<dyn Store>,
    /// Session token issuance and verification
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }
}
