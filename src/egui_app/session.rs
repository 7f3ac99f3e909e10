/**
 * Session Controller
 *
 * The single source of truth for the client's identity. Every screen reads
 * this controller; none of them re-derives identity on its own.
 *
 * # State Machine
 *
 * - `Unknown`       - a stored token exists but has not been validated yet
 * - `Anonymous`     - no valid token
 * - `Authenticated` - the server resolved the stored token to an identity
 *
 * Resolution calls the whoami endpoint on a background thread and the
 * result is applied on the next UI frame. Every transition bumps a
 * generation counter, and a resolution result is only applied if its
 * generation is still current: a whoami response that lands after a
 * logout is discarded instead of resurrecting the session.
 */

use std::sync::mpsc::{channel, Receiver};

use crate::egui_app::api::{self, ApiError};
use crate::egui_app::config::Config;
use crate::egui_app::token_store::TokenStore;
use crate::shared::UserProfile;

/// Resolved session state
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    /// Not yet resolved; render a neutral loading state
    Unknown,
    /// No valid token
    Anonymous,
    /// Token resolved to this identity
    Authenticated(UserProfile),
}

type Resolution = (u64, Result<UserProfile, ApiError>);

/// Owns the stored token and the resolved identity
pub struct SessionController {
    config: Config,
    store: TokenStore,
    session: Session,
    /// In-memory copy of the stored token, attached to API calls
    token: Option<String>,
    /// Bumped on login/logout; stale resolutions are discarded
    generation: u64,
    pending: Option<Receiver<Resolution>>,
}

impl SessionController {
    /// Rehydrate from the token store
    ///
    /// With no stored token the session is immediately `Anonymous`; with
    /// one, it starts `Unknown` and the first [`poll`](Self::poll) kicks
    /// off resolution.
    pub fn new(config: Config, store: TokenStore) -> Self {
        let token = store.load();
        let session = if token.is_some() { Session::Unknown } else { Session::Anonymous };
        Self { config, store, session, token, generation: 0, pending: None }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The identity, when authenticated
    pub fn current_user(&self) -> Option<&UserProfile> {
        match &self.session {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The stored token, for attaching to API calls
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Drive the state machine; call once per frame
    pub fn poll(&mut self) {
        // Kick off resolution for a stored-but-unvalidated token.
        if self.session == Session::Unknown && self.pending.is_none() {
            match self.token.clone() {
                Some(token) => self.spawn_resolution(token),
                None => self.session = Session::Anonymous,
            }
        }

        let Some(rx) = &self.pending else { return };
        if let Ok((generation, result)) = rx.try_recv() {
            self.pending = None;
            self.apply_resolution(generation, result);
        }
    }

    /// A login succeeded with this freshly issued token
    ///
    /// The token is persisted and the identity re-resolved through whoami;
    /// until that lands the session shows `Unknown`.
    pub fn login_succeeded(&mut self, token: String) {
        self.store.save(&token);
        self.token = Some(token.clone());
        self.generation += 1;
        self.session = Session::Unknown;
        self.spawn_resolution(token);
    }

    /// Explicit logout: discard the token and go anonymous unconditionally
    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
        self.generation += 1;
        self.pending = None;
        self.session = Session::Anonymous;
    }

    /// A request was rejected as unauthenticated
    ///
    /// The stored token is no longer valid; same cleanup as logout.
    pub fn auth_failed(&mut self) {
        tracing::warn!("server rejected stored token, clearing session");
        self.logout();
    }

    fn spawn_resolution(&mut self, token: String) {
        let generation = self.generation;
        let config = self.config.clone();
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let result = api::whoami(&config, &token);
            let _ = tx.send((generation, result));
        });

        self.pending = Some(rx);
    }

    /// Apply a resolution result, unless it is stale
    fn apply_resolution(&mut self, generation: u64, result: Result<UserProfile, ApiError>) {
        if generation != self.generation {
            tracing::debug!("discarding stale session resolution");
            return;
        }

        match result {
            Ok(user) => {
                tracing::info!("session resolved for {}", user.email);
                self.session = Session::Authenticated(user);
            }
            Err(e) => {
                tracing::warn!("session resolution failed: {e}");
                self.store.clear();
                self.token = None;
                self.session = Session::Anonymous;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn profile(email: &str) -> UserProfile {
        UserProfile { id: Uuid::new_v4(), name: "Test".to_string(), email: email.to_string() }
    }

    fn controller_with_token(dir: &std::path::Path, token: Option<&str>) -> SessionController {
        let store = TokenStore::at(dir);
        if let Some(token) = token {
            store.save(token);
        }
        SessionController::new(Config::with_server_url("http://127.0.0.1:9"), store)
    }

    #[test]
    fn test_no_token_resolves_anonymous_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_with_token(dir.path(), None);

        assert_eq!(*controller.session(), Session::Anonymous);
        controller.poll();
        assert_eq!(*controller.session(), Session::Anonymous);
        assert!(controller.token().is_none());
    }

    #[test]
    fn test_stored_token_starts_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_with_token(dir.path(), Some("stored.token"));

        assert_eq!(*controller.session(), Session::Unknown);
        assert_eq!(controller.token(), Some("stored.token"));
    }

    #[test]
    fn test_successful_resolution_authenticates() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_with_token(dir.path(), Some("stored.token"));

        controller.apply_resolution(0, Ok(profile("a@x.com")));
        assert_eq!(controller.current_user().unwrap().email, "a@x.com");
    }

    #[test]
    fn test_failed_resolution_clears_token() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_with_token(dir.path(), Some("stored.token"));

        controller.apply_resolution(0, Err(ApiError::Unauthenticated));
        assert_eq!(*controller.session(), Session::Anonymous);
        assert!(controller.token().is_none());
        assert!(TokenStore::at(dir.path()).load().is_none());
    }

    #[test]
    fn test_stale_resolution_discarded_after_logout() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_with_token(dir.path(), Some("stored.token"));

        // Logout races ahead of an in-flight whoami.
        controller.logout();
        controller.apply_resolution(0, Ok(profile("a@x.com")));

        // The late success must not resurrect the session.
        assert_eq!(*controller.session(), Session::Anonymous);
        assert!(controller.token().is_none());
    }

    #[test]
    fn test_login_with_different_identity_invalidates_previous_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_with_token(dir.path(), Some("old.token"));

        controller.login_succeeded("new.token".to_string());

        // A resolution from before the login (generation 0) is stale.
        controller.apply_resolution(0, Ok(profile("old@x.com")));
        assert_eq!(*controller.session(), Session::Unknown);

        // The resolution for the new token applies.
        controller.apply_resolution(1, Ok(profile("new@x.com")));
        assert_eq!(controller.current_user().unwrap().email, "new@x.com");
        assert_eq!(TokenStore::at(dir.path()).load().as_deref(), Some("new.token"));
    }

    #[test]
    fn test_logout_clears_stored_token() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_with_token(dir.path(), Some("stored.token"));

        controller.logout();
        assert_eq!(*controller.session(), Session::Anonymous);
        assert!(TokenStore::at(dir.path()).load().is_none());
    }
}
