/**
 * Protected-Route Gate
 *
 * Decides what to do with a view that requires authentication, from the
 * session controller's current state. Pure: no IO, no side effects; the
 * app shell acts on the outcome every frame, so the check re-runs on
 * every navigation and the latest session resolution always wins.
 */

use crate::egui_app::session::Session;

/// Gate outcome for a protected view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Session still resolving: render a neutral loading state, no
    /// content and no redirect, to avoid a redirect flash
    Pending,
    /// Authenticated: render the wrapped view
    Allow,
    /// Anonymous: redirect to login and render nothing
    Deny,
}

/// Check a protected view against the current session state
pub fn check(session: &Session) -> Gate {
    match session {
        Session::Unknown => Gate::Pending,
        Session::Authenticated(_) => Gate::Allow,
        Session::Anonymous => Gate::Deny,
    }
}
