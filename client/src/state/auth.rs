//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<AuthState>` via context. Route guards and pages
//! read it to decide between rendering and redirecting; the login form, logout
//! buttons and 401 handling write it.
//!
//! LIFECYCLE
//! =========
//! State starts `loading` so SSR and the first client render never redirect.
//! Once mounted in the browser, `AuthState::initialize` restores a stored
//! session if its token has not expired, then clears `loading`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::jwt;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// Restore the session persisted in `store`.
    ///
    /// An expired or undecodable token yields an unauthenticated state and the
    /// stale keys are removed. Nothing is reported to the user.
    pub fn initialize(store: &impl KeyValueStore, now_ms: i64) -> Self {
        let session = Session::load(store).filter(|s| !jwt::is_token_expired(&s.token, now_ms));
        if session.is_none() {
            Session::clear(store);
        }
        Self { session, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<&Role> {
        self.session.as_ref().map(|s| &s.role)
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }

    /// Persist `session` and mark the tab authenticated.
    pub fn login(&mut self, session: Session, store: &impl KeyValueStore) {
        session.save(store);
        self.session = Some(session);
        self.loading = false;
    }

    /// Drop the session from memory and storage.
    pub fn logout(&mut self, store: &impl KeyValueStore) {
        Session::clear(store);
        self.session = None;
        self.loading = false;
    }

    /// Swap in a token reissued by the backend (e.g. after a username change).
    /// No-op when logged out.
    pub fn replace_token(&mut self, token: String, store: &impl KeyValueStore) {
        if let Some(session) = self.session.as_mut() {
            session.token = token;
            session.save(store);
        }
    }
}
