//! Persisted login session.
//!
//! A session is the bearer token plus the user ID and role the backend
//! reported at login. It lives in localStorage under three plaintext keys and
//! is never refreshed.

use crate::net::types::Role;
use crate::util::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USER_ID_KEY: &str = "userId";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub role: Role,
}

impl Session {
    /// Read a session back from storage. All three keys must be present and
    /// non-blank.
    pub fn load(store: &impl KeyValueStore) -> Option<Self> {
        let token = non_blank(store.get(TOKEN_KEY))?;
        let user_id = non_blank(store.get(USER_ID_KEY))?;
        let role = Role::parse(&store.get(ROLE_KEY)?)?;
        Some(Self { token, user_id, role })
    }

    pub fn save(&self, store: &impl KeyValueStore) {
        store.set(TOKEN_KEY, &self.token);
        store.set(USER_ID_KEY, &self.user_id);
        store.set(ROLE_KEY, self.role.as_str());
    }

    pub fn clear(store: &impl KeyValueStore) {
        store.remove(TOKEN_KEY);
        store.remove(ROLE_KEY);
        store.remove(USER_ID_KEY);
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
