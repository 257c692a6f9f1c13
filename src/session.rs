//! Session credential storage
//!
//! The bearer token lives in a key/value store under a fixed key. Its presence
//! is the only authorization signal checked client-side.

use crate::types::{AuthResponse, Result, Role};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key of the role returned at login
pub const ROLE_KEY: &str = "role";

/// Persistent key/value storage for session data.
///
/// Implemented by browser local storage in the UI and by a JSON file in the
/// terminal client.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str);
}

/// In-memory store
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.values.lock().insert(TOKEN_KEY.to_string(), token.to_string());
        store
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.lock().remove(key);
    }
}

/// Handle over the stored credential
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    token_key: Arc<str>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self::with_key(store, TOKEN_KEY)
    }

    /// Use a non-default key for the token
    pub fn with_key(store: Arc<dyn TokenStore>, token_key: &str) -> Self {
        Self {
            store,
            token_key: Arc::from(token_key),
        }
    }

    /// Session backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(&self.token_key).filter(|t| !t.is_empty())
    }

    pub fn role(&self) -> Option<Role> {
        self.store.get(ROLE_KEY).and_then(|r| Role::parse(&r))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a successful login
    pub fn save(&self, auth: &AuthResponse) -> Result<()> {
        self.store.set(&self.token_key, &auth.token)?;
        match auth.role {
            Some(role) => self.store.set(ROLE_KEY, role.as_str())?,
            None => self.store.remove(ROLE_KEY),
        }
        tracing::debug!(role = ?auth.role, "Session saved");
        Ok(())
    }

    pub fn clear(&self) {
        self.store.remove(&self.token_key);
        self.store.remove(ROLE_KEY);
        tracing::debug!("Session cleared");
    }

    /// Where a signed-in user lands. Unknown roles go to the client dashboard.
    pub fn landing_path(&self) -> &'static str {
        self.role().unwrap_or(Role::Client).dashboard_path()
    }
}
