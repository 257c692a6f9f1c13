//! Session storage in `window.localStorage`

use gloo_storage::{LocalStorage, Storage};
use teamsync::types::{AppError, Result};
use teamsync::TokenStore;

/// Raw string values, so the token is readable by anything else on the page
/// under the plain `token` key.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageStore;

impl TokenStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}
