//! Role dashboards
//!
//! Each dashboard is split into a service (async loads and mutations, each
//! mutation followed by a full re-fetch) and a view (synchronous state the UI
//! renders from). Views move `InitialLoad → Ready` once and stay `Ready`;
//! failures are logged and leave the previous data in place.

pub mod admin;
pub mod developer;
pub mod user;

pub use admin::{AdminData, AdminService, AdminStats, AdminTab, AdminView};
pub use developer::{DeveloperData, DeveloperService, DeveloperView};
pub use user::{UserService, UserView};

use crate::types::Result;

/// Lifecycle of a mounted dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    InitialLoad,
    Ready,
}

/// Log a failed load and keep going
pub(crate) fn settle<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_cancelled() => None,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", what, e);
            None
        }
    }
}

/// First letter of a display name, for avatar badges
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
