//! Client configuration
//!
//! Defaults target the hosted backend. The terminal client layers an optional
//! `teamsync.toml` and `TEAMSYNC_*` environment variables on top.

use crate::guard::RolePolicy;
use crate::project_detail::ProjectLookup;
use crate::session::TOKEN_KEY;
use crate::tasks::TaskToggle;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://contractual-team-task-sync-backend.onrender.com";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin every path is resolved against
    pub api_base: String,
    /// Storage key of the bearer token
    pub token_key: String,
    pub role_policy: RolePolicy,
    pub task_toggle: TaskToggle,
    pub project_lookup: ProjectLookup,
    /// Session file used by the terminal client
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token_key: TOKEN_KEY.to_string(),
            role_policy: RolePolicy::default(),
            task_toggle: TaskToggle::default(),
            project_lookup: ProjectLookup::default(),
            session_file: PathBuf::from(".teamsync/session.json"),
        }
    }
}

#[cfg(feature = "cli")]
impl ClientConfig {
    /// Load from an optional TOML file, then `TEAMSYNC_*` env vars.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn load(path: &std::path::Path) -> crate::types::Result<Self> {
        use crate::types::AppError;

        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("TEAMSYNC"))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let config: ClientConfig = settings
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))?;
        tracing::debug!(api_base = %config.api_base, "Configuration loaded");
        Ok(config)
    }
}
