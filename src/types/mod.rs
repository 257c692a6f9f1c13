use serde::{Deserialize, Serialize};

// ============= Roles =============

/// Role tag carried by user accounts and returned at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Developer,
    #[serde(alias = "USER")]
    Client,
}

impl Role {
    /// Wire form, as stored in the session.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Developer => "DEVELOPER",
            Role::Client => "CLIENT",
        }
    }

    /// Parse the stored/wire form. `USER` is accepted for clients.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Role::Admin),
            "DEVELOPER" => Some(Role::Developer),
            "CLIENT" | "USER" => Some(Role::Client),
            _ => None,
        }
    }

    /// Path of the dashboard this role lands on.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Developer => "/developer",
            Role::Client => "/user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============= Entities =============

/// Project lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectStatus {
    #[default]
    Ongoing,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "ONGOING",
            ProjectStatus::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Developer, client or admin account as returned by the backend.
///
/// The password is write-only and never deserialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: Option<Role>,
}

pub type Developer = UserAccount;
pub type Client = UserAccount;

/// Admin profile with aggregate counters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub total_projects: u64,
    #[serde(default)]
    pub total_clients: u64,
    #[serde(default)]
    pub total_developers: u64,
    #[serde(default)]
    pub completed_projects: u64,
}

/// Project with its client and developers
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub client: Option<Client>,
    #[serde(default)]
    pub developers: Vec<Developer>,
}

/// Minimal reference to a project embedded in other records
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectRef {
    pub id: i64,
    #[serde(default)]
    pub title: String,
}

/// Task belonging to a project
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub developer: Option<Developer>,
}

// ============= Request Bodies =============

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

/// Authentication response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Create/update body for a project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    pub developer_ids: Vec<i64>,
}

/// Create/update body for a developer or client account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Profile update body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Create body for a task
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub title: String,
    pub description: String,
    pub project_id: i64,
    pub developer_id: i64,
}

/// Full-update body used to flip a task's completion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    pub completed: bool,
}

/// Body for the dedicated completion endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCompletion {
    pub completed: bool,
}

/// Error body returned by the backend
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.is_empty())
    }
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// HTTP status for backend errors
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
