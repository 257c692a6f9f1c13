//! # TeamSync
//!
//! Client core for the contractual team task-sync backend: a role-based
//! project manager with admin, developer and client dashboards.
//!
//! ## Overview
//!
//! The crate is platform-neutral. The browser UI (`ui/`, Leptos) and the
//! `teamsync` terminal client both build on it:
//!
//! - [`api::ApiClient`] resolves paths against one backend origin, attaches the
//!   stored bearer token and reports every call to a [`loader::RequestTracker`].
//! - [`guard::RouteGuard`] decides whether a protected route renders or
//!   redirects to the login page.
//! - [`dashboard`] and [`project_detail`] pair an async service (loads and
//!   mutations, each mutation followed by a full re-fetch) with a synchronous
//!   view the UI renders from.
//! - [`lifetime::ViewScope`] cancels a view's outstanding requests when it
//!   unmounts.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use teamsync::{ApiClient, ReqwestTransport, Session};
//! use teamsync::dashboard::{UserService, UserView};
//!
//! let api = ApiClient::new(
//!     teamsync::config::DEFAULT_API_BASE,
//!     Arc::new(ReqwestTransport::new()),
//!     Session::in_memory(),
//! );
//!
//! let mut view = UserView::new();
//! view.finish_initial_load(UserService::new(api).load().await);
//! for project in view.filtered_projects() {
//!     println!("{} [{}]", project.title, project.status);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `native` | reqwest-backed [`api::Transport`] (default) |
//! | `cli` | the `teamsync` terminal client (default) |
//!
//! Build with `default-features = false` for `wasm32-unknown-unknown`.

/// HTTP client wrapper and transports.
pub mod api;
/// Login, registration and logout.
pub mod auth;
/// Terminal client.
#[cfg(feature = "cli")]
pub mod cli;
/// Client configuration.
pub mod config;
/// Admin, developer and client dashboards.
pub mod dashboard;
/// Tab filters.
pub mod filter;
/// Entity modals and forms.
pub mod forms;
/// Client routes and the route guard.
pub mod guard;
/// Cancellation tied to view lifetime.
pub mod lifetime;
/// Global loading indicator.
pub mod loader;
/// Project detail view.
pub mod project_detail;
/// Generic list resources.
pub mod resource;
/// Session credential storage.
pub mod session;
/// Task operations.
pub mod tasks;
/// Entities, request bodies and errors.
pub mod types;

// Re-export commonly used types
#[cfg(feature = "native")]
pub use api::ReqwestTransport;
pub use api::{ApiClient, HttpRequest, HttpResponse, Method, Transport};
pub use config::ClientConfig;
pub use guard::{GuardOutcome, Route, RouteGuard};
pub use lifetime::ViewScope;
pub use loader::RequestTracker;
pub use resource::{Confirm, ListState, Resource, Submission};
pub use session::{MemoryStore, Session, TokenStore};
pub use types::{AppError, Result};
