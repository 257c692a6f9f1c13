//! Global application state

use crate::storage::LocalStorageStore;
use crate::transport::GlooTransport;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::Arc;
use teamsync::auth::AuthService;
use teamsync::types::{AuthResponse, Result, Role};
use teamsync::{ApiClient, ClientConfig, RequestTracker, RouteGuard, Session, ViewScope};

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Backend client shared by every page
    pub api: ApiClient,
    pub config: Arc<ClientConfig>,
    pub guard: RouteGuard,
    /// True while any request is in flight
    pub is_loading: RwSignal<bool>,
    /// Mirrors the stored token so the header re-renders on sign in/out
    pub authenticated: RwSignal<bool>,
    pub role: RwSignal<Option<Role>>,
}

impl AppState {
    pub fn new() -> Self {
        let config = ClientConfig::default();
        let session = Session::with_key(Arc::new(LocalStorageStore), &config.token_key);

        let is_loading = RwSignal::new(false);
        let tracker = RequestTracker::new();
        tracker.subscribe(move |loading| is_loading.set(loading));

        let api = ApiClient::new(&config.api_base, Arc::new(GlooTransport), session.clone())
            .with_tracker(tracker);

        Self {
            guard: RouteGuard::new(config.role_policy),
            config: Arc::new(config),
            api,
            is_loading,
            authenticated: RwSignal::new(session.is_authenticated()),
            role: RwSignal::new(session.role()),
        }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.api.clone())
    }

    /// Reflect a successful login already persisted by [`AuthService`]
    pub fn signed_in(&self, auth: &AuthResponse) {
        self.authenticated.set(true);
        self.role.set(auth.role);
    }

    pub fn sign_out(&self) {
        self.auth().logout();
        self.authenticated.set(false);
        self.role.set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Blocking confirmation dialog
pub fn confirm(prompt: &str) -> bool {
    window().confirm_with_message(prompt).unwrap_or(false)
}

/// Blocking alert for failed mutations
pub fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        tracing::warn!("Alert suppressed: {}", message);
    }
}

/// Run `fut` under the page's scope and hand its value to `apply`.
///
/// Cancelled work is dropped silently. Other failures are logged and shown in
/// an alert; the page keeps its previous data.
pub fn spawn_scoped<T, F>(scope: &ViewScope, fut: F, apply: impl FnOnce(T) + 'static)
where
    T: 'static,
    F: Future<Output = Result<T>> + 'static,
{
    let scope = scope.clone();
    spawn_local(async move {
        match scope.run(fut).await {
            Ok(value) => apply(value),
            Err(e) if e.is_cancelled() => {}
            Err(e) => {
                tracing::error!("Request failed: {}", e);
                alert(&e.to_string());
            }
        }
    });
}
