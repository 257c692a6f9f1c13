//! Client routes and the route guard
//!
//! The guard only checks that a credential token is stored. A required role
//! can be named per route; under the default [`RolePolicy::Advisory`] a
//! mismatch is logged and the view still renders.

use crate::session::Session;
use crate::types::Role;
use serde::Deserialize;

/// Login entry point used for redirects
pub const LOGIN_PATH: &str = "/login";

/// Client-visible routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    User,
    Developer,
    Admin,
    AdminProject(i64),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => LOGIN_PATH.to_string(),
            Route::Register => "/register".to_string(),
            Route::User => "/user".to_string(),
            Route::Developer => "/developer".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::AdminProject(id) => format!("/admin/project/{}", id),
        }
    }

    /// Match a path against the route table
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/user" => Some(Route::User),
            "/developer" => Some(Route::Developer),
            "/admin" => Some(Route::Admin),
            other => other
                .strip_prefix("/admin/project/")
                .and_then(|id| id.parse().ok())
                .map(Route::AdminProject),
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::User | Route::Developer | Route::Admin | Route::AdminProject(_)
        )
    }

    /// Role named by the route table. Only the project detail page names one.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::AdminProject(_) => Some(Role::Admin),
            _ => None,
        }
    }
}

/// How a role mismatch is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RolePolicy {
    /// Log the mismatch and render anyway
    #[default]
    Advisory,
    /// Send the user to their own dashboard
    Enforce,
}

/// Terminal state of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(String),
}

impl GuardOutcome {
    pub fn is_render(&self) -> bool {
        matches!(self, GuardOutcome::Render)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard {
    policy: RolePolicy,
}

impl RouteGuard {
    pub fn new(policy: RolePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RolePolicy {
        self.policy
    }

    /// Check a navigation to `route`
    pub fn check_route(&self, session: &Session, route: Route) -> GuardOutcome {
        if !route.is_protected() {
            return GuardOutcome::Render;
        }
        self.check(session, route.required_role())
    }

    /// Check the stored credential against an optional required role
    pub fn check(&self, session: &Session, required: Option<Role>) -> GuardOutcome {
        if !session.is_authenticated() {
            tracing::debug!("No stored token, redirecting to login");
            return GuardOutcome::Redirect(LOGIN_PATH.to_string());
        }

        let Some(required) = required else {
            return GuardOutcome::Render;
        };

        let held = session.role();
        if held == Some(required) {
            return GuardOutcome::Render;
        }

        match self.policy {
            RolePolicy::Advisory => {
                tracing::warn!(
                    required = %required,
                    held = ?held,
                    "Role mismatch on guarded route, rendering anyway"
                );
                GuardOutcome::Render
            }
            RolePolicy::Enforce => {
                let target = held
                    .map(|r| r.dashboard_path().to_string())
                    .unwrap_or_else(|| LOGIN_PATH.to_string());
                tracing::info!(required = %required, held = ?held, %target, "Role mismatch, redirecting");
                GuardOutcome::Redirect(target)
            }
        }
    }
}
