//! TeamSync UI - Leptos frontend
//!
//! Browser client for the contractual team task-sync backend: role
//! dashboards for admins, developers and clients, plus the admin project
//! detail page. All backend logic lives in the `teamsync` crate; this crate
//! supplies the browser transport, token storage and views.

pub mod components;
pub mod pages;
pub mod state;
pub mod storage;
pub mod transport;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_params_map,
    path,
};

use components::{LoadingOverlay, Protected};
use pages::{
    AdminDashboardPage, DeveloperDashboardPage, HomePage, LoginPage, ProjectDetailPage,
    RegisterPage, UserDashboardPage,
};
use state::AppState;
use teamsync::Route as AppRoute;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new());

    view! {
        <Title text="TeamSync" />
        <Router>
            <main class="min-h-screen bg-slate-900 text-slate-100">
                <LoadingOverlay />
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route
                        path=path!("/user")
                        view=|| view! { <Protected route=AppRoute::User><UserDashboardPage /></Protected> }
                    />
                    <Route
                        path=path!("/developer")
                        view=|| view! { <Protected route=AppRoute::Developer><DeveloperDashboardPage /></Protected> }
                    />
                    <Route
                        path=path!("/admin")
                        view=|| view! { <Protected route=AppRoute::Admin><AdminDashboardPage /></Protected> }
                    />
                    <Route path=path!("/admin/project/:id") view=ProjectRoute />
                </Routes>
            </main>
        </Router>
    }
}

/// Guards `/admin/project/:id`. A non-numeric id is a 404.
#[component]
fn ProjectRoute() -> impl IntoView {
    let id = use_params_map().with_untracked(|params| params.get("id").and_then(|id| id.parse::<i64>().ok()));

    match id {
        Some(id) => view! {
            <Protected route=AppRoute::AdminProject(id)>
                <ProjectDetailPage id=id />
            </Protected>
        }
        .into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
