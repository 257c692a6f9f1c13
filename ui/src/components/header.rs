//! Header component

use crate::state::AppState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Main application header
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let is_auth = state.authenticated;
    let dashboard = {
        let state = state.clone();
        move || {
            state.role.track();
            state.session().landing_path()
        }
    };

    view! {
        <header class="header h-16 sticky top-0 z-40">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                <a href="/" class="logo hover:opacity-80 transition-opacity">
                    <div>
                        <h1 class="text-xl font-bold text-gradient">"TeamSync"</h1>
                        <p class="text-xs text-[var(--text-muted)] -mt-0.5">"Contractual team task sync"</p>
                    </div>
                </a>

                <nav class="flex items-center gap-2">
                    {move || {
                        if is_auth.get() {
                            let state = state.clone();
                            let navigate = navigate.clone();
                            view! {
                                <a href=dashboard.clone() class="btn btn-ghost">
                                    "Dashboard"
                                </a>
                                <button
                                    on:click=move |_| {
                                        state.sign_out();
                                        navigate("/", Default::default());
                                    }
                                    class="btn btn-ghost"
                                >
                                    "Sign Out"
                                </button>
                            }.into_any()
                        } else {
                            view! {
                                <a href="/register" class="btn btn-ghost">
                                    "Register"
                                </a>
                                <a href="/login" class="btn btn-primary">
                                    "Sign In"
                                </a>
                            }.into_any()
                        }
                    }}
                </nav>
            </div>
        </header>
    }
}
