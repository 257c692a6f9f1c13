//! Login and register pages

use crate::components::{Header, TextField};
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use teamsync::types::{RegisterRequest, Role};

/// Roles offered at sign up
const SIGNUP_ROLES: [Role; 2] = [Role::Developer, Role::Client];

/// Send an already signed-in visitor to their dashboard
fn redirect_when_signed_in(state: &AppState) {
    let navigate = use_navigate();
    let state = state.clone();
    Effect::new(move |_| {
        if state.authenticated.get() {
            navigate(state.session().landing_path(), Default::default());
        }
    });
}

#[component]
fn ErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="mb-6 p-4 bg-[var(--accent-error)]/10 border border-[var(--accent-error)]/50
                        rounded-[var(--radius-md)] text-[var(--accent-error)] text-sm animate-fade-in">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Login page
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    redirect_when_signed_in(&state);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let state = state.clone();
        let navigate = navigate.clone();
        let (email, password) = (email.get(), password.get());

        spawn_local(async move {
            submitting.set(true);
            error.set(None);
            let result = state.auth().login(&email, &password).await;
            submitting.set(false);

            match result {
                Ok(auth) => {
                    state.signed_in(&auth);
                    navigate(state.session().landing_path(), Default::default());
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col bg-[var(--bg-primary)]">
            <Header />
            <main class="auth-container flex-1">
                <div class="w-full max-w-md px-4">
                    <div class="auth-card">
                        <div class="auth-header">
                            <h1 class="auth-title text-gradient">"Welcome Back"</h1>
                            <p class="auth-subtitle">"Sign in to continue"</p>
                        </div>

                        <ErrorBanner error=error />

                        <form on:submit=on_submit class="auth-form">
                            <TextField
                                label="Email"
                                kind="email"
                                placeholder="you@example.com"
                                value=email
                                on_input=Callback::new(move |v| email.set(v))
                            />
                            <TextField
                                label="Password"
                                kind="password"
                                value=password
                                on_input=Callback::new(move |v| password.set(v))
                            />
                            <button
                                type="submit"
                                disabled=move || submitting.get()
                                class="btn btn-primary w-full py-3"
                            >
                                "Sign In"
                            </button>
                        </form>

                        <div class="auth-footer">
                            "Don't have an account? "
                            <a href="/register" class="auth-link">"Sign up"</a>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}

/// Registration page. A successful sign up leads to the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    redirect_when_signed_in(&state);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Developer);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = RegisterRequest {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            password: password.get(),
            role: role.get(),
        };
        if [&request.name, &request.email, &request.phone, &request.password]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            error.set(Some("Fill all fields".to_string()));
            return;
        }

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            submitting.set(true);
            error.set(None);
            let result = state.auth().register(&request).await;
            submitting.set(false);

            match result {
                Ok(()) => navigate("/login", Default::default()),
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col bg-[var(--bg-primary)]">
            <Header />
            <main class="auth-container flex-1">
                <div class="w-full max-w-md px-4">
                    <div class="auth-card">
                        <div class="auth-header">
                            <h1 class="auth-title text-gradient">"Create Account"</h1>
                            <p class="auth-subtitle">"Join your team on TeamSync"</p>
                        </div>

                        <ErrorBanner error=error />

                        <form on:submit=on_submit class="auth-form">
                            <TextField label="Name" value=name on_input=Callback::new(move |v| name.set(v)) />
                            <TextField
                                label="Email"
                                kind="email"
                                value=email
                                on_input=Callback::new(move |v| email.set(v))
                            />
                            <TextField label="Phone" kind="tel" value=phone on_input=Callback::new(move |v| phone.set(v)) />
                            <TextField
                                label="Password"
                                kind="password"
                                value=password
                                on_input=Callback::new(move |v| password.set(v))
                            />
                            <div class="auth-input-group">
                                <label class="auth-label">"Role"</label>
                                <select
                                    class="input"
                                    on:change=move |ev| {
                                        if let Some(r) = Role::parse(&event_target_value(&ev)) {
                                            role.set(r);
                                        }
                                    }
                                >
                                    {SIGNUP_ROLES
                                        .into_iter()
                                        .map(|r| view! {
                                            <option value=r.as_str() selected=move || role.get() == r>
                                                {r.as_str()}
                                            </option>
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                            <button
                                type="submit"
                                disabled=move || submitting.get()
                                class="btn btn-primary w-full py-3"
                            >
                                "Create Account"
                            </button>
                        </form>

                        <div class="auth-footer">
                            "Already have an account? "
                            <a href="/login" class="auth-link">"Sign in"</a>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
