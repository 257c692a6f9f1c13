//! Home/landing page

use crate::components::Header;
use crate::state::AppState;
use leptos::prelude::*;

/// Landing page. The call to action depends on the stored session.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let is_auth = state.authenticated;
    let role = state.role;
    let dashboard = move || {
        role.track();
        state.session().landing_path()
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />

            <section class="flex-1 flex items-center justify-center px-4 py-16">
                <div class="max-w-4xl mx-auto text-center">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 animate-slide-up">
                        <span class="gradient-text">"TeamSync"</span>
                    </h1>

                    <p class="text-xl md:text-2xl text-slate-400 mb-12 animate-slide-up" style="animation-delay: 0.1s">
                        "Projects, developers and clients on one board."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center animate-slide-up" style="animation-delay: 0.2s">
                        <Show
                            when=move || is_auth.get()
                            fallback=|| view! {
                                <a
                                    href="/login"
                                    class="px-8 py-4 bg-blue-600 hover:bg-blue-700 rounded-xl text-lg font-semibold transition-all"
                                >
                                    "Sign In"
                                </a>
                                <a
                                    href="/register"
                                    class="px-8 py-4 bg-slate-800 hover:bg-slate-700 border border-slate-700 rounded-xl text-lg font-semibold transition-all"
                                >
                                    "Create Account"
                                </a>
                            }
                        >
                            <a
                                href=dashboard.clone()
                                class="px-8 py-4 bg-blue-600 hover:bg-blue-700 rounded-xl text-lg font-semibold transition-all"
                            >
                                "Open Dashboard"
                            </a>
                        </Show>
                    </div>
                </div>
            </section>

            <section class="py-20 px-4 bg-slate-800/50">
                <div class="max-w-6xl mx-auto grid md:grid-cols-3 gap-8">
                    <FeatureCard
                        title="Admins"
                        description="Create projects, assign developers and clients, track completion"
                    />
                    <FeatureCard
                        title="Developers"
                        description="See assigned projects and tick off their tasks"
                    />
                    <FeatureCard
                        title="Clients"
                        description="Follow the status of every commissioned project"
                    />
                </div>
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 bg-slate-800 rounded-xl border border-slate-700">
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-slate-400">{description}</p>
        </div>
    }
}
