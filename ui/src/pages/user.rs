//! Client dashboard

use crate::components::{Header, PageLoading, ProjectCard, Sidebar};
use crate::state::{spawn_scoped, AppState};
use leptos::prelude::*;
use teamsync::dashboard::user::EMPTY_MESSAGE;
use teamsync::dashboard::{UserService, UserView};
use teamsync::filter::ProjectTab;
use teamsync::types::AppError;
use teamsync::ViewScope;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let service = UserService::new(state.api.clone());
    let page = RwSignal::new(UserView::new());

    let scope = ViewScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });

    spawn_scoped(
        &scope,
        async move { Ok::<_, AppError>(service.load().await) },
        move |projects| page.update(|v| v.finish_initial_load(projects)),
    );

    let active = Signal::derive(move || {
        page.with(|v| ProjectTab::ALL.iter().position(|t| *t == v.tab).unwrap_or_default())
    });
    let on_select = Callback::new(move |index: usize| {
        if let Some(tab) = ProjectTab::ALL.get(index).copied() {
            page.update(|v| v.set_tab(tab));
        }
    });

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />
            <div class="flex flex-1">
                <Sidebar
                    title="Client Dashboard"
                    name=Signal::derive(|| "Client".to_string())
                    initial=Signal::derive(|| "C".to_string())
                    tabs=ProjectTab::ALL.iter().map(ProjectTab::label).collect()
                    active=active
                    on_select=on_select
                />

                <main class="flex-1 p-8">
                    <Show when=move || !page.with(UserView::is_loading) fallback=|| view! { <PageLoading /> }>
                        <h1 class="text-3xl font-bold">{move || page.with(UserView::heading)}</h1>
                        <p class="text-slate-400 mb-8">{move || page.with(UserView::caption)}</p>

                        {move || {
                            let projects = page.with(UserView::filtered_projects);
                            if projects.is_empty() {
                                view! { <p class="text-slate-500">{EMPTY_MESSAGE}</p> }.into_any()
                            } else {
                                view! {
                                    <div class="grid md:grid-cols-2 xl:grid-cols-3 gap-6">
                                        {projects
                                            .into_iter()
                                            .map(|project| view! { <ProjectCard project=project /> })
                                            .collect_view()}
                                    </div>
                                }
                                .into_any()
                            }
                        }}
                    </Show>
                </main>
            </div>
        </div>
    }
}
