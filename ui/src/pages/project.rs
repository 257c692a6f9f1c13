//! Admin project detail: completion, task list and task assignment

use crate::components::{Header, ModalFrame, PageLoading, ProgressBar, StatusBadge, TaskRow, TextArea, TextField};
use crate::state::{alert, confirm, spawn_scoped, AppState};
use leptos::prelude::*;
use teamsync::project_detail::{ProjectDetailService, ProjectDetailView, NOT_FOUND_MESSAGE};
use teamsync::types::{AppError, Task};
use teamsync::ViewScope;

#[component]
pub fn ProjectDetailPage(id: i64) -> impl IntoView {
    let state = expect_context::<AppState>();
    let service = ProjectDetailService::new(
        state.api.clone(),
        id,
        state.config.project_lookup,
        state.config.task_toggle,
    );
    let page = RwSignal::new(ProjectDetailView::new(id));

    let scope = ViewScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });

    spawn_scoped(
        &scope,
        {
            let service = service.clone();
            async move { Ok::<_, AppError>(service.load().await) }
        },
        move |data| page.update(|v| v.apply(data)),
    );

    let toggle_task = {
        let (service, scope) = (service.clone(), scope.clone());
        Callback::new(move |task: Task| {
            let service = service.clone();
            spawn_scoped(
                &scope,
                async move { service.toggle_task(&task).await },
                move |data| page.update(|v| v.apply(data)),
            );
        })
    };

    let delete_task = {
        let (service, scope) = (service.clone(), scope.clone());
        Callback::new(move |task_id: i64| {
            let service = service.clone();
            spawn_scoped(
                &scope,
                async move { service.delete_task(task_id, &confirm).await },
                move |data| {
                    if let Some(data) = data {
                        page.update(|v| v.apply(data));
                    }
                },
            );
        })
    };

    let add_task = {
        let (service, scope) = (service.clone(), scope.clone());
        Callback::new(move |()| {
            let submission = match page.with_untracked(|v| v.task_modal.submission()) {
                Ok(submission) => submission,
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };
            let service = service.clone();
            spawn_scoped(
                &scope,
                async move { service.add_task(&submission).await },
                move |data| {
                    page.update(|v| {
                        v.apply(data);
                        v.task_modal.close();
                    })
                },
            );
        })
    };

    let body = move || {
        if page.with(ProjectDetailView::is_loading) {
            return view! { <PageLoading /> }.into_any();
        }
        let Some(project) = page.with(|v| v.project.clone()) else {
            return view! {
                <div class="flex-1 flex flex-col items-center justify-center py-24 gap-4">
                    <p class="text-xl text-slate-400">{NOT_FOUND_MESSAGE}</p>
                    <a href="/admin" class="btn btn-primary">"Back to dashboard"</a>
                </div>
            }
            .into_any();
        };
        let client = project
            .client
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "N/A".to_string());

        view! {
            <main class="max-w-5xl w-full mx-auto p-8 space-y-8">
                <a href="/admin" class="text-sm text-blue-400">"← Back to dashboard"</a>

                <div class="card p-6 space-y-4">
                    <div class="flex items-start justify-between gap-4">
                        <h1 class="text-3xl font-bold">{project.title.clone()}</h1>
                        <StatusBadge status=project.status />
                    </div>
                    <p class="text-slate-400">{project.description.clone()}</p>
                    <p class="text-sm text-slate-500">"Client: " {client}</p>
                    <ProgressBar percent=Signal::derive(move || page.with(|v| v.completion)) />
                </div>

                <div class="card">
                    <div class="px-6 py-4 border-b border-[var(--border-default)] flex items-center justify-between">
                        <h2 class="font-semibold">
                            {move || format!("Tasks ({})", page.with(|v| v.tasks.len()))}
                        </h2>
                        <button class="btn btn-primary" on:click=move |_| page.update(ProjectDetailView::open_task_modal)>
                            "Add Task"
                        </button>
                    </div>
                    <div class="p-4">
                        {move || {
                            let tasks = page.with(|v| v.tasks.items().to_vec());
                            if tasks.is_empty() {
                                return view! { <p class="p-8 text-center text-slate-500">"No tasks yet"</p> }.into_any();
                            }
                            tasks
                                .into_iter()
                                .map(|task| view! {
                                    <TaskRow task=task on_toggle=toggle_task on_delete=delete_task show_assignee=true />
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </div>
                </div>
            </main>
        }
        .into_any()
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />
            {body}
            <Show when=move || page.with(|v| v.task_modal.is_open())>
                <TaskModal page=page on_submit=add_task />
            </Show>
        </div>
    }
}

/// New task dialog; the assignee list is the project's developers
#[component]
fn TaskModal(page: RwSignal<ProjectDetailView>, on_submit: Callback<()>) -> impl IntoView {
    view! {
        <ModalFrame
            title="Add Task".to_string()
            on_submit=on_submit
            on_close=Callback::new(move |()| page.update(|v| v.task_modal.close()))
        >
            <TextField
                label="Title"
                value=Signal::derive(move || page.with(|v| v.task_modal.form.title.clone()))
                on_input=Callback::new(move |s| page.update(|v| v.task_modal.form.title = s))
            />
            <TextArea
                label="Description"
                value=Signal::derive(move || page.with(|v| v.task_modal.form.description.clone()))
                on_input=Callback::new(move |s| page.update(|v| v.task_modal.form.description = s))
            />
            <div class="auth-input-group">
                <label class="auth-label">"Developer"</label>
                <select
                    class="input"
                    on:change=move |ev| {
                        let developer_id = event_target_value(&ev).parse().ok();
                        page.update(|v| v.task_modal.form.developer_id = developer_id);
                    }
                >
                    <option value="" selected=move || page.with(|v| v.task_modal.form.developer_id.is_none())>
                        "Select developer"
                    </option>
                    {move || {
                        page.with(|v| v.developers().to_vec())
                            .into_iter()
                            .map(|developer| {
                                let id = developer.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || page.with(|v| v.task_modal.form.developer_id == Some(id))
                                    >
                                        {developer.name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
        </ModalFrame>
    }
}
