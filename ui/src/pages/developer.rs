//! Developer dashboard: assigned projects and their tasks

use crate::components::{
    Header, PageLoading, ProfileModal, ProgressBar, StatCard, TaskRow, TextArea, TextField,
};
use crate::state::{alert, confirm, spawn_scoped, AppState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use teamsync::dashboard::{DeveloperService, DeveloperView};
use teamsync::types::{AppError, Project, Task};
use teamsync::ViewScope;

#[component]
pub fn DeveloperDashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let service = DeveloperService::new(state.api.clone(), state.config.task_toggle);
    let page = RwSignal::new(DeveloperView::new());

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
        move |data| page.update(|v| v.finish_initial_load(data)),
    );

    let open_project = {
        let (service, scope) = (service.clone(), scope.clone());
        Callback::new(move |project: Project| {
            let id = project.id;
            page.update(|v| v.open_project(project));
            let (service, scope) = (service.clone(), scope.clone());
            spawn_local(async move {
                let result = scope.run(service.tasks(id)).await;
                if matches!(result, Err(AppError::Cancelled)) {
                    return;
                }
                // a later selection wins
                page.update(|v| {
                    if v.is_active(id) {
                        v.finish_tasks(result);
                    }
                });
            });
        })
    };

    let toggle_task = {
        let (service, scope) = (service.clone(), scope.clone());
        Callback::new(move |task: Task| {
            let Some(project_id) = page.with_untracked(DeveloperView::active_project_id) else {
                return;
            };
            let service = service.clone();
            spawn_scoped(
                &scope,
                async move { service.toggle_task(project_id, &task).await },
                move |tasks| page.update(|v| {
                    v.apply_tasks(project_id, tasks);
                }),
            );
        })
    };

    let delete_task = {
        let (service, scope) = (service.clone(), scope.clone());
        Callback::new(move |task_id: i64| {
            let Some(project_id) = page.with_untracked(DeveloperView::active_project_id) else {
                return;
            };
            let service = service.clone();
            spawn_scoped(
                &scope,
                async move { service.delete_task(project_id, task_id, &confirm).await },
                move |tasks| {
                    if let Some(tasks) = tasks {
                        page.update(|v| {
                            v.apply_tasks(project_id, tasks);
                        });
                    }
                },
            );
        })
    };

    let add_task = {
        let (service, scope) = (service.clone(), scope.clone());
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let (project_id, submission) = match page.with_untracked(|v| {
                v.task_submission().map(|s| (v.active_project_id(), s))
            }) {
                Ok((Some(project_id), submission)) => (project_id, submission),
                Ok((None, _)) => return,
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };
            let service = service.clone();
            spawn_scoped(
                &scope,
                async move { service.add_task(&submission).await },
                move |tasks| {
                    page.update(|v| {
                        v.apply_tasks(project_id, tasks);
                        v.clear_draft();
                    })
                },
            );
        }
    };

    let save_profile = {
        let (service, scope) = (service.clone(), scope.clone());
        Callback::new(move |()| {
            let body = match page.with_untracked(|v| v.profile_modal.submission()) {
                Ok(submission) => submission.into_body(),
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };
            let service = service.clone();
            spawn_scoped(
                &scope,
                async move { service.update_profile(&body).await },
                move |profile| {
                    page.update(|v| {
                        v.profile = Some(profile);
                        v.profile_modal.close();
                    })
                },
            );
        })
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />
            <Show when=move || !page.with(DeveloperView::is_loading) fallback=|| view! { <PageLoading /> }>
                <div class="flex flex-1">
                    <aside class="sidebar w-72 flex flex-col">
                        <div class="p-4 border-b border-[var(--border-default)]">
                            <h2 class="text-xl font-bold mb-6">"Developer Dashboard"</h2>
                            <div class="flex items-center gap-3">
                                <div class="w-10 h-10 rounded-full bg-purple-600 flex items-center justify-center font-bold">
                                    {move || page.with(DeveloperView::avatar_initial)}
                                </div>
                                <div class="flex flex-col">
                                    <span class="font-medium">{move || page.with(DeveloperView::display_name)}</span>
                                    <button
                                        class="text-xs text-blue-400 text-left"
                                        on:click=move |_| page.update(DeveloperView::open_profile_editor)
                                    >
                                        "Edit Profile"
                                    </button>
                                </div>
                            </div>
                        </div>
                        <p class="px-4 pt-4 text-xs uppercase text-slate-500">"Projects"</p>
                        <nav class="flex-1 overflow-y-auto p-4 space-y-1">
                            {move || {
                                page.with(|v| v.projects.items().to_vec())
                                    .into_iter()
                                    .map(|project| {
                                        let id = project.id;
                                        let title = project.title.clone();
                                        view! {
                                            <button
                                                class=move || {
                                                    if page.with(|v| v.is_active(id)) {
                                                        "w-full text-left px-3 py-2 rounded-lg bg-purple-600 text-white"
                                                    } else {
                                                        "w-full text-left px-3 py-2 rounded-lg text-slate-400 hover:bg-slate-800"
                                                    }
                                                }
                                                on:click=move |_| open_project.run(project.clone())
                                            >
                                                {title}
                                            </button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </nav>
                    </aside>

                    <main class="flex-1 p-8 space-y-8">
                        <div class="grid md:grid-cols-3 gap-6">
                            <StatCard label="Assigned Projects" value=Signal::derive(move || page.with(|v| v.projects.len() as u64)) />
                            <StatCard label="Ongoing" value=Signal::derive(move || page.with(|v| v.stats().0 as u64)) />
                            <StatCard label="Completed" value=Signal::derive(move || page.with(|v| v.stats().1 as u64)) />
                        </div>

                        <Show
                            when=move || page.with(|v| v.active_project.is_some())
                            fallback=|| view! {
                                <div class="card p-16 text-center text-slate-500">
                                    <h3 class="text-xl font-bold mb-2">"No project selected"</h3>
                                    <p>"Pick a project from the sidebar to manage its tasks."</p>
                                </div>
                            }
                        >
                            <div class="card p-6 space-y-4">
                                <h2 class="text-2xl font-bold">
                                    {move || page.with(|v| v.active_project.as_ref().map(|p| p.title.clone()).unwrap_or_default())}
                                </h2>
                                <p class="text-slate-400">
                                    {move || page.with(|v| v.active_project.as_ref().map(|p| p.description.clone()).unwrap_or_default())}
                                </p>
                                <ProgressBar percent=Signal::derive(move || page.with(DeveloperView::completion)) />
                            </div>

                            <div class="grid lg:grid-cols-12 gap-8">
                                <form class="card p-6 lg:col-span-5 auth-form" on:submit=add_task.clone()>
                                    <h3 class="text-lg font-semibold">"New Task"</h3>
                                    <TextField
                                        label="Title"
                                        value=Signal::derive(move || page.with(|v| v.draft.title.clone()))
                                        on_input=Callback::new(move |s| page.update(|v| v.draft.title = s))
                                    />
                                    <TextArea
                                        label="Description"
                                        value=Signal::derive(move || page.with(|v| v.draft.description.clone()))
                                        on_input=Callback::new(move |s| page.update(|v| v.draft.description = s))
                                    />
                                    <button type="submit" class="btn btn-primary w-full">"Add Task"</button>
                                </form>

                                <div class="card lg:col-span-7">
                                    <div class="px-6 py-4 border-b border-[var(--border-default)] flex justify-between">
                                        <h3 class="font-semibold">"Tasks"</h3>
                                        <span class="text-xs text-slate-400">
                                            {move || format!("{} items", page.with(|v| v.tasks.len()))}
                                        </span>
                                    </div>
                                    <div class="p-4">
                                        {move || {
                                            let (loading, tasks) = page.with(|v| (v.tasks_loading, v.tasks.items().to_vec()));
                                            if loading {
                                                view! { <PageLoading /> }.into_any()
                                            } else if tasks.is_empty() {
                                                view! { <p class="p-8 text-center text-slate-500">"No tasks yet"</p> }.into_any()
                                            } else {
                                                tasks
                                                    .into_iter()
                                                    .map(|task| view! {
                                                        <TaskRow task=task on_toggle=toggle_task on_delete=delete_task />
                                                    })
                                                    .collect_view()
                                                    .into_any()
                                            }
                                        }}
                                    </div>
                                </div>
                            </div>
                        </Show>
                    </main>
                </div>
            </Show>

            <Show when=move || page.with(|v| v.profile_modal.is_open())>
                <ProfileModal
                    form=Signal::derive(move || page.with(|v| v.profile_modal.form.clone()))
                    on_change=Callback::new(move |form| page.update(|v| v.profile_modal.form = form))
                    on_submit=save_profile
                    on_close=Callback::new(move |()| page.update(|v| v.profile_modal.close()))
                />
            </Show>
        </div>
    }
}
