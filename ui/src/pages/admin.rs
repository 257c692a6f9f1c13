//! Admin dashboard: projects, clients, developers and the admin profile

use crate::components::{
    Header, ModalFrame, PageLoading, ProfileModal, ProjectCard, Sidebar, StatCard, TextArea,
    TextField,
};
use crate::state::{alert, confirm, spawn_scoped, AppState};
use leptos::prelude::*;
use teamsync::dashboard::{AdminService, AdminTab, AdminView};
use teamsync::forms::{FormMode, Modal, ProjectForm, UserForm};
use teamsync::types::{AppError, ProjectStatus, UserAccount};
use teamsync::ViewScope;

/// Which account list a modal or table row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccountKind {
    Developer,
    Client,
}

impl AccountKind {
    fn noun(&self) -> &'static str {
        match self {
            AccountKind::Developer => "Developer",
            AccountKind::Client => "Client",
        }
    }

    fn modal<'a>(&self, view: &'a AdminView) -> &'a Modal<UserForm> {
        match self {
            AccountKind::Developer => &view.developer_modal,
            AccountKind::Client => &view.client_modal,
        }
    }

    fn modal_mut<'a>(&self, view: &'a mut AdminView) -> &'a mut Modal<UserForm> {
        match self {
            AccountKind::Developer => &mut view.developer_modal,
            AccountKind::Client => &mut view.client_modal,
        }
    }

    fn accounts(&self, view: &AdminView) -> Vec<UserAccount> {
        match self {
            AccountKind::Developer => view.developers.items().to_vec(),
            AccountKind::Client => view.clients.items().to_vec(),
        }
    }
}

fn modal_title(noun: &str, mode: FormMode) -> String {
    match mode {
        FormMode::Create => format!("New {}", noun),
        FormMode::Edit(_) => format!("Edit {}", noun),
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let service = AdminService::new(state.api.clone());
    let page = RwSignal::new(AdminView::new());

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

    // ============= Projects =============

    let save_project = {
        let (service, scope) = (service.clone(), scope.clone());
        Callback::new(move |()| {
            let submission = match page.with_untracked(|v| v.project_modal.submission()) {
                Ok(submission) => submission,
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };
            let service = service.clone();
            spawn_scoped(
                &scope,
                async move { service.submit_project(&submission).await },
                move |projects| {
                    page.update(|v| {
                        v.projects.replace(projects);
                        v.project_modal.close();
                    })
                },
            );
        })
    };

    let delete_project = {
        let (service, scope) = (service.clone(), scope.clone());
        Callback::new(move |id: i64| {
            let service = service.clone();
            spawn_scoped(
                &scope,
                async move { service.delete_project(id, &confirm).await },
                move |projects| {
                    if let Some(projects) = projects {
                        page.update(|v| v.projects.replace(projects));
                    }
                },
            );
        })
    };

    // ============= Accounts =============

    let save_account = {
        let (service, scope) = (service.clone(), scope.clone());
        Callback::new(move |kind: AccountKind| {
            let submission = match page.with_untracked(|v| kind.modal(v).submission()) {
                Ok(submission) => submission,
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };
            let service = service.clone();
            spawn_scoped(
                &scope,
                async move {
                    match kind {
                        AccountKind::Developer => service.submit_developer(&submission).await,
                        AccountKind::Client => service.submit_client(&submission).await,
                    }
                },
                move |accounts| {
                    page.update(|v| {
                        match kind {
                            AccountKind::Developer => v.developers.replace(accounts),
                            AccountKind::Client => v.clients.replace(accounts),
                        }
                        kind.modal_mut(v).close();
                    })
                },
            );
        })
    };

    let delete_account = {
        let (service, scope) = (service.clone(), scope.clone());
        Callback::new(move |(kind, id): (AccountKind, i64)| {
            let service = service.clone();
            spawn_scoped(
                &scope,
                async move {
                    match kind {
                        AccountKind::Developer => service.delete_developer(id, &confirm).await,
                        AccountKind::Client => service.delete_client(id, &confirm).await,
                    }
                },
                move |accounts| {
                    let Some(accounts) = accounts else { return };
                    page.update(|v| match kind {
                        AccountKind::Developer => v.developers.replace(accounts),
                        AccountKind::Client => v.clients.replace(accounts),
                    });
                },
            );
        })
    };

    // ============= Profile =============

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

    let active = Signal::derive(move || {
        page.with(|v| AdminTab::ALL.iter().position(|t| *t == v.tab).unwrap_or_default())
    });
    let on_select = Callback::new(move |index: usize| {
        if let Some(tab) = AdminTab::ALL.get(index).copied() {
            page.update(|v| v.set_tab(tab));
        }
    });

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />
            <Show when=move || !page.with(AdminView::is_loading) fallback=|| view! { <PageLoading /> }>
                <div class="flex flex-1">
                    <Sidebar
                        title="Admin Dashboard"
                        name=Signal::derive(move || page.with(AdminView::display_name))
                        initial=Signal::derive(move || page.with(AdminView::avatar_initial))
                        tabs=AdminTab::ALL.iter().map(AdminTab::label).collect()
                        active=active
                        on_select=on_select
                        on_edit_profile=Callback::new(move |()| page.update(AdminView::open_profile_editor))
                    />

                    <main class="flex-1 p-8 space-y-8">
                        <div class="grid md:grid-cols-4 gap-6">
                            <StatCard label="Total Projects" value=Signal::derive(move || page.with(|v| v.stats().projects)) />
                            <StatCard label="Clients" value=Signal::derive(move || page.with(|v| v.stats().clients)) />
                            <StatCard label="Developers" value=Signal::derive(move || page.with(|v| v.stats().developers)) />
                            <StatCard label="Completed" value=Signal::derive(move || page.with(|v| v.stats().completed)) />
                        </div>

                        {move || match page.with(|v| v.tab) {
                            AdminTab::Clients => view! {
                                <AccountTable kind=AccountKind::Client page=page on_delete=delete_account />
                            }
                            .into_any(),
                            AdminTab::Developers => view! {
                                <AccountTable kind=AccountKind::Developer page=page on_delete=delete_account />
                            }
                            .into_any(),
                            tab => view! {
                                <ProjectGrid tab=tab page=page on_delete=delete_project />
                            }
                            .into_any(),
                        }}
                    </main>
                </div>
            </Show>

            <Show when=move || page.with(|v| v.project_modal.is_open())>
                <ProjectModal page=page on_submit=save_project />
            </Show>
            <Show when=move || page.with(|v| v.developer_modal.is_open())>
                <AccountModal kind=AccountKind::Developer page=page on_submit=save_account />
            </Show>
            <Show when=move || page.with(|v| v.client_modal.is_open())>
                <AccountModal kind=AccountKind::Client page=page on_submit=save_account />
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

#[component]
fn ProjectGrid(tab: AdminTab, page: RwSignal<AdminView>, on_delete: Callback<i64>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between">
            <h1 class="text-2xl font-bold">{tab.label()}</h1>
            <button class="btn btn-primary" on:click=move |_| page.update(|v| v.project_modal.open_create())>
                "Create Project"
            </button>
        </div>

        {move || {
            let projects = page.with(AdminView::filtered_projects);
            if projects.is_empty() {
                return view! { <p class="text-slate-500">"No projects found"</p> }.into_any();
            }
            view! {
                <div class="grid md:grid-cols-2 xl:grid-cols-3 gap-6">
                    {projects
                        .into_iter()
                        .map(|project| {
                            let id = project.id;
                            let editing = project.clone();
                            view! {
                                <ProjectCard project=project>
                                    <a href=format!("/admin/project/{}", id) class="btn btn-ghost">"Tasks"</a>
                                    <button
                                        class="btn btn-ghost"
                                        on:click=move |_| page.update(|v| v.project_modal.open_edit(editing.clone()))
                                    >
                                        "Edit"
                                    </button>
                                    <button class="btn btn-ghost text-red-400" on:click=move |_| on_delete.run(id)>
                                        "Delete"
                                    </button>
                                </ProjectCard>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }}
    }
}

#[component]
fn AccountTable(
    kind: AccountKind,
    page: RwSignal<AdminView>,
    on_delete: Callback<(AccountKind, i64)>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between">
            <h1 class="text-2xl font-bold">{format!("All {}s", kind.noun())}</h1>
            <button
                class="btn btn-primary"
                on:click=move |_| page.update(|v| kind.modal_mut(v).open_create())
            >
                {format!("Add {}", kind.noun())}
            </button>
        </div>

        <table class="w-full card">
            <thead>
                <tr class="text-left text-slate-400 text-sm">
                    <th class="p-3">"Name"</th>
                    <th class="p-3">"Email"</th>
                    <th class="p-3">"Phone"</th>
                    <th class="p-3"></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    page.with(|v| kind.accounts(v))
                        .into_iter()
                        .map(|account| {
                            let id = account.id;
                            let editing = account.clone();
                            view! {
                                <tr class="border-t border-slate-800">
                                    <td class="p-3">{account.name}</td>
                                    <td class="p-3">{account.email}</td>
                                    <td class="p-3">{account.phone}</td>
                                    <td class="p-3 flex gap-2 justify-end">
                                        <button
                                            class="btn btn-ghost"
                                            on:click=move |_| page.update(|v| kind.modal_mut(v).open_edit(editing.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn-ghost text-red-400"
                                            on:click=move |_| on_delete.run((kind, id))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

/// Project create/edit dialog with client and developer pickers
#[component]
fn ProjectModal(page: RwSignal<AdminView>, on_submit: Callback<()>) -> impl IntoView {
    let form = move |read: fn(&ProjectForm) -> String| {
        Signal::derive(move || page.with(|v| read(&v.project_modal.form)))
    };
    let edit = move |apply: fn(&mut ProjectForm, String)| {
        Callback::new(move |value: String| page.update(|v| apply(&mut v.project_modal.form, value)))
    };

    view! {
        <ModalFrame
            title=Signal::derive(move || page.with(|v| modal_title("Project", v.project_modal.mode())))
            on_submit=on_submit
            on_close=Callback::new(move |()| page.update(|v| v.project_modal.close()))
        >
            <TextField label="Title" value=form(|f| f.title.clone()) on_input=edit(|f, s| f.title = s) />
            <TextArea
                label="Description"
                value=form(|f| f.description.clone())
                on_input=edit(|f, s| f.description = s)
            />

            <div class="auth-input-group">
                <label class="auth-label">"Status"</label>
                <select
                    class="input"
                    on:change=move |ev| {
                        let status = match event_target_value(&ev).as_str() {
                            "COMPLETED" => ProjectStatus::Completed,
                            _ => ProjectStatus::Ongoing,
                        };
                        page.update(|v| v.project_modal.form.status = status);
                    }
                >
                    {[ProjectStatus::Ongoing, ProjectStatus::Completed]
                        .into_iter()
                        .map(|status| view! {
                            <option
                                value=status.as_str()
                                selected=move || page.with(|v| v.project_modal.form.status == status)
                            >
                                {status.as_str()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="auth-input-group">
                <label class="auth-label">"Client"</label>
                <select
                    class="input"
                    on:change=move |ev| {
                        let client_id = event_target_value(&ev).parse().ok();
                        page.update(|v| v.project_modal.form.client_id = client_id);
                    }
                >
                    <option value="" selected=move || page.with(|v| v.project_modal.form.client_id.is_none())>
                        "Select client"
                    </option>
                    {move || {
                        page.with(|v| v.clients.items().to_vec())
                            .into_iter()
                            .map(|client| {
                                let id = client.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || page.with(|v| v.project_modal.form.client_id == Some(id))
                                    >
                                        {client.name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="auth-input-group">
                <label class="auth-label">"Developers"</label>
                <div class="max-h-40 overflow-y-auto space-y-1">
                    {move || {
                        page.with(|v| v.developers.items().to_vec())
                            .into_iter()
                            .map(|developer| {
                                let id = developer.id;
                                view! {
                                    <label class="flex items-center gap-2 text-sm">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || page.with(|v| v.project_modal.form.developer_ids.contains(&id))
                                            on:change=move |_| page.update(|v| v.project_modal.form.toggle_developer(id))
                                        />
                                        {developer.name}
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </ModalFrame>
    }
}

/// Developer or client account dialog. The password is only required on create.
#[component]
fn AccountModal(kind: AccountKind, page: RwSignal<AdminView>, on_submit: Callback<AccountKind>) -> impl IntoView {
    let form = move |read: fn(&UserForm) -> String| {
        Signal::derive(move || page.with(|v| read(&kind.modal(v).form)))
    };
    let edit = move |apply: fn(&mut UserForm, String)| {
        Callback::new(move |value: String| page.update(|v| apply(&mut kind.modal_mut(v).form, value)))
    };
    let editing = move || page.with(|v| kind.modal(v).mode() != FormMode::Create);

    view! {
        <ModalFrame
            title=Signal::derive(move || page.with(|v| modal_title(kind.noun(), kind.modal(v).mode())))
            on_submit=Callback::new(move |()| on_submit.run(kind))
            on_close=Callback::new(move |()| page.update(|v| kind.modal_mut(v).close()))
        >
            <TextField label="Name" value=form(|f| f.name.clone()) on_input=edit(|f, s| f.name = s) />
            <TextField label="Email" kind="email" value=form(|f| f.email.clone()) on_input=edit(|f, s| f.email = s) />
            <TextField label="Phone" kind="tel" value=form(|f| f.phone.clone()) on_input=edit(|f, s| f.phone = s) />
            <TextField
                label="Password"
                kind="password"
                value=form(|f| f.password.clone())
                on_input=edit(|f, s| f.password = s)
            />
            <Show when=editing>
                <p class="text-xs text-slate-500">"Leave the password empty to keep it unchanged"</p>
            </Show>
        </ModalFrame>
    }
}
