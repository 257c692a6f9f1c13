//! Project card and status badge

use leptos::prelude::*;
use teamsync::dashboard::user::client_label;
use teamsync::types::{Project, ProjectStatus};

#[component]
pub fn StatusBadge(status: ProjectStatus) -> impl IntoView {
    let class = match status {
        ProjectStatus::Completed => "px-2 py-0.5 rounded text-xs bg-green-600/20 text-green-400",
        ProjectStatus::Ongoing => "px-2 py-0.5 rounded text-xs bg-yellow-600/20 text-yellow-400",
    };
    view! { <span class=class>{status.as_str()}</span> }
}

/// Card with title, status, description, client and team.
/// `children` render as the card's action row.
#[component]
pub fn ProjectCard(project: Project, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let client = client_label(&project).to_string();
    let team = project
        .developers
        .iter()
        .map(|d| d.name.clone())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="card p-5 flex flex-col gap-3">
            <div class="flex items-start justify-between gap-2">
                <h3 class="text-lg font-semibold">{project.title}</h3>
                <StatusBadge status=project.status />
            </div>
            <p class="text-sm text-slate-400">{project.description}</p>
            <p class="text-xs text-slate-500">"Client: " {client}</p>
            {(!team.is_empty()).then(|| view! {
                <p class="text-xs text-slate-500">"Developers: " {team}</p>
            })}
            {children.map(|actions| view! { <div class="flex gap-2 pt-2">{actions()}</div> })}
        </div>
    }
}

/// Horizontal completion bar
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<u8>) -> impl IntoView {
    view! {
        <div class="w-full">
            <div class="flex justify-between text-sm mb-1">
                <span>"Completion"</span>
                <span>{move || format!("{}%", percent.get())}</span>
            </div>
            <div class="w-full h-2 bg-slate-700 rounded">
                <div
                    class="h-2 bg-green-500 rounded transition-all"
                    style=move || format!("width: {}%", percent.get())
                ></div>
            </div>
        </div>
    }
}

/// Headline counter
#[component]
pub fn StatCard(label: &'static str, #[prop(into)] value: Signal<u64>) -> impl IntoView {
    view! {
        <div class="card p-6">
            <p class="text-sm text-slate-400">{label}</p>
            <p class="text-3xl font-bold">{move || value.get()}</p>
        </div>
    }
}
