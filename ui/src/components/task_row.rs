//! Task list row

use leptos::prelude::*;
use teamsync::project_detail::assignee_label;
use teamsync::types::Task;

/// One task with a completion checkbox and a delete button
#[component]
pub fn TaskRow(
    task: Task,
    on_toggle: Callback<Task>,
    on_delete: Callback<i64>,
    /// Show who the task is assigned to
    #[prop(optional)]
    show_assignee: bool,
) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;
    let assignee = assignee_label(&task).to_string();
    let title_class = if completed {
        "font-medium line-through text-slate-500"
    } else {
        "font-medium"
    };

    view! {
        <div class="flex items-center justify-between p-4 rounded-lg hover:bg-slate-800/50">
            <div class="flex items-center gap-4">
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change={
                        let task = task.clone();
                        move |_| on_toggle.run(task.clone())
                    }
                />
                <div>
                    <p class=title_class>{task.title.clone()}</p>
                    <p class="text-xs text-slate-500">{task.description.clone()}</p>
                    {show_assignee.then(|| view! {
                        <p class="text-xs text-slate-500">"Assigned to: " {assignee}</p>
                    })}
                </div>
            </div>
            <button class="btn btn-ghost text-red-400" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </div>
    }
}
