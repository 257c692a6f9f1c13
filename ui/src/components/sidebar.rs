//! Dashboard sidebar

use leptos::prelude::*;

/// Sidebar with an avatar badge and a vertical tab list
#[component]
pub fn Sidebar(
    /// Dashboard name shown at the top
    title: &'static str,
    #[prop(into)] name: Signal<String>,
    #[prop(into)] initial: Signal<String>,
    tabs: Vec<&'static str>,
    #[prop(into)] active: Signal<usize>,
    on_select: Callback<usize>,
    /// Opens the profile editor; hidden when absent
    #[prop(optional)]
    on_edit_profile: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <aside class="sidebar w-72 flex flex-col">
            <div class="p-4 border-b border-[var(--border-default)]">
                <h2 class="text-xl font-bold mb-6">{title}</h2>
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-full bg-blue-600 flex items-center justify-center font-bold">
                        {move || initial.get()}
                    </div>
                    <div class="flex flex-col">
                        <span class="font-medium">{move || name.get()}</span>
                        {on_edit_profile.map(|edit| view! {
                            <button class="text-xs text-blue-400 text-left" on:click=move |_| edit.run(())>
                                "Edit Profile"
                            </button>
                        })}
                    </div>
                </div>
            </div>

            <nav class="flex-1 overflow-y-auto p-4 space-y-1">
                {tabs
                    .into_iter()
                    .enumerate()
                    .map(|(index, label)| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == index {
                                        "w-full text-left px-3 py-2 rounded-lg bg-blue-600 text-white"
                                    } else {
                                        "w-full text-left px-3 py-2 rounded-lg text-slate-400 hover:bg-slate-800"
                                    }
                                }
                                on:click=move |_| on_select.run(index)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
