//! Form fields and the modal frame

use leptos::prelude::*;

/// Labelled single-line input
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="auth-input-group">
            <label class="auth-label">{label}</label>
            <input
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                placeholder=placeholder
                class="input"
            />
        </div>
    }
}

/// Labelled multi-line input
#[component]
pub fn TextArea(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="auth-input-group">
            <label class="auth-label">{label}</label>
            <textarea
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class="input"
            ></textarea>
        </div>
    }
}

/// Centered dialog with a title, a form body and Save/Cancel buttons
#[component]
pub fn ModalFrame(
    #[prop(into)] title: Signal<String>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-slate-900/70 flex items-center justify-center z-40">
            <div class="card w-full max-w-lg p-6">
                <h2 class="text-xl font-semibold mb-4">{move || title.get()}</h2>
                <form
                    class="auth-form"
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    {children()}
                    <div class="flex justify-end gap-2 pt-2">
                        <button type="button" class="btn btn-ghost" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
