//! Profile editor shared by the admin and developer dashboards

use super::{ModalFrame, TextField};
use leptos::prelude::*;
use teamsync::forms::ProfileForm;

#[component]
pub fn ProfileModal(
    #[prop(into)] form: Signal<ProfileForm>,
    /// Receives the whole form after every keystroke
    on_change: Callback<ProfileForm>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let edit = move |apply: fn(&mut ProfileForm, String)| {
        Callback::new(move |value: String| {
            let mut next = form.get_untracked();
            apply(&mut next, value);
            on_change.run(next);
        })
    };

    view! {
        <ModalFrame title="Edit Profile".to_string() on_submit=on_submit on_close=on_close>
            <TextField
                label="Name"
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=edit(|f, v| f.name = v)
            />
            <TextField
                label="Email"
                kind="email"
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=edit(|f, v| f.email = v)
            />
            <TextField
                label="Phone"
                kind="tel"
                value=Signal::derive(move || form.with(|f| f.phone.clone()))
                on_input=edit(|f, v| f.phone = v)
            />
        </ModalFrame>
    }
}
