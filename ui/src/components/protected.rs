//! Guarded routes

use crate::state::AppState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use teamsync::{GuardOutcome, Route};

/// Renders `children` only when the route guard allows it, otherwise
/// navigates to the guard's redirect target and renders nothing.
#[component]
pub fn Protected(route: Route, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let outcome = Memo::new({
        let state = state.clone();
        move |_| {
            // re-check whenever the user signs in or out
            state.authenticated.track();
            state.guard.check_route(state.session(), route)
        }
    });

    Effect::new(move |_| {
        if let GuardOutcome::Redirect(path) = outcome.get() {
            navigate(&path, Default::default());
        }
    });

    view! {
        <Show when=move || outcome.with(GuardOutcome::is_render)>
            {children()}
        </Show>
    }
}
