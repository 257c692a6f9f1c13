//! Loading indicators

use crate::state::AppState;
use leptos::prelude::*;

/// Spinner loading indicator
#[component]
pub fn LoadingSpinner(
    #[prop(default = "w-5 h-5")] size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=format!("{} animate-spin text-blue-500", size)
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            ></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}

/// Full-page overlay shown while any request is in flight.
///
/// It blocks interaction until every outstanding request settles.
#[component]
pub fn LoadingOverlay(
    #[prop(default = "Loading...")] message: &'static str,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let is_loading = state.is_loading;

    view! {
        <Show when=move || is_loading.get()>
            <div class="fixed inset-0 bg-slate-900/80 backdrop-blur-sm flex items-center justify-center z-50">
                <div class="flex flex-col items-center gap-4">
                    <LoadingSpinner size="w-12 h-12" />
                    <p class="text-slate-300 font-medium">{message}</p>
                </div>
            </div>
        </Show>
    }
}

/// Placeholder shown during a dashboard's first load
#[component]
pub fn PageLoading() -> impl IntoView {
    view! {
        <div class="flex-1 flex items-center justify-center py-24">
            <LoadingSpinner size="w-8 h-8" />
        </div>
    }
}
