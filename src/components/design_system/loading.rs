use leptos::prelude::*;

/// Small spinner sized to sit inside an icon button
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div
            class="w-5 h-5 animate-spin rounded-full border-2 border-white/40 border-t-white"
            role="status"
        ></div>
    }
}
