use leptos::ev;
use leptos::prelude::*;

use super::loading::LoadingSpinner;

pub(crate) const BUTTON_CLASS: &str = "flex items-center justify-center p-2 rounded-full bg-blue-500 hover:bg-blue-600 text-white dark:bg-blue-600 dark:hover:bg-blue-500 transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-blue-500";

/// State classes for a button that is or is not accepting clicks
pub(crate) fn state_class(disabled: bool) -> &'static str {
    if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        "cursor-pointer active:scale-95"
    }
}

/// Round icon button; swaps its content for a spinner and ignores clicks
/// while `loading`
#[component]
pub fn Button<F>(
    on_click: F,
    #[prop(into, default = Signal::derive(|| false))]
    loading: Signal<bool>,
    /// Accessible label for the icon
    #[prop(into, optional)]
    label: Option<String>,
    children: ChildrenFn,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let full_class = move || format!("{} {}", BUTTON_CLASS, state_class(loading.get()));

    let handle_click = move |evt: ev::MouseEvent| {
        if !loading.get_untracked() {
            on_click(evt);
        }
    };

    view! {
        <button
            type="button"
            class=full_class
            on:click=handle_click
            disabled=move || loading.get()
            aria-label=label
        >
            {move || {
                if loading.get() {
                    view! { <LoadingSpinner /> }.into_any()
                } else {
                    children()
                }
            }}
        </button>
    }
}
