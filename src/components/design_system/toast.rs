use std::time::Duration;

use leptos::prelude::*;

use crate::services::notification_service::{use_notification_state, Notification, ToastType};

/// Exit animation length before a toast is removed
const EXIT_ANIMATION_MS: u64 = 300;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let state = use_notification_state();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 pointer-events-none">
            <For
                each=move || state.notifications.get()
                key=|notification| notification.id
                children=move |notification| view! { <Toast notification=notification /> }
            />
        </div>
    }
}

#[component]
pub fn Toast(notification: Notification) -> impl IntoView {
    let state = use_notification_state();
    let (is_exiting, set_is_exiting) = signal(false);
    let id = notification.id;

    let close = move || {
        set_is_exiting.set(true);
        set_timeout(move || state.remove(id), Duration::from_millis(EXIT_ANIMATION_MS));
    };

    if let Some(duration) = notification.duration_ms {
        set_timeout(close, Duration::from_millis(duration));
    }

    let (border_class, icon) = match notification.toast_type {
        ToastType::Success => ("border-green-500", view! { <span class="text-green-400">"✓"</span> }),
        ToastType::Error => ("border-red-500", view! { <span class="text-red-400">"⚠"</span> }),
    };

    view! {
        <div
            class=move || format!(
                "pointer-events-auto min-w-[300px] max-w-md p-4 rounded shadow-lg bg-gray-800 text-white border-l-4 {} flex gap-3 transition-all duration-300 transform {}",
                border_class,
                if is_exiting.get() { "translate-x-full opacity-0" } else { "translate-x-0 opacity-100" }
            )
            role="alert"
        >
            <div class="flex-shrink-0 text-lg">{icon}</div>
            <div class="flex-1 flex flex-col gap-1">
                <div class="font-medium">{notification.title}</div>
                {notification.message.map(|msg| view! {
                    <div class="text-sm text-gray-400 break-words">{msg}</div>
                })}
            </div>
            <button
                class="flex-shrink-0 text-gray-400 hover:text-white self-start -mt-1 -mr-1"
                on:click=move |_| close()
                aria-label="Close"
            >
                "×"
            </button>
        </div>
    }
}
