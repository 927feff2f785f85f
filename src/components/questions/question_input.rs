use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::ask_form::AskForm;
use crate::services::notification_service::use_notification_state;
use crate::services::qa_store::{QaCommand, QaStore};

pub(crate) fn placeholder_text(disabled: bool) -> &'static str {
    if disabled {
        "Select a document to ask questions"
    } else {
        "Ask a question about the document..."
    }
}

/// Question box; disabled from outside while no document is selected
#[component]
pub fn QuestionInput(
    store: QaStore,
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let notifications = use_notification_state();
    let form = AskForm::new();

    let on_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        let is_disabled = disabled.get_untracked();
        spawn_local(async move {
            form.submit_and_report(is_disabled, notifications, |question| async move {
                store.dispatch(QaCommand::Ask(question)).await
            })
            .await;
        });
    };

    view! {
        <form class="relative" on:submit=on_submit>
            <input
                type="text"
                class="w-full px-4 py-3 pr-12 rounded-lg border border-gray-700 bg-gray-800 text-gray-100 placeholder-gray-500 focus:border-blue-500 focus:ring-1 focus:ring-blue-500 outline-none disabled:opacity-50"
                prop:value=move || form.draft.get()
                placeholder=move || placeholder_text(disabled.get())
                disabled=move || disabled.get() || form.busy.get()
                on:input=move |evt| form.draft.set(event_target_value(&evt))
            />
            <button
                type="submit"
                class="absolute right-2 top-1/2 -translate-y-1/2 p-2 text-blue-400 disabled:opacity-50 disabled:cursor-not-allowed"
                disabled=move || !form.can_submit(disabled.get())
                aria-label="Send question"
            >
                <svg class="h-5 w-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 19l9 2-9-18-9 18 9-2zm0 0v-8" />
                </svg>
            </button>
        </form>
    }
}
