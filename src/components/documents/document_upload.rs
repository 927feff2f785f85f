use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::bindings::{accept_attribute, UploadFile};
use crate::components::design_system::{Button, ProgressBar};
use crate::services::notification_service::use_notification_state;
use crate::services::qa_store::{QaCommand, QaStore};
use crate::services::upload_flow::UploadFlow;

/// File picker that uploads the chosen document and shows simulated progress
#[component]
pub fn DocumentUpload(store: QaStore) -> impl IntoView {
    let flow = UploadFlow::new(use_notification_state());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let is_busy = Signal::derive(move || flow.is_busy());
    let percent = Signal::derive(move || flow.percent());

    let on_change = move |evt: ev::Event| {
        let input: HtmlInputElement = event_target(&evt);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        spawn_local(async move {
            let _ = flow
                .run(async move {
                    let upload = UploadFile::from_browser_file(&file).await?;
                    store.dispatch(QaCommand::Upload(upload)).await
                })
                .await;

            // Allow the same file to be picked again
            input.set_value("");
        });
    };

    let open_picker = move |_: ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="space-y-2">
            <div class="flex items-center justify-between space-x-2 p-4 rounded-lg border border-gray-700 bg-gray-800 hover:bg-gray-700 transition">
                <input
                    type="file"
                    node_ref=input_ref
                    accept=accept_attribute()
                    hidden=true
                    on:change=on_change
                />
                <p class="text-sm font-medium text-gray-300">"Upload a document"</p>
                <Button
                    label="Upload document"
                    loading=is_busy
                    on_click=open_picker
                >
                    <svg class="h-5 w-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 16v1a3 3 0 003 3h10a3 3 0 003-3v-1m-4-8l-4-4m0 0L8 8m4-4v12" />
                    </svg>
                </Button>
            </div>

            <Show when=move || is_busy.get()>
                <ProgressBar percent=percent />
            </Show>
        </div>
    }
}
