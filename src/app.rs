use leptos::prelude::*;

use crate::bindings::ApiClient;
use crate::components::design_system::ToastContainer;
use crate::components::documents::{DocumentList, DocumentUpload};
use crate::components::layout::MainShell;
use crate::components::questions::{QuestionInput, QuestionList};
use crate::config::ClientConfig;
use crate::services::notification_service::provide_notification_state;
use crate::services::qa_store::QaStore;

#[component]
pub fn App() -> impl IntoView {
    provide_notification_state();

    let config = ClientConfig::from_env();
    log::info!("Using question-answering backend at {}", config.api_url);
    let store = QaStore::new(ApiClient::new(config));

    view! { <QaWorkspace store=store /> }
}

/// Sidebar with upload and documents, main panel with the Q&A history.
///
/// Needs a `NotificationState` in context.
#[component]
pub fn QaWorkspace(store: QaStore) -> impl IntoView {
    let no_selection = Signal::derive(move || !store.has_selection());

    let select_document = Callback::new(move |id: String| store.select(id));

    view! {
        <ToastContainer />

        <MainShell sidebar=move || view! {
            <div class="flex items-center gap-2">
                <svg class="h-6 w-6 text-blue-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z" />
                </svg>
                <h1 class="text-xl font-bold">"Document Q&A"</h1>
            </div>

            <DocumentUpload store=store />

            <div class="space-y-4">
                <h2 class="text-lg font-semibold">"Your Documents"</h2>
                <DocumentList
                    documents=store.documents
                    selected_id=store.selected_document_id
                    on_select=select_document
                />
                <Show when=move || store.documents.with(Vec::is_empty)>
                    <p class="text-center py-4 text-gray-400">"No documents uploaded yet"</p>
                </Show>
            </div>
        }>
            <div class="flex-1 overflow-y-auto p-6 space-y-6">
                <QuestionList questions=store.questions />
                <Show when=move || store.questions.with(Vec::is_empty)>
                    <div class="p-8 rounded-lg shadow text-center bg-gray-800 text-gray-400">
                        <p>"No questions asked yet."</p>
                        <p class="mt-2 text-sm">"Start by selecting a document and asking a question."</p>
                    </div>
                </Show>
            </div>

            <div class="p-4">
                <QuestionInput store=store disabled=no_selection />
                <Show when=move || no_selection.get()>
                    <p class="text-sm mt-2 text-gray-400">"Please select a document to ask questions."</p>
                </Show>
            </div>
        </MainShell>
    }
}
