use leptos::prelude::*;

use crate::bindings::Document;
use crate::utils::formatting::format_date;

pub(crate) fn row_class(is_selected: bool) -> &'static str {
    if is_selected {
        "w-full flex items-center gap-3 p-3 rounded-lg text-left transition-colors bg-blue-500 text-white"
    } else {
        "w-full flex items-center gap-3 p-3 rounded-lg text-left transition-colors hover:bg-gray-700"
    }
}

/// Uploaded documents as a selectable list. Clicking a row reports its id.
#[component]
pub fn DocumentList(
    #[prop(into)]
    documents: Signal<Vec<Document>>,
    #[prop(into)]
    selected_id: Signal<Option<String>>,
    #[prop(into)]
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <For
                each=move || documents.get().into_iter().enumerate()
                key=|(index, doc)| (*index, doc.id.clone())
                children=move |(_, doc)| view! {
                    <DocumentRow document=doc selected_id=selected_id on_select=on_select />
                }
            />
        </div>
    }
}

#[component]
fn DocumentRow(
    document: Document,
    selected_id: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    let id = document.id.clone();
    let is_selected = {
        let id = id.clone();
        move || selected_id.with(|selected| selected.as_deref() == Some(id.as_str()))
    };
    let uploaded = format_date(&document.uploaded_at);

    view! {
        <button
            type="button"
            class=move || row_class(is_selected())
            on:click=move |_| on_select.run(id.clone())
        >
            <svg class="h-5 w-5 flex-shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z" />
            </svg>
            <div class="min-w-0 flex-1">
                <p class="text-sm font-medium truncate">{document.name}</p>
                <p class="text-xs text-gray-300">{uploaded}</p>
            </div>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::row_class;

    #[test]
    fn test_row_class_highlights_selection() {
        assert!(row_class(true).contains("bg-blue-500"));
        assert!(!row_class(false).contains("bg-blue-500"));
        assert!(row_class(false).contains("hover:bg-gray-700"));
    }
}
