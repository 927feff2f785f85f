use leptos::prelude::*;

use crate::bindings::QuestionRecord;
use crate::utils::formatting::format_timestamp;

/// Question/answer history, oldest first
#[component]
pub fn QuestionList(#[prop(into)] questions: Signal<Vec<QuestionRecord>>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <For
                each=move || questions.get().into_iter().enumerate()
                key=|(index, qa)| (*index, qa.id.clone())
                children=move |(_, qa)| view! { <QuestionAnswer record=qa /> }
            />
        </div>
    }
}

#[component]
fn QuestionAnswer(record: QuestionRecord) -> impl IntoView {
    let asked_at = format_timestamp(&record.timestamp);

    view! {
        <div class="space-y-2">
            <div class="bg-blue-800 text-blue-200 p-4 rounded-lg shadow">
                <p class="font-medium">"You:"</p>
                <p>{record.question}</p>
            </div>
            <div class="bg-gray-800 text-gray-200 p-4 rounded-lg shadow">
                <p class="font-medium">"Answer:"</p>
                <p class="whitespace-pre-wrap">{record.answer}</p>
                <div class="text-xs text-gray-400 mt-2">{asked_at}</div>
            </div>
        </div>
    }
}
