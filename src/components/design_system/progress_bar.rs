use leptos::prelude::*;

/// Clamp a percentage into `0..=100`
pub fn clamp_percent(percent: u8) -> u8 {
    percent.min(100)
}

/// Thin horizontal progress bar
#[component]
pub fn ProgressBar(
    /// Completion in percent
    #[prop(into)]
    percent: Signal<u8>,
) -> impl IntoView {
    view! {
        <div
            class="w-full bg-gray-200 rounded-full h-1.5 dark:bg-gray-700"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || clamp_percent(percent.get()).to_string()
        >
            <div
                class="bg-blue-500 h-1.5 rounded-full transition-all duration-300"
                style=move || format!("width: {}%", clamp_percent(percent.get()))
            ></div>
        </div>
    }
}
