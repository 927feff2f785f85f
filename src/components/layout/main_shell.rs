use leptos::prelude::*;

/// Two-pane layout: fixed-width sidebar on the left, main panel filling the
/// rest of the window
#[component]
pub fn MainShell(
    #[prop(into)]
    sidebar: ViewFn,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex bg-gray-900 text-gray-100">
            <aside class="w-1/4 p-4 space-y-6 bg-gray-800 border-r border-gray-700">
                {sidebar.run()}
            </aside>
            <main class="flex-1 flex flex-col h-screen">
                {children()}
            </main>
        </div>
    }
}
