use crate::domain::a001_platform_order::ui::list::OrdersDashboard;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the configuration to the whole app via context.
    provide_context(load_config());

    view! {
        <main class="app">
            <OrdersDashboard />
        </main>
    }
}
