use crate::dashboards::YardHeatmapDashboard;
use crate::shared::api_client::ApiClient;
use crate::shared::config::{fallback_config, load_config};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Invalid embedded config, using fallback: {}", e);
        fallback_config()
    });
    log::info!("Backend API: {}", config.api.base_url);

    // Shared HTTP client and settings for every page
    provide_context(ApiClient::new(config.api.base_url.clone()));
    provide_context(config);

    view! {
        <main class="app-main">
            <YardHeatmapDashboard />
        </main>
    }
}
