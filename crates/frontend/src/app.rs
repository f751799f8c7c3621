use crate::routes::routes::AppRoutes;
use crate::shared::config::{self, ClientConfig};
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default client config: {:#}", e);
        ClientConfig::default()
    });
    // Both pages read endpoints and timings from context.
    provide_context(config);

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}
