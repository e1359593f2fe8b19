use crate::app_shell::AppShell;
use crate::layout::global_context::SessionContext;
use crate::shared::theme::StyleProvider;
use contracts::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("embedded configuration rejected, using defaults: {e:#}");
        AppConfig::default()
    });

    // One session per page load; every component reaches it through context.
    provide_context(SessionContext::new(&config));

    view! {
        <StyleProvider>
            <AppShell />
        </StyleProvider>
    }
}
