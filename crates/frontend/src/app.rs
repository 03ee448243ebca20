use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Resolved once; pages read it from context instead of probing the environment.
    let config = AppConfig::from_environment();
    log::info!("API base URL: {}", config.api_base_url);
    provide_context(config);

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}
