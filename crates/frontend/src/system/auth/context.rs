use contracts::system::auth::Session;
use leptos::prelude::*;

use super::storage;

/// Reads the stored session once and shares it with the tree.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = storage::load_session();
    log::info!(
        "session restored: authenticated={}, user={}",
        session.is_authenticated(),
        session.display_name()
    );
    let (session, _) = signal(session);
    provide_context(session);

    children()
}

pub fn use_session() -> ReadSignal<Session> {
    use_context::<ReadSignal<Session>>().expect("SessionProvider not found in component tree")
}

/// Clears the stored session and hands the browser to the login page.
pub fn sign_out() {
    storage::clear_session();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
