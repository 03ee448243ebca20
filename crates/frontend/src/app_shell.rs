//! Application shell: session gate plus the tabbed main layout.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::tab_labels::A102_PURCHASE_ORDER;
use crate::layout::tabs::{tab_label_for_key, TabPage};
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

/// Sidebar plus tab pages. Syncs the active tab with `?active=`.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration(
        A102_PURCHASE_ORDER,
        tab_label_for_key(A102_PURCHASE_ORDER),
    );

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}

/// Shown when no token is stored; signing in happens on the `/login` page.
#[component]
fn SignInRequired() -> impl IntoView {
    view! {
        <div class="signin-required">
            <h2>"Session expired"</h2>
            <p>"Please sign in to continue."</p>
            <a class="button button--primary" href="/login">"Go to login"</a>
        </div>
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.with(|s| s.is_authenticated())
            fallback=|| view! { <SignInRequired /> }
        >
            <MainLayout />
        </Show>
    }
}
