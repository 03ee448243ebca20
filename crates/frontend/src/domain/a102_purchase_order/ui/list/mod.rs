pub mod state;

use self::state::{create_state, PAGE_SIZE};
use super::add_popup::AddIntentPopup;
use crate::domain::a102_purchase_order::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{
    A102_PURCHASE_ORDER_DETAIL, A102_PURCHASE_ORDER_NEW,
};
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::api_utils::use_api;
use crate::shared::components::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_date;
use crate::shared::events::{use_window_events, INTENT_LIST_REFRESH};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::polling::use_polling;
use crate::system::auth::context::use_session;
use contracts::domain::a102_purchase_order::PurchaseOrder;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn PurchaseOrderCard(po: PurchaseOrder, on_open: Callback<(String, String)>) -> impl IntoView {
    let id = po.id.clone();
    let number = po.purchase_order_id.clone();
    let materials = format!("{} items", po.materials_count());

    view! {
        <div class="card card--clickable" on:click=move |_| on_open.run((id.clone(), number.clone()))>
            <div class="card__header">
                <div>
                    <h3 class="card__title">{po.purchase_order_id.clone()}</h3>
                    <p class="card__subtitle">{format_date(&po.request_date)}</p>
                </div>
                <span class=format!("status-badge {}", po.status.badge_class())>
                    {po.status.label().to_string()}
                </span>
            </div>
            <dl class="card__fields">
                <div class="card__field">
                    <dt>"Delivery Site"</dt>
                    <dd>{po.delivery_site.clone()}</dd>
                </div>
                <div class="card__field">
                    <dt>"Materials"</dt>
                    <dd class="card__accent">{materials}</dd>
                </div>
                <div class="card__field">
                    <dt>"Requested By"</dt>
                    <dd>{po.requested_by.clone()}</dd>
                </div>
            </dl>
        </div>
    }
}

/// Intent (purchase order) list: paged cards, refreshed by polling.
#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = StoredValue::new(use_api());
    let config = use_config();
    let session = use_session();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (show_popup, set_show_popup) = signal(false);

    let load_items = move || {
        let api = api.get_value();
        let page = state.with_untracked(|s| s.page);
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_purchase_orders(&api, page, PAGE_SIZE).await {
                Ok((items, total_pages)) => {
                    let count = items.len();
                    let applied = state
                        .try_maybe_update(|s| {
                            let applied = s.apply_page(page, items, total_pages);
                            (applied, applied)
                        })
                        .unwrap_or(false);
                    if applied {
                        log::info!("fetched {} purchase orders (page {})", count, page);
                        set_error.set(None);
                    } else {
                        log::debug!("dropped stale purchase orders for page {}", page);
                    }
                }
                Err(e) => {
                    log::error!("Error fetching purchase orders: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_items());
    use_polling(config.poll, Callback::new(move |_| load_items()));

    use_window_events(&INTENT_LIST_REFRESH, Callback::new(move |_| load_items()));

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        load_items();
    };

    let open_detail = move |(id, number): (String, String)| {
        tabs_store.open_tab(
            &format!("{}{}", A102_PURCHASE_ORDER_DETAIL, id),
            &detail_tab_label("Intent", &number),
        );
    };

    let open_new = move |_: ()| {
        tabs_store.open_tab(
            A102_PURCHASE_ORDER_NEW,
            tab_label_for_key(A102_PURCHASE_ORDER_NEW),
        );
    };

    view! {
        <PageFrame page_id="a102_purchase_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Material Intent"</h1>
                    <span class="page__subtitle">{move || session.with(|s| s.display_name())}</span>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                {move || {
                    if loading.get() && !state.with(|s| s.is_loaded) {
                        return view! { <div class="spinner"></div> }.into_any();
                    }
                    if state.with(|s| s.items.is_empty()) {
                        return view! {
                            <div class="empty-state">
                                <div class="empty-state__icon">{icon("plus")}</div>
                                <p class="empty-state__title">"No Intent Requests"</p>
                                <p class="empty-state__hint">"Click the + button to create your first intent"</p>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="card-list">
                            <For
                                each=move || state.get().items
                                key=|po| po.id.clone()
                                children=move |po| {
                                    view! { <PurchaseOrderCard po=po on_open=Callback::new(open_detail) /> }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }}

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    on_page_change=Callback::new(go_to_page)
                />
            </div>

            <button class="fab" title="Create intent" on:click=move |_| set_show_popup.set(true)>
                {icon("plus")}
            </button>

            <Show when=move || show_popup.get()>
                <AddIntentPopup
                    on_close=Callback::new(move |_| set_show_popup.set(false))
                    on_create=Callback::new(open_new)
                />
            </Show>
        </PageFrame>
    }
}
