use super::DeliveryCard;
use crate::domain::a103_upcoming_delivery::api::{self, LIST_LIMIT};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::A103_DELIVERY_DETAIL;
use crate::shared::api_utils::use_api;
use crate::shared::config::use_config;
use crate::shared::events::{use_window_events, DELIVERY_RECEIVED};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::polling::use_polling;
use contracts::domain::a103_upcoming_delivery::{upcoming_only, Delivery};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Deliveries not yet transferred; opening one starts the receive flow.
#[component]
pub fn UpcomingDeliveryList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = StoredValue::new(use_api());
    let config = use_config();

    let (deliveries, set_deliveries) = signal(Vec::<Delivery>::new());
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        let api = api.get_value();
        spawn_local(async move {
            match api::fetch_deliveries(&api, 1, LIST_LIMIT, "").await {
                Ok(all) => {
                    let upcoming = upcoming_only(all);
                    log::info!("fetched {} upcoming deliveries", upcoming.len());
                    set_deliveries.set(upcoming);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Error fetching deliveries: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loaded.set(true);
        });
    };

    Effect::new(move |_| load());
    use_polling(config.poll, Callback::new(move |_| load()));
    use_window_events(&[DELIVERY_RECEIVED], Callback::new(move |_| load()));

    let open_detail = move |id: String| {
        let label = deliveries.with_untracked(|all| {
            all.iter()
                .find(|d| d.id == id)
                .map(|d| d.reference().to_string())
                .unwrap_or_else(|| id.clone())
        });
        tabs_store.open_tab(
            &format!("{}{}", A103_DELIVERY_DETAIL, id),
            &detail_tab_label("Delivery", &label),
        );
    };

    view! {
        <PageFrame page_id="a103_upcoming_delivery--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Upcoming Deliveries"</h1>
                    <span class="page__subtitle">"Purchase orders and site transfers on their way"</span>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                {move || {
                    if !loaded.get() {
                        return view! { <div class="spinner"></div> }.into_any();
                    }
                    if deliveries.with(|d| d.is_empty()) {
                        return view! {
                            <div class="empty-state">
                                <div class="empty-state__icon">{icon("truck")}</div>
                                <p class="empty-state__title">"No upcoming deliveries"</p>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="card-list">
                            <For
                                each=move || deliveries.get()
                                key=|d| (d.id.clone(), d.updated_at.clone())
                                children=move |d| {
                                    view! { <DeliveryCard delivery=d on_open=Callback::new(open_detail) /> }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </PageFrame>
    }
}
