use super::DeliveryCard;
use crate::domain::a103_upcoming_delivery::api::{self, LIST_LIMIT};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::A103_GRN_DETAIL;
use crate::shared::api_utils::use_api;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a103_upcoming_delivery::{transferred_only, Delivery};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Goods receipt notes: deliveries whose status is `Transferred`.
#[component]
pub fn GrnList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_api();

    let (deliveries, set_deliveries) = signal(Vec::<Delivery>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api::fetch_deliveries(&api, 1, LIST_LIMIT, "").await {
                Ok(all) => set_deliveries.set(transferred_only(all)),
                Err(e) => log::error!("Error fetching GRN: {}", e),
            }
            set_loading.set(false);
        });
    });

    let open_detail = move |id: String| {
        let label = deliveries.with_untracked(|all| {
            all.iter()
                .find(|d| d.id == id)
                .map(|d| d.reference().to_string())
                .unwrap_or_else(|| id.clone())
        });
        tabs_store.open_tab(
            &format!("{}{}", A103_GRN_DETAIL, id),
            &detail_tab_label("GRN", &label),
        );
    };

    view! {
        <PageFrame page_id="a103_grn--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Goods Receipt Note (GRN)"</h1>
                    <span class="page__subtitle">"Completed deliveries"</span>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="page__placeholder">
                                <div class="spinner"></div>
                                <p>"Loading GRN records..."</p>
                            </div>
                        }
                        .into_any();
                    }
                    if deliveries.with(|d| d.is_empty()) {
                        return view! {
                            <div class="empty-state">
                                <div class="empty-state__icon">{icon("package")}</div>
                                <p class="empty-state__hint">"No completed deliveries yet"</p>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="card-list">
                            <For
                                each=move || deliveries.get()
                                key=|d| d.id.clone()
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
