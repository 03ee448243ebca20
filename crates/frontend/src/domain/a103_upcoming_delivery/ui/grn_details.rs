use crate::domain::a103_upcoming_delivery::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::A103_GRN_DETAIL;
use crate::shared::api_utils::use_api;
use crate::shared::date_utils::{format_datetime, format_optional_date};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::toast::toast_error;
use contracts::domain::a103_upcoming_delivery::{format_quantity, Delivery, DeliveryItem};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
fn MaterialReceived(item: DeliveryItem) -> impl IntoView {
    let (badge, badge_class) = if item.is_fully_received() {
        ("Complete", "status-badge--success")
    } else {
        ("Partial", "status-badge--warning")
    };

    view! {
        <div class="material-row">
            <div class="material-row__header">
                <div>
                    <p class="material-row__title">{item.title()}</p>
                    {item.subtitle().map(|s| view! { <p class="material-row__subtitle">{s}</p> })}
                </div>
                <span class=format!("status-badge {}", badge_class)>{badge}</span>
            </div>
            <div class="material-row__quantities">
                <div>
                    <span>"Ordered"</span>
                    <p class="qty qty--ordered">{format_quantity(item.st_quantity)}</p>
                </div>
                <div>
                    <span>"Received"</span>
                    <p class="qty qty--received">"✓ "{format_quantity(item.received_quantity)}</p>
                </div>
                <div>
                    <span>"Pending"</span>
                    <p class="qty qty--pending">{format_quantity(item.pending_quantity())}</p>
                </div>
            </div>
        </div>
    }
}

fn grn_view(delivery: Delivery) -> impl IntoView {
    let completed = format_optional_date(delivery.completed_at());
    let completed_on = delivery
        .completed_at()
        .map(format_datetime)
        .unwrap_or_else(|| "N/A".to_string());
    let requested_by = delivery.created_by.clone().filter(|s| !s.is_empty());
    let items = delivery.items.clone();
    let attachments = delivery.attachments.clone();
    let items_count = delivery.items_count();

    view! {
        <section class="detail-card">
            <h2 class="section-title">{icon("clipboard")}" GRN Summary"</h2>
            <div class="detail-card__row">
                <span>{delivery.delivery_type.id_label()}</span>
                <span class="detail-card__strong">{delivery.reference().to_string()}</span>
            </div>
            <div class="detail-card__row">
                <span>"Status"</span>
                <span class=format!("status-badge {}", delivery.status.badge_class())>
                    "✅ "{delivery.status.label().to_string()}
                </span>
            </div>
            <div class="detail-card__row">
                <span>"Type"</span>
                <span class=format!("type-badge {}", delivery.delivery_type.badge_class())>
                    {delivery.delivery_type.label()}
                </span>
            </div>
            <div class="detail-card__row">
                <span>"Total Items"</span>
                <span>{items_count}</span>
            </div>
            <div class="detail-card__row">
                <span>"Date Completed"</span>
                <span>{completed}</span>
            </div>
        </section>

        <section class="detail-card">
            <h2 class="section-title">{icon("truck")}" Transfer Details"</h2>
            <div class="detail-card__row">
                <span>"From Location"</span>
                <span>{delivery.from_or_na().to_string()}</span>
            </div>
            <div class="detail-card__row">
                <span>"To Location"</span>
                <span>{delivery.to_or_na().to_string()}</span>
            </div>
            {requested_by.map(|name| view! {
                <div class="detail-card__row">
                    <span>"Requested By"</span>
                    <span>{icon("user")}" "{name}</span>
                </div>
            })}
        </section>

        <section class="detail-card">
            <h2 class="section-title">{icon("package")}" Materials Received"</h2>
            {if items.is_empty() {
                view! { <p class="page__placeholder">"No materials found"</p> }.into_any()
            } else {
                items
                    .into_iter()
                    .map(|item| view! { <MaterialReceived item=item /> })
                    .collect_view()
                    .into_any()
            }}
        </section>

        {(!attachments.is_empty()).then(|| view! {
            <section class="detail-card">
                <h2 class="section-title">{icon("image")}" Attachments"</h2>
                <ul class="attachment-list">
                    {attachments.iter().map(|a| {
                        view! {
                            <li>
                                <a class="attachment-list__link" href=a.url().to_string() target="_blank" rel="noopener noreferrer">
                                    {icon("file-text")}
                                    <span class="attachment-list__name">{a.file_name().to_string()}</span>
                                    <span class="attachment-list__action">"View"</span>
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </section>
        })}

        <section class="detail-card detail-card--summary">
            <h3 class="section-title">"Delivery Summary"</h3>
            <div class="detail-card__row">
                <span>"Total Materials"</span>
                <span>{items_count}</span>
            </div>
            <div class="detail-card__row">
                <span>"Status"</span>
                <span class="detail-card__success">"✅ Transferred"</span>
            </div>
            <div class="detail-card__row">
                <span>"Completed On"</span>
                <span>{completed_on}</span>
            </div>
        </section>
    }
}

/// Read-only goods receipt note. The record is looked up among transferred
/// deliveries; when it is missing the tab falls back to the GRN list.
#[component]
pub fn GrnDetails(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_api();
    let stored_id = StoredValue::new(id);

    let (delivery, set_delivery) = signal(None::<Delivery>);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let id_val = stored_id.get_value();
        let api = api.clone();
        spawn_local(async move {
            let found = api::find_delivery(&api, &id_val)
                .await
                .map(|d| d.filter(|d| d.status.is_transferred()));
            set_loading.set(false);
            match found {
                Ok(Some(d)) => {
                    tabs_store.update_tab_title(
                        &format!("{}{}", A103_GRN_DETAIL, id_val),
                        &detail_tab_label("GRN", d.reference()),
                    );
                    set_delivery.set(Some(d));
                }
                Ok(None) => {
                    log::warn!("GRN {} not found among transferred deliveries", id_val);
                    toast_error("GRN Not Found: the requested GRN record could not be found");
                    on_close.run(());
                }
                Err(e) => {
                    toast_error(&format!("Failed to load GRN details: {}", e));
                    on_close.run(());
                }
            }
        });
    });

    view! {
        <PageFrame page_id="a103_grn--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"GRN Details"</h1>
                    <span class="page__subtitle">
                        {move || delivery.with(|d| d.as_ref().map(|d| d.reference().to_string()).unwrap_or_default())}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("arrow-left")}
                        " Back"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || loading.get()>
                    <div class="page__placeholder">
                        <div class="spinner"></div>
                        <p>"Loading GRN details..."</p>
                    </div>
                </Show>

                {move || delivery.get().map(grn_view)}
            </div>
        </PageFrame>
    }
}
