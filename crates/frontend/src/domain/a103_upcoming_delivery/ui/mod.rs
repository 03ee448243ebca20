pub mod admin_grn;
pub mod delivery_details;
pub mod grn_details;
pub mod grn_list;
pub mod upcoming_list;

use contracts::domain::a103_upcoming_delivery::Delivery;
use leptos::prelude::*;

use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

/// Card shared by the upcoming-delivery and GRN lists.
#[component]
pub fn DeliveryCard(delivery: Delivery, on_open: Callback<String>) -> impl IntoView {
    let id = delivery.id.clone();
    let date = delivery
        .date
        .as_deref()
        .or(delivery.created_at.as_deref())
        .map(format_date)
        .unwrap_or_else(|| "N/A".to_string());

    view! {
        <div class="card card--clickable" on:click=move |_| on_open.run(id.clone())>
            <div class="card__header">
                <div>
                    <h3 class="card__title">{delivery.reference().to_string()}</h3>
                    <span class=format!("type-badge {}", delivery.delivery_type.badge_class())>
                        {delivery.delivery_type.label()}
                    </span>
                </div>
                <span class=format!("status-badge {}", delivery.status.badge_class())>
                    {delivery.status.label().to_string()}
                </span>
            </div>
            <dl class="card__fields">
                <div class="card__field">
                    <dt>{icon("map-pin")}" From"</dt>
                    <dd>{delivery.from_or_na().to_string()}</dd>
                </div>
                <div class="card__field">
                    <dt>{icon("map-pin")}" To"</dt>
                    <dd>{delivery.to_or_na().to_string()}</dd>
                </div>
                <div class="card__field">
                    <dt>{icon("calendar")}" Date"</dt>
                    <dd>{date}</dd>
                </div>
                <div class="card__field">
                    <dt>{icon("package")}" Items"</dt>
                    <dd class="card__accent">{delivery.items_count()}</dd>
                </div>
            </dl>
        </div>
    }
}
