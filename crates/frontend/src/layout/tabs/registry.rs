//! Maps `tab.key` to the view rendered inside the tab.

use super::tab_labels::*;
use crate::domain::a101_material_catalog::ui::upload::IndentUploadPage;
use crate::domain::a102_purchase_order::ui::details::PurchaseOrderDetails;
use crate::domain::a102_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a102_purchase_order::ui::new::PurchaseOrderNew;
use crate::domain::a103_upcoming_delivery::ui::admin_grn::AdminGrnList;
use crate::domain::a103_upcoming_delivery::ui::delivery_details::DeliveryDetails;
use crate::domain::a103_upcoming_delivery::ui::grn_details::GrnDetails;
use crate::domain::a103_upcoming_delivery::ui::grn_list::GrnList;
use crate::domain::a103_upcoming_delivery::ui::upcoming_list::UpcomingDeliveryList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Renders the content of a tab by its key.
///
/// Detail tabs carry the record id after their prefix, e.g.
/// `a103_grn_detail_65f0c2`. Closing a detail tab goes back to its list.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    // Closes this tab and focuses `target`.
    let back_to = move |target: &'static str| {
        let key_for_close = key_for_close.clone();
        Callback::new(move |_: ()| {
            tabs_store.replace_tab(&key_for_close, target, tab_label_for_key(target));
        })
    };

    match key {
        // a101: material catalog
        A101_MATERIAL_CATALOG => view! { <IndentUploadPage /> }.into_any(),

        // a102: purchase orders (intents)
        A102_PURCHASE_ORDER => view! { <PurchaseOrderList /> }.into_any(),
        A102_PURCHASE_ORDER_NEW => {
            view! { <PurchaseOrderNew on_close=back_to(A102_PURCHASE_ORDER) /> }.into_any()
        }
        k if k.starts_with(A102_PURCHASE_ORDER_DETAIL) => {
            let id = k.trim_start_matches(A102_PURCHASE_ORDER_DETAIL).to_string();
            view! { <PurchaseOrderDetails id=id on_close=back_to(A102_PURCHASE_ORDER) /> }
                .into_any()
        }

        // a103: deliveries and goods receipt notes
        A103_UPCOMING_DELIVERY => view! { <UpcomingDeliveryList /> }.into_any(),
        k if k.starts_with(A103_DELIVERY_DETAIL) => {
            let id = k.trim_start_matches(A103_DELIVERY_DETAIL).to_string();
            view! { <DeliveryDetails id=id on_close=back_to(A103_UPCOMING_DELIVERY) /> }
                .into_any()
        }
        A103_GRN => view! { <GrnList /> }.into_any(),
        k if k.starts_with(A103_GRN_DETAIL) => {
            let id = k.trim_start_matches(A103_GRN_DETAIL).to_string();
            view! { <GrnDetails id=id on_close=back_to(A103_GRN) /> }.into_any()
        }
        A103_ADMIN_GRN => view! { <AdminGrnList /> }.into_any(),

        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
