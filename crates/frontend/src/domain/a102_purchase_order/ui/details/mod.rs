use crate::domain::a102_purchase_order::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::A102_PURCHASE_ORDER_DETAIL;
use crate::shared::api_utils::use_api;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a102_purchase_order::{MaterialLine, PurchaseOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn PurchaseOrderDetails(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_api();
    let stored_id = StoredValue::new(id);

    let (order, set_order) = signal(None::<PurchaseOrder>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id_val = stored_id.get_value();
        let api = api.clone();
        spawn_local(async move {
            match api::fetch_purchase_order(&api, &id_val).await {
                Ok(po) => {
                    tabs_store.update_tab_title(
                        &format!("{}{}", A102_PURCHASE_ORDER_DETAIL, id_val),
                        &detail_tab_label("Intent", &po.purchase_order_id),
                    );
                    set_order.set(Some(po));
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <PageFrame page_id="a102_purchase_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || order.with(|o| {
                            o.as_ref()
                                .map(|po| po.purchase_order_id.clone())
                                .unwrap_or_else(|| "Intent".to_string())
                        })}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("arrow-left")}
                        " Back"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <Show when=move || loading.get()>
                    <div class="spinner"></div>
                </Show>

                {move || order.get().map(|po| {
                    let materials = po.materials.clone();
                    view! {
                        <div class="detail-card">
                            <div class="detail-card__row">
                                <span>"Status"</span>
                                <span class=format!("status-badge {}", po.status.badge_class())>
                                    {po.status.label().to_string()}
                                </span>
                            </div>
                            <div class="detail-card__row">
                                <span>"Request Date"</span>
                                <span>{format_date(&po.request_date)}</span>
                            </div>
                            <div class="detail-card__row">
                                <span>"Delivery Site"</span>
                                <span>{po.delivery_site.clone()}</span>
                            </div>
                            <div class="detail-card__row">
                                <span>"Requested By"</span>
                                <span>{po.requested_by.clone()}</span>
                            </div>
                        </div>

                        <h2 class="section-title">{format!("Materials ({})", po.materials_count())}</h2>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"#"</TableHeaderCell>
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"Description"</TableHeaderCell>
                                    <TableHeaderCell>"Quantity"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {materials.into_iter().enumerate().map(|(i, line)| {
                                    let description = line.description();
                                    let MaterialLine { category, quantity, .. } = line;
                                    view! {
                                        <TableRow>
                                            <TableCell>{i + 1}</TableCell>
                                            <TableCell>{category}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{description}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{quantity}</TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    }
                })}
            </div>
        </PageFrame>
    }
}
