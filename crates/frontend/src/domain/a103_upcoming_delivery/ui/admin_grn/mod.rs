pub mod billing;
pub mod state;

use self::billing::BillingSection;
use self::state::{create_state, GrnTableRow, ReceivedItemRow};
use crate::domain::a103_upcoming_delivery::api::{self, LIST_LIMIT};
use crate::domain::a104_branch::api::fetch_branches;
use crate::shared::api_utils::use_api;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a103_upcoming_delivery::{transferred_only, Delivery, GrnFilter};
use contracts::domain::a104_branch::site_names;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
fn GrnDetailsModal(
    delivery: Delivery,
    on_close: Callback<()>,
    on_saved: Callback<Delivery>,
) -> impl IntoView {
    let title = format!("GRN Details · {}", delivery.grn_number());
    let requested_by = delivery
        .created_by
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "N/A".to_string());
    let date = format_optional_date(delivery.created_at.as_deref());
    let items = delivery.items.clone();
    let attachments = delivery.attachments.clone();

    view! {
        <Modal title=title on_close=on_close>
            <div class="detail-grid">
                <div class="detail-grid__cell">
                    <label>"Type"</label>
                    <span class=format!("type-badge {}", delivery.delivery_type.badge_class())>
                        {delivery.delivery_type.label()}
                    </span>
                </div>
                <div class="detail-grid__cell">
                    <label>"From"</label>
                    <p>{delivery.from_or_na().to_string()}</p>
                </div>
                <div class="detail-grid__cell">
                    <label>"To"</label>
                    <p>{delivery.to_or_na().to_string()}</p>
                </div>
                <div class="detail-grid__cell">
                    <label>"Requested By"</label>
                    <p>{requested_by}</p>
                </div>
                <div class="detail-grid__cell">
                    <label>"Status"</label>
                    <span class=format!("status-badge {}", delivery.status.badge_class())>
                        {delivery.status.label().to_string()}
                    </span>
                </div>
                <div class="detail-grid__cell">
                    <label>"Date"</label>
                    <p>{date}</p>
                </div>
            </div>

            <BillingSection delivery=delivery.clone() on_saved=on_saved />

            <h4 class="section-title">{icon("package")}" Materials Received"</h4>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Item"</TableHeaderCell>
                        <TableHeaderCell>"Category"</TableHeaderCell>
                        <TableHeaderCell>"Approved Qty"</TableHeaderCell>
                        <TableHeaderCell>"Received Qty"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {items.iter().map(ReceivedItemRow::from).map(|row| {
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout truncate=true>{row.title}</TableCellLayout>
                                </TableCell>
                                <TableCell>{row.category}</TableCell>
                                <TableCell>{row.approved}</TableCell>
                                <TableCell>{row.received}</TableCell>
                                <TableCell>
                                    <span class=row.badge_class>{row.badge}</span>
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>

            {(!attachments.is_empty()).then(|| view! {
                <h4 class="section-title">{icon("image")}" Attachments"</h4>
                <ul class="attachment-list">
                    {attachments.iter().map(|a| view! {
                        <li>
                            <a class="attachment-list__link" href=a.url().to_string() target="_blank" rel="noopener noreferrer" download="">
                                {icon("file-text")}
                                <span class="attachment-list__name">{a.file_name().to_string()}</span>
                            </a>
                        </li>
                    }).collect_view()}
                </ul>
            })}
        </Modal>
    }
}

/// Admin view over all goods receipt notes: client-side filters, a table,
/// and a details modal where billing can be edited. Loads on mount only.
#[component]
pub fn AdminGrnList() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let state = create_state();
    let search = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        let api = api.get_value();
        spawn_local(async move {
            match fetch_branches(&api).await {
                Ok(branches) => state.update(|s| s.sites = site_names(&branches)),
                Err(e) => log::error!("Error fetching branches: {}", e),
            }
            match api::fetch_deliveries(&api, 1, LIST_LIMIT, "").await {
                Ok(all) => {
                    let grns = transferred_only(all);
                    log::info!("admin GRN: {} transferred deliveries", grns.len());
                    state.update(|s| s.deliveries = grns);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Error fetching GRN records: {}", e);
                    set_error.set(Some(e));
                }
            }
            state.update(|s| s.is_loaded = true);
        });
    };

    Effect::new(move |_| load());

    let filter = Memo::new(move |_| {
        let mut filter = state.with(|s| s.filter.clone());
        filter.search = search.get().trim().to_string();
        filter
    });
    let rows = Memo::new(move |_| {
        let filter: GrnFilter = filter.get();
        state.with(|s| filter.apply(&s.deliveries))
    });
    let selected = Memo::new(move |_| state.with(|s| s.selected().cloned()));

    let on_site = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.filter.site = value);
    };
    let on_date_from = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.filter.date_from = value);
    };
    let on_date_to = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.filter.date_to = value);
    };

    let close_modal = Callback::new(move |_: ()| state.update(|s| s.selected_id = None));
    let on_saved = Callback::new(move |updated: Delivery| state.update(|s| s.replace(updated)));

    view! {
        <PageFrame page_id="a103_admin_grn--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"GRN (Goods Receipt Note)"</h1>
                    <span class="page__subtitle">"View all completed deliveries"</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        "Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <div style="flex: 1; max-width: 360px;">
                        <Input value=search placeholder="Search by ID, site..." />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| state.update(|s| s.show_filters = !s.show_filters)
                    >
                        {icon("filter")}
                        " Filters"
                    </Button>
                </Flex>

                <Show when=move || state.with(|s| s.show_filters)>
                    <div class="filter-panel">
                        <div class="form__group">
                            <label class="form__label">"Filter by Site"</label>
                            <select
                                class="form__input"
                                prop:value=move || state.with(|s| s.filter.site.clone())
                                on:change=on_site
                            >
                                <option value="">"All Sites"</option>
                                {move || state.with(|s| s.sites.clone()).into_iter().map(|site| {
                                    let label = site.clone();
                                    view! { <option value=site>{label}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"From Date"</label>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || state.with(|s| s.filter.date_from.clone())
                                on:input=on_date_from
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"To Date"</label>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || state.with(|s| s.filter.date_to.clone())
                                on:input=on_date_to
                            />
                        </div>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| state.update(|s| s.filter.clear_panel())
                        >
                            "Clear Filters"
                        </Button>
                    </div>
                </Show>

                {move || {
                    if !state.with(|s| s.is_loaded) {
                        return view! {
                            <div class="page__placeholder">
                                <div class="spinner"></div>
                                <p>"Loading GRN records..."</p>
                            </div>
                        }
                        .into_any();
                    }
                    if rows.with(|r| r.is_empty()) {
                        return view! {
                            <div class="empty-state">
                                <div class="empty-state__icon">{icon("package")}</div>
                                <p class="empty-state__hint">"No completed deliveries found"</p>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%; min-width: 900px;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"GRN ID"</TableHeaderCell>
                                        <TableHeaderCell>"Type"</TableHeaderCell>
                                        <TableHeaderCell>"From"</TableHeaderCell>
                                        <TableHeaderCell>"To"</TableHeaderCell>
                                        <TableHeaderCell>"Requested By"</TableHeaderCell>
                                        <TableHeaderCell>"Status"</TableHeaderCell>
                                        <TableHeaderCell>"Date"</TableHeaderCell>
                                        <TableHeaderCell>"Actions"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || rows.get()
                                        key=|d| (d.id.clone(), d.updated_at.clone())
                                        children=move |d| {
                                            let row = GrnTableRow::from(&d);
                                            let id = row.id;
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <div class="cell-stack">
                                                            <strong>{row.grn_number}</strong>
                                                            <span class="cell-stack__caption">{row.caption}</span>
                                                        </div>
                                                    </TableCell>
                                                    <TableCell>
                                                        <span class=row.type_class>{row.type_label}</span>
                                                    </TableCell>
                                                    <TableCell>{row.from}</TableCell>
                                                    <TableCell>{row.to}</TableCell>
                                                    <TableCell>{row.requested_by}</TableCell>
                                                    <TableCell>
                                                        <span class=row.status_class>{row.status_label}</span>
                                                    </TableCell>
                                                    <TableCell>
                                                        <div class="cell-stack">
                                                            <span>{row.created}</span>
                                                            <span class="cell-stack__caption">"Intent Request"</span>
                                                        </div>
                                                    </TableCell>
                                                    <TableCell>
                                                        <button
                                                            class="button button--icon"
                                                            title="View Details"
                                                            on:click=move |_| state.update(|s| s.selected_id = Some(id.clone()))
                                                        >
                                                            {icon("eye")}
                                                        </button>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </TableBody>
                            </Table>
                        </div>
                    }
                    .into_any()
                }}
            </div>

            {move || selected.get().map(|delivery| view! {
                <GrnDetailsModal delivery=delivery on_close=close_modal on_saved=on_saved />
            })}
        </PageFrame>
    }
}
