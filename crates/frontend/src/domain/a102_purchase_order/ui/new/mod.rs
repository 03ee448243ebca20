pub mod view_model;

use self::view_model::PurchaseOrderNewViewModel;
use super::line_item::MaterialLineItemEditor;
use crate::shared::api_utils::use_api;
use crate::shared::components::SearchableDropdown;
use crate::shared::events::{dispatch_window_event, INTENT_CREATED};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::toast::toast_success;
use crate::system::auth::context::use_session;
use contracts::domain::a102_purchase_order::{LineItemField, LineItemRow, PurchaseOrder};
use leptos::prelude::*;
use thaw::*;

/// New intent (purchase order) form.
#[component]
pub fn PurchaseOrderNew(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let session = use_session();
    let vm = PurchaseOrderNewViewModel::new(
        use_api(),
        session.with_untracked(|s| s.display_name()),
    );
    vm.load_reference_data();

    let row_ids = move || vm.lines.with(|l| l.rows().iter().map(|r| r.id).collect::<Vec<_>>());

    let on_saved = Callback::new(move |po: PurchaseOrder| {
        toast_success(&format!("Intent {} created", po.purchase_order_id));
        dispatch_window_event(INTENT_CREATED);
        on_close.run(());
    });

    view! {
        <PageFrame page_id="a102_purchase_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Create Intent (PO)"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=Signal::derive(move || !vm.can_submit())
                    >
                        {move || if vm.saving.get() { "Submitting..." } else { "Submit Intent" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Cancel"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="form__group">
                    <Label>"Delivery Site"</Label>
                    <SearchableDropdown
                        value=vm.delivery_site
                        options=vm.sites
                        disabled=Signal::derive(move || vm.saving.get())
                        placeholder="Select delivery site"
                        on_change=Callback::new(move |site: String| vm.delivery_site.set(site))
                    />
                </div>

                <div class="form__group">
                    <Label>"Requested By"</Label>
                    <p class="form__static">{move || session.with(|s| s.display_name())}</p>
                </div>

                <Show when=move || vm.loading_catalog.get()>
                    <div class="page__placeholder">"Loading materials..."</div>
                </Show>

                <div class="line-items">
                    <For
                        each=row_ids
                        key=|id| *id
                        children=move |id| {
                            let row = Signal::derive(move || {
                                vm.lines.with(|l| l.get(id).cloned()).unwrap_or_else(|| LineItemRow {
                                    id,
                                    item: Default::default(),
                                    editing: true,
                                })
                            });
                            let index = Signal::derive(move || {
                                vm.lines.with(|l| l.position(id)).unwrap_or_default()
                            });
                            view! {
                                <MaterialLineItemEditor
                                    index=index
                                    row=row
                                    taxonomy=vm.taxonomy
                                    disabled=vm.loading_catalog
                                    on_update=Callback::new(move |(field, value): (LineItemField, String)| {
                                        vm.update_line(id, field, &value)
                                    })
                                    on_remove=Callback::new(move |_| vm.remove_line(id))
                                    on_edit=Callback::new(move |_| vm.edit_line(id))
                                    on_done=Callback::new(move |_| vm.done_line(id))
                                />
                            }
                        }
                    />
                </div>

                <button class="line-items__add" on:click=move |_| vm.add_line()>
                    {icon("plus")}
                    " Add material"
                </button>
            </div>
        </PageFrame>
    }
}
