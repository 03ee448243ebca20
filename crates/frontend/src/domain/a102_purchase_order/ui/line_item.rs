//! Editor of one material row of the intent form.
//!
//! Complete rows that are not being edited collapse to a summary. The editor
//! only forwards raw `(field, value)` updates; the owning `LineItemList`
//! clears dependent levels when an ancestor changes.

use crate::shared::components::SearchableDropdown;
use crate::shared::icons::icon;
use contracts::domain::a101_material_catalog::Taxonomy;
use contracts::domain::a102_purchase_order::{LineItemField, LineItemRow, LineItemView};
use leptos::prelude::*;

#[component]
fn SummaryField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="line-item__summary-field">
            <span class="line-item__summary-label">{label}":"</span>
            <p class="line-item__summary-value">{value}</p>
        </div>
    }
}

#[component]
pub fn MaterialLineItemEditor(
    /// Position in the form, 0-based
    #[prop(into)]
    index: Signal<usize>,
    #[prop(into)]
    row: Signal<LineItemRow>,
    #[prop(into)]
    taxonomy: Signal<Taxonomy>,
    /// True while the taxonomy is still loading
    #[prop(into)]
    disabled: Signal<bool>,
    on_update: Callback<(LineItemField, String)>,
    on_remove: Callback<()>,
    on_edit: Callback<()>,
    on_done: Callback<()>,
) -> impl IntoView {
    let view_kind = Memo::new(move |_| row.with(|r| r.view()));
    let title = move || format!("Material #{}", index.get() + 1);

    let value_of = move |field: LineItemField| Signal::derive(move || row.with(|r| r.item.get(field)));
    let update = move |field: LineItemField| Callback::new(move |value: String| on_update.run((field, value)));

    let category = value_of(LineItemField::Category);
    let sub_category = value_of(LineItemField::SubCategory);
    let sub_category1 = value_of(LineItemField::SubCategory1);
    let sub_category2 = value_of(LineItemField::SubCategory2);

    let categories = Signal::derive(move || taxonomy.with(|t| t.categories()));
    let subcategories =
        Signal::derive(move || taxonomy.with(|t| t.subcategories(&category.get())));
    let sub_subcategories = Signal::derive(move || {
        taxonomy.with(|t| t.sub_subcategories(&category.get(), &sub_category.get()))
    });
    let sub_sub_subcategories = Signal::derive(move || {
        taxonomy.with(|t| {
            t.sub_sub_subcategories(&category.get(), &sub_category.get(), &sub_category1.get())
        })
    });

    // A level stays locked until its parent is chosen.
    let locked_unless = move |parent: Signal<String>| {
        Signal::derive(move || disabled.get() || parent.with(|p| p.is_empty()))
    };

    let summary = move || {
        let item = row.with(|r| r.item.clone());
        view! {
            <div class="line-item line-item--collapsed">
                <div class="line-item__body">
                    <p class="line-item__title">{title}</p>
                    <div class="line-item__summary">
                        {LineItemField::SUMMARY
                            .into_iter()
                            .map(|field| view! { <SummaryField label=field.label() value=item.get(field) /> })
                            .collect_view()}
                    </div>
                </div>
                <div class="line-item__actions">
                    <button class="button button--icon" title="Edit" on:click=move |_| on_edit.run(())>
                        {icon("edit")}
                    </button>
                    <button class="button button--icon button--danger" title="Remove" on:click=move |_| on_remove.run(())>
                        {icon("x")}
                    </button>
                </div>
            </div>
        }
    };

    let editor = move || {
        view! {
            <div class="line-item line-item--expanded">
                <button class="line-item__remove" title="Remove" on:click=move |_| on_remove.run(())>
                    {icon("x")}
                </button>
                <p class="line-item__title">{title}</p>

                <div class="line-item__grid">
                    <div class="line-item__field">
                        <label>{LineItemField::Category.label()}</label>
                        <SearchableDropdown
                            value=category
                            options=categories
                            disabled=disabled
                            placeholder="Select or type category"
                            on_change=update(LineItemField::Category)
                        />
                    </div>
                    <div class="line-item__field">
                        <label>{LineItemField::SubCategory.label()}</label>
                        <SearchableDropdown
                            value=sub_category
                            options=subcategories
                            disabled=locked_unless(category)
                            placeholder="Select or type sub category"
                            on_change=update(LineItemField::SubCategory)
                        />
                    </div>
                    <div class="line-item__field">
                        <label>{LineItemField::SubCategory1.label()}</label>
                        <SearchableDropdown
                            value=sub_category1
                            options=sub_subcategories
                            disabled=locked_unless(sub_category)
                            placeholder="Select or type sub category 1"
                            on_change=update(LineItemField::SubCategory1)
                        />
                    </div>
                    <div class="line-item__field">
                        <label>{LineItemField::SubCategory2.label()}</label>
                        <SearchableDropdown
                            value=sub_category2
                            options=sub_sub_subcategories
                            disabled=locked_unless(sub_category1)
                            placeholder="Select or type sub category 2"
                            on_change=update(LineItemField::SubCategory2)
                        />
                    </div>
                    <div class="line-item__field">
                        <label>{LineItemField::Quantity.label()}</label>
                        <input
                            type="number"
                            min="1"
                            class="line-item__qty"
                            placeholder="Enter qty"
                            prop:value=move || row.with(|r| r.item.get(LineItemField::Quantity))
                            on:input=move |ev| on_update.run((LineItemField::Quantity, event_target_value(&ev)))
                        />
                    </div>
                </div>

                <Show when=move || row.with(|r| r.can_finish())>
                    <button class="line-item__done" on:click=move |_| on_done.run(())>
                        "✓ Done editing"
                    </button>
                </Show>
            </div>
        }
    };

    move || match view_kind.get() {
        LineItemView::CollapsedSummary => summary().into_any(),
        LineItemView::ExpandedEdit => editor().into_any(),
    }
}
