use crate::domain::a103_upcoming_delivery::api;
use crate::shared::api_utils::use_api;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::toast::{toast_error, toast_success};
use contracts::domain::a103_upcoming_delivery::{BillingField, BillingForm, Delivery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn rupees(value: f64) -> String {
    format!("₹{:.2}", value)
}

fn or_not_set(value: &str) -> String {
    if value.is_empty() {
        "Not set".to_string()
    } else {
        value.to_string()
    }
}

/// Billing block of the admin GRN modal. Edits go to a [`BillingForm`];
/// cancel reseeds it from the delivery, save sends it and hands the server
/// copy to `on_saved`.
#[component]
pub fn BillingSection(delivery: Delivery, on_saved: Callback<Delivery>) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let delivery_id = StoredValue::new(delivery.id.clone());
    let seed = StoredValue::new(delivery.billing.clone());

    let form = RwSignal::new(BillingForm::from_billing(delivery.billing.as_ref()));
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let set_field = move |field: BillingField| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| f.set_field(field, &value));
        }
    };

    let cancel = move || {
        form.set(seed.with_value(|b| BillingForm::from_billing(b.as_ref())));
        editing.set(false);
    };

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let api = api.get_value();
        let id = delivery_id.get_value();
        let billing = form.with_untracked(BillingForm::to_billing);
        saving.set(true);
        spawn_local(async move {
            match api::update_billing(&api, &id, &billing).await {
                Ok(updated) => {
                    log::info!("billing saved for {}", updated.grn_number());
                    toast_success("Billing information updated successfully");
                    seed.set_value(updated.billing.clone());
                    editing.set(false);
                    on_saved.run(updated);
                }
                Err(e) => toast_error(&format!("Failed to update billing information: {}", e)),
            }
            saving.set(false);
        });
    };

    view! {
        <section class="billing">
            <div class="billing__header">
                <h4 class="section-title">{icon("receipt")}" Billing Information"</h4>
                {move || {
                    if editing.get() {
                        view! {
                            <Flex gap=FlexGap::Small>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    disabled=Signal::from(saving)
                                    on_click=move |_| cancel()
                                >
                                    "Cancel"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::from(saving)
                                    on_click=move |_| save()
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save" }}
                                </Button>
                            </Flex>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(true)>
                                {icon("edit")}
                                " Edit"
                            </Button>
                        }
                        .into_any()
                    }
                }}
            </div>

            <div class="billing__grid">
                <div class="form__group">
                    <label class="form__label">"Invoice Number"</label>
                    {move || if editing.get() {
                        view! {
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Enter invoice number"
                                prop:value=move || form.with(|f| f.invoice_number.clone())
                                on:input=set_field(BillingField::InvoiceNumber)
                            />
                        }.into_any()
                    } else {
                        view! { <p class="form__static">{form.with(|f| or_not_set(&f.invoice_number))}</p> }.into_any()
                    }}
                </div>

                <div class="form__group">
                    <label class="form__label">"Bill Date"</label>
                    {move || if editing.get() {
                        view! {
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || form.with(|f| f.bill_date.clone())
                                on:input=set_field(BillingField::BillDate)
                            />
                        }.into_any()
                    } else {
                        let shown = form.with(|f| {
                            if f.bill_date.is_empty() {
                                "Not set".to_string()
                            } else {
                                format_optional_date(Some(&f.bill_date))
                            }
                        });
                        view! { <p class="form__static">{shown}</p> }.into_any()
                    }}
                </div>

                <div class="form__group">
                    <label class="form__label">"Price (₹)"</label>
                    {move || if editing.get() {
                        view! {
                            <input
                                type="number"
                                class="form__input"
                                placeholder="0.00"
                                step="0.01"
                                min="0"
                                prop:value=move || form.with(|f| f.price.clone())
                                on:input=set_field(BillingField::Price)
                            />
                        }.into_any()
                    } else {
                        view! { <p class="form__static">{rupees(form.with(|f| f.to_billing().price))}</p> }.into_any()
                    }}
                </div>

                <div class="form__group">
                    <label class="form__label">"Discount (₹)"</label>
                    {move || if editing.get() {
                        view! {
                            <input
                                type="number"
                                class="form__input"
                                placeholder="0.00"
                                step="0.01"
                                min="0"
                                prop:value=move || form.with(|f| f.discount.clone())
                                on:input=set_field(BillingField::Discount)
                            />
                        }.into_any()
                    } else {
                        view! { <p class="form__static">{rupees(form.with(|f| f.to_billing().discount))}</p> }.into_any()
                    }}
                </div>

                <div class="billing__total">
                    <label class="form__label">"Total Amount (Auto-calculated)"</label>
                    <p class="billing__amount">{move || rupees(form.with(|f| f.amount))}</p>
                    <p class="form__hint">"Price - Discount = Amount"</p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupees_two_decimals() {
        assert_eq!(rupees(950.0), "₹950.00");
        assert_eq!(rupees(-20.5), "₹-20.50");
    }

    #[test]
    fn test_or_not_set() {
        assert_eq!(or_not_set(""), "Not set");
        assert_eq!(or_not_set("INV-1"), "INV-1");
    }
}
