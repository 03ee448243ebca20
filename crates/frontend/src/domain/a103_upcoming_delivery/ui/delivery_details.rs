use crate::domain::a103_upcoming_delivery::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::A103_DELIVERY_DETAIL;
use crate::shared::api_utils::use_api;
use crate::shared::events::{dispatch_window_event, DELIVERY_RECEIVED};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::toast::{toast_error, toast_success};
use contracts::domain::a103_upcoming_delivery::{
    format_quantity, receipt_lines, toggle_line, Delivery, ReceiptLine, ReceiveDeliveryRequest,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement, Url};

/// Proof images picked for upload with their object-URL previews; both
/// vectors stay index-aligned.
#[derive(Clone, Default)]
struct ProofImages {
    files: Vec<File>,
    previews: Vec<String>,
}

impl ProofImages {
    fn push(&mut self, file: File) {
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                self.files.push(file);
                self.previews.push(url);
            }
            Err(e) => log::error!("Failed to preview {}: {:?}", file.name(), e),
        }
    }

    fn remove(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
            let url = self.previews.remove(index);
            let _ = Url::revoke_object_url(&url);
        }
    }

    fn clear(&mut self) {
        for url in self.previews.drain(..) {
            let _ = Url::revoke_object_url(&url);
        }
        self.files.clear();
    }
}

#[component]
fn ReceiptLineRow(
    line: ReceiptLine,
    editing: Signal<bool>,
    on_toggle: Callback<(String, bool)>,
) -> impl IntoView {
    let checked = line.is_checked();
    let item_id = line.item_id.clone();

    view! {
        <div class="material-row">
            <div class="material-row__header">
                <p class="material-row__title">{line.name.clone()}</p>
                <Show when=move || editing.get()>
                    {
                        let item_id = item_id.clone();
                        view! {
                            <input
                                type="checkbox"
                                class="material-row__check"
                                prop:checked=checked
                                on:change=move |ev| on_toggle.run((item_id.clone(), event_target_checked(&ev)))
                            />
                        }
                    }
                </Show>
            </div>
            <div class="material-row__quantities">
                <div>
                    <span>"P.O Qty"</span>
                    <p class="qty qty--ordered">{format_quantity(line.ordered_qty)}</p>
                </div>
                <div>
                    <span>"Received"</span>
                    <p class="qty">{format_quantity(line.received_qty)}</p>
                </div>
            </div>
        </div>
    }
}

/// Receive screen of an upcoming delivery: mark lines as received, attach
/// proof images, then submit.
#[component]
pub fn DeliveryDetails(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = StoredValue::new(use_api());
    let stored_id = StoredValue::new(id);

    let (delivery, set_delivery) = signal(None::<Delivery>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let lines = RwSignal::new(Vec::<ReceiptLine>::new());
    let editing = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let images = StoredValue::new_local(ProofImages::default());
    let previews = RwSignal::new(Vec::<String>::new());

    let sync_previews = move || previews.set(images.with_value(|i| i.previews.clone()));

    Effect::new(move |_| {
        let id_val = stored_id.get_value();
        let api = api.get_value();
        spawn_local(async move {
            match api::find_delivery(&api, &id_val).await {
                Ok(Some(d)) => {
                    tabs_store.update_tab_title(
                        &format!("{}{}", A103_DELIVERY_DETAIL, id_val),
                        &detail_tab_label("Delivery", d.reference()),
                    );
                    lines.set(receipt_lines(&d));
                    set_delivery.set(Some(d));
                }
                Ok(None) => set_error.set(Some(format!("Delivery {} not found", id_val))),
                Err(e) => {
                    log::error!("Error fetching delivery {}: {}", id_val, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    on_cleanup(move || images.update_value(|i| i.clear()));

    let on_toggle = Callback::new(move |(item_id, checked): (String, bool)| {
        lines.update(|l| toggle_line(l, &item_id, checked));
    });

    let handle_image_select = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(files) = input.files() {
            images.update_value(|i| {
                for index in 0..files.length() {
                    if let Some(file) = files.get(index) {
                        i.push(file);
                    }
                }
            });
        }
        input.set_value("");
        sync_previews();
    };

    let remove_image = move |index: usize| {
        images.update_value(|i| i.remove(index));
        sync_previews();
    };

    let cancel_edit = move || {
        delivery.with_untracked(|d| {
            if let Some(d) = d {
                lines.set(receipt_lines(d));
            }
        });
        images.update_value(|i| i.clear());
        sync_previews();
        editing.set(false);
    };

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let api = api.get_value();
        let id_val = stored_id.get_value();
        let request = ReceiveDeliveryRequest {
            items: lines.get_untracked(),
        };
        let files = images.with_value(|i| i.files.clone());
        submitting.set(true);
        spawn_local(async move {
            match api::receive_delivery(&api, &id_val, &request, &files).await {
                Ok(updated) => {
                    log::info!(
                        "delivery {} received with {} proof image(s)",
                        updated.reference(),
                        files.len()
                    );
                    toast_success("Delivery updated successfully");
                    images.update_value(|i| i.clear());
                    dispatch_window_event(DELIVERY_RECEIVED);
                    on_close.run(());
                }
                Err(e) => toast_error(&format!("Failed to update delivery: {}", e)),
            }
            submitting.set(false);
        });
    };

    view! {
        <PageFrame page_id="a103_upcoming_delivery--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Delivery Details"</h1>
                    <span class="page__subtitle">
                        {move || delivery.with(|d| {
                            d.as_ref()
                                .map(|d| format!("{} - {}", d.delivery_type.code(), d.reference()))
                                .unwrap_or_default()
                        })}
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
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <Show when=move || loading.get()>
                    <div class="page__placeholder">
                        <div class="spinner"></div>
                        <p>"Loading delivery details..."</p>
                    </div>
                </Show>

                <Show when=move || delivery.with(|d| d.is_some())>
                    <section class="detail-card">
                        <h2 class="section-title">"Materials"</h2>
                        {move || {
                            lines
                                .get()
                                .into_iter()
                                .map(|line| view! {
                                    <ReceiptLineRow
                                        line=line
                                        editing=Signal::from(editing)
                                        on_toggle=on_toggle
                                    />
                                })
                                .collect_view()
                        }}
                    </section>

                    <Show when=move || editing.get()>
                        <section class="detail-card">
                            <h2 class="section-title">"Delivery Proof (Optional)"</h2>
                            <div class="image-grid">
                                {move || {
                                    previews
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, url)| view! {
                                            <div class="image-grid__item">
                                                <img src=url alt=format!("Delivery proof {}", index + 1) />
                                                <button
                                                    class="image-grid__remove"
                                                    title="Remove"
                                                    on:click=move |_| remove_image(index)
                                                >
                                                    {icon("x")}
                                                </button>
                                            </div>
                                        })
                                        .collect_view()
                                }}
                            </div>
                            <label class="upload-box" for="delivery-proof-input">
                                {icon("upload")}
                                <span class="upload-box__title">"Upload Delivery Proof (Challan, etc.)"</span>
                                <span class="upload-box__hint">"Upload images of delivery challan or proof"</span>
                            </label>
                            <input
                                id="delivery-proof-input"
                                type="file"
                                accept="image/*"
                                multiple=true
                                class="hidden"
                                on:change=handle_image_select
                            />
                        </section>
                    </Show>

                    <div class="form-actions">
                        {move || {
                            if editing.get() {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        disabled=Signal::from(submitting)
                                        on_click=move |_| cancel_edit()
                                    >
                                        "Cancel"
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        disabled=Signal::from(submitting)
                                        on_click=move |_| submit()
                                    >
                                        {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                                    </Button>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| editing.set(true)
                                    >
                                        {icon("edit")}
                                        " Edit"
                                    </Button>
                                }
                                .into_any()
                            }
                        }}
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
