use super::table::IndentTable;
use crate::domain::a101_material_catalog::api;
use crate::shared::api_utils::use_api;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::shared::toast::{toast_error, toast_success};
use contracts::domain::a101_material_catalog::MaterialCatalogItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// Indent upload: replaces the material catalog from an `.xlsx` file and
/// shows what is currently stored.
#[component]
pub fn IndentUploadPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let (materials, set_materials) = signal(Vec::<MaterialCatalogItem>::new());
    let (loading, set_loading) = signal(true);
    let (uploading, set_uploading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let fetch_materials = move || {
        let api = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_catalog(&api).await {
                Ok(items) => {
                    log::info!("fetched {} catalog rows", items.len());
                    set_materials.set(items);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch materials: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| fetch_materials());

    let handle_file_select = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Lets the same file be picked again after this upload.
        input.set_value("");

        let api = api.get_value();
        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_excel(&api, &file).await {
                Ok(result) => {
                    log::info!(
                        "catalog upload: {} added, {} deleted",
                        result.count,
                        result.deleted_count
                    );
                    toast_success(&result.summary());
                    fetch_materials();
                }
                Err(e) => toast_error(&format!("Failed to upload Excel file: {}", e)),
            }
            set_uploading.set(false);
        });
    };

    view! {
        <PageFrame page_id="a101_material_catalog--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Upload an Indent List / See Existing Indent List"</h1>
                    <span class="page__subtitle">"Supported file: .xlsx"</span>
                </div>
                <div class="page__header-right">
                    <label
                        class="button button--primary"
                        class:button--disabled=move || uploading.get()
                        for="indent-file-input"
                    >
                        {icon("upload")}
                        {move || if uploading.get() { " Uploading..." } else { " Upload Excel" }}
                    </label>
                    <input
                        id="indent-file-input"
                        type="file"
                        accept=".xlsx"
                        class="hidden"
                        disabled=move || uploading.get()
                        on:change=handle_file_select
                    />
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                {move || {
                    if loading.get() {
                        view! { <div class="page__placeholder">"Loading materials..."</div> }.into_any()
                    } else if materials.with(|m| m.is_empty()) {
                        view! {
                            <div class="page__placeholder">
                                "No materials found. Upload an Excel file to get started."
                            </div>
                        }
                        .into_any()
                    } else {
                        view! { <IndentTable data=materials /> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}
