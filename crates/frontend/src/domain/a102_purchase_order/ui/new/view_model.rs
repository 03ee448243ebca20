use crate::domain::a101_material_catalog::api as catalog_api;
use crate::domain::a102_purchase_order::api;
use crate::domain::a104_branch::api as branch_api;
use crate::shared::api_utils::ApiClient;
use contracts::domain::a101_material_catalog::Taxonomy;
use contracts::domain::a102_purchase_order::{
    CreatePurchaseOrderRequest, LineItemField, LineItemList, PurchaseOrder,
};
use contracts::domain::a104_branch::site_names;
use leptos::prelude::*;
use uuid::Uuid;

/// ViewModel of the new-intent form
#[derive(Clone, Copy)]
pub struct PurchaseOrderNewViewModel {
    pub lines: RwSignal<LineItemList>,
    pub taxonomy: RwSignal<Taxonomy>,
    pub sites: RwSignal<Vec<String>>,
    pub delivery_site: RwSignal<String>,
    pub loading_catalog: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    api: StoredValue<ApiClient>,
    requested_by: StoredValue<String>,
}

impl PurchaseOrderNewViewModel {
    pub fn new(api: ApiClient, requested_by: String) -> Self {
        let mut lines = LineItemList::new();
        lines.add();
        Self {
            lines: RwSignal::new(lines),
            taxonomy: RwSignal::new(Taxonomy::default()),
            sites: RwSignal::new(Vec::new()),
            delivery_site: RwSignal::new(String::new()),
            loading_catalog: RwSignal::new(true),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            api: StoredValue::new(api),
            requested_by: StoredValue::new(requested_by),
        }
    }

    /// Catalog (for the taxonomy) and branches (for the site selector).
    pub fn load_reference_data(&self) {
        let this = *self;
        let api = self.api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match catalog_api::fetch_catalog(&api).await {
                Ok(items) => {
                    let taxonomy = Taxonomy::from_catalog(&items);
                    log::info!(
                        "taxonomy built from {} catalog rows, {} categories",
                        items.len(),
                        taxonomy.categories().len()
                    );
                    this.taxonomy.set(taxonomy);
                }
                Err(e) => this
                    .error
                    .set(Some(format!("Failed to load materials: {}", e))),
            }
            this.loading_catalog.set(false);

            match branch_api::fetch_branches(&api).await {
                Ok(branches) => this.sites.set(site_names(&branches)),
                Err(e) => log::error!("Error fetching sites: {}", e),
            }
        });
    }

    pub fn add_line(&self) {
        self.lines.update(|l| {
            l.add();
        });
    }

    pub fn update_line(&self, id: Uuid, field: LineItemField, value: &str) {
        self.lines.update(|l| {
            l.update(id, field, value);
        });
    }

    pub fn remove_line(&self, id: Uuid) {
        self.lines.update(|l| {
            l.remove(id);
        });
    }

    pub fn edit_line(&self, id: Uuid) {
        self.lines.update(|l| l.edit(id));
    }

    pub fn done_line(&self, id: Uuid) {
        self.lines.update(|l| {
            l.done_editing(id);
        });
    }

    pub fn can_submit(&self) -> bool {
        !self.saving.get()
            && !self.delivery_site.with(|s| s.trim().is_empty())
            && self.lines.with(|l| l.all_complete())
    }

    pub fn build_request(&self) -> CreatePurchaseOrderRequest {
        CreatePurchaseOrderRequest {
            delivery_site: self.delivery_site.get_untracked(),
            requested_by: self.requested_by.get_value(),
            materials: self.lines.with_untracked(|l| l.to_request_lines()),
        }
    }

    /// Validates and submits; `on_saved` runs with the created order.
    pub fn save_command(&self, on_saved: Callback<PurchaseOrder>) {
        let request = self.build_request();
        if let Err(e) = request.validate() {
            self.error.set(Some(e));
            return;
        }
        if !self.lines.with_untracked(|l| l.all_complete()) {
            self.error
                .set(Some("Complete every material before submitting".to_string()));
            return;
        }

        let this = *self;
        let api = self.api.get_value();
        this.saving.set(true);
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_purchase_order(&api, &request).await {
                Ok(po) => {
                    log::info!("purchase order {} created", po.purchase_order_id);
                    on_saved.run(po);
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.saving.set(false);
        });
    }
}
