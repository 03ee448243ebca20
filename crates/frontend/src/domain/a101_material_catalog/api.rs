use crate::shared::api_utils::ApiClient;
use contracts::domain::a101_material_catalog::{MaterialCatalogItem, UploadResult};
use web_sys::{File, FormData};

/// Whole catalog as uploaded from the indent spreadsheet.
pub async fn fetch_catalog(api: &ApiClient) -> Result<Vec<MaterialCatalogItem>, String> {
    api.get_json::<Vec<MaterialCatalogItem>>("/material-catalog")
        .await
}

/// Sends the spreadsheet unchanged; the server replaces the catalog with its rows.
pub async fn upload_excel(api: &ApiClient, file: &File) -> Result<UploadResult, String> {
    let form = FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;
    api.post_form::<UploadResult>("/material-catalog/upload", form)
        .await
}
