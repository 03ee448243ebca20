use crate::shared::api_utils::ApiClient;
use contracts::domain::a102_purchase_order::{CreatePurchaseOrderRequest, PurchaseOrder};
use contracts::domain::common::ApiResponse;

/// One page of purchase orders plus the total page count.
pub async fn fetch_purchase_orders(
    api: &ApiClient,
    page: usize,
    limit: usize,
) -> Result<(Vec<PurchaseOrder>, usize), String> {
    let response = api
        .get_json::<ApiResponse<Vec<PurchaseOrder>>>(&format!(
            "/purchase-orders?page={}&limit={}",
            page, limit
        ))
        .await?;
    let total_pages = response.total_pages();
    Ok((response.into_data()?, total_pages))
}

pub async fn fetch_purchase_order(api: &ApiClient, id: &str) -> Result<PurchaseOrder, String> {
    api.get_json::<ApiResponse<PurchaseOrder>>(&format!(
        "/purchase-orders/{}",
        urlencoding::encode(id)
    ))
    .await?
    .into_data()
}

pub async fn create_purchase_order(
    api: &ApiClient,
    request: &CreatePurchaseOrderRequest,
) -> Result<PurchaseOrder, String> {
    request.validate()?;
    api.post_json::<_, ApiResponse<PurchaseOrder>>("/purchase-orders", request)
        .await?
        .into_data()
}
