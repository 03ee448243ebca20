use crate::shared::api_utils::{query_pair, ApiClient};
use contracts::domain::a103_upcoming_delivery::{Billing, Delivery, ReceiveDeliveryRequest};
use contracts::domain::common::ApiResponse;
use web_sys::{File, FormData};

/// Limit used by the lists; deliveries are filtered client side.
pub const LIST_LIMIT: usize = 100;
/// Detail pages look a record up in a wider window.
pub const LOOKUP_LIMIT: usize = 1000;

pub async fn fetch_deliveries(
    api: &ApiClient,
    page: usize,
    limit: usize,
    search: &str,
) -> Result<Vec<Delivery>, String> {
    api.get_json::<ApiResponse<Vec<Delivery>>>(&format!(
        "/upcoming-deliveries?page={}&limit={}&{}",
        page,
        limit,
        query_pair("search", search)
    ))
    .await?
    .into_data()
}

/// Finds one delivery by its `_id` within the lookup window.
pub async fn find_delivery(api: &ApiClient, id: &str) -> Result<Option<Delivery>, String> {
    let deliveries = fetch_deliveries(api, 1, LOOKUP_LIMIT, "").await?;
    Ok(deliveries.into_iter().find(|d| d.id == id))
}

pub async fn update_billing(
    api: &ApiClient,
    id: &str,
    billing: &Billing,
) -> Result<Delivery, String> {
    api.put_json::<_, ApiResponse<Delivery>>(
        &format!("/upcoming-deliveries/{}/billing", urlencoding::encode(id)),
        billing,
    )
    .await?
    .into_data()
}

/// Submits received quantities as a JSON `items` part plus one `images`
/// part per proof file.
pub async fn receive_delivery(
    api: &ApiClient,
    id: &str,
    request: &ReceiveDeliveryRequest,
    images: &[File],
) -> Result<Delivery, String> {
    let items = serde_json::to_string(&request.items)
        .map_err(|e| format!("Failed to serialize items: {}", e))?;
    let form = FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;
    form.append_with_str("items", &items)
        .map_err(|e| format!("Failed to attach items: {:?}", e))?;
    for image in images {
        form.append_with_blob_and_filename("images", image, &image.name())
            .map_err(|e| format!("Failed to attach image: {:?}", e))?;
    }
    api.put_form::<ApiResponse<Delivery>>(
        &format!("/upcoming-deliveries/{}/receive", urlencoding::encode(id)),
        form,
    )
    .await?
    .into_data()
}
