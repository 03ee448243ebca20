use crate::shared::api_utils::ApiClient;
use contracts::domain::a104_branch::Branch;

/// All branches (sites); the endpoint answers with a bare array.
pub async fn fetch_branches(api: &ApiClient) -> Result<Vec<Branch>, String> {
    api.get_json::<Vec<Branch>>("/branches").await
}
