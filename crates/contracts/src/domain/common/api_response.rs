use serde::{Deserialize, Serialize};

/// Paging block returned next to list payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub total_pages: usize,
}

/// Envelope used by the material API: `{ success, data, pagination?, message? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Total pages, never less than 1.
    pub fn total_pages(&self) -> usize {
        self.pagination
            .as_ref()
            .map(|p| p.total_pages)
            .unwrap_or(1)
            .max(1)
    }

    /// Unwraps the payload, turning `success: false` into an error message.
    pub fn into_data(self) -> Result<T, String> {
        if !self.success {
            return Err(self
                .message
                .unwrap_or_else(|| "Request was not successful".to_string()));
        }
        self.data
            .ok_or_else(|| "Response contained no data".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_data_success() {
        let raw = r#"{"success":true,"data":[1,2,3],"pagination":{"page":1,"limit":10,"total":3,"totalPages":1}}"#;
        let parsed: ApiResponse<Vec<u32>> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.total_pages(), 1);
        assert_eq!(parsed.into_data().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_into_data_failure_uses_message() {
        let raw = r#"{"success":false,"message":"Not allowed"}"#;
        let parsed: ApiResponse<Vec<u32>> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_data().unwrap_err(), "Not allowed");
    }

    #[test]
    fn test_total_pages_defaults_to_one() {
        let raw = r#"{"success":true,"data":[]}"#;
        let parsed: ApiResponse<Vec<u32>> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.total_pages(), 1);
    }
}
