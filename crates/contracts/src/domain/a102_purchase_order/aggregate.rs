use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Status of an intent (purchase order request).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IntentStatus {
    #[default]
    Pending,
    Approved,
    Transferred,
    Cancelled,
    Other(String),
}

impl IntentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" => IntentStatus::Pending,
            "approved" => IntentStatus::Approved,
            "transferred" => IntentStatus::Transferred,
            "cancelled" => IntentStatus::Cancelled,
            _ => IntentStatus::Other(raw.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            IntentStatus::Pending => "Pending",
            IntentStatus::Approved => "Approved",
            IntentStatus::Transferred => "Transferred",
            IntentStatus::Cancelled => "Cancelled",
            IntentStatus::Other(raw) => raw,
        }
    }

    /// Modifier for the `status-badge` CSS block.
    pub fn badge_class(&self) -> &'static str {
        match self {
            IntentStatus::Transferred => "status-badge--success",
            IntentStatus::Approved => "status-badge--warning",
            IntentStatus::Pending => "status-badge--neutral",
            IntentStatus::Cancelled => "status-badge--danger",
            IntentStatus::Other(_) => "status-badge--muted",
        }
    }
}

impl Serialize for IntentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for IntentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| IntentStatus::parse(&s)).unwrap_or_default())
    }
}

/// Material line as stored on a purchase order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLine {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub sub_category1: String,
    #[serde(default)]
    pub sub_category2: String,
    #[serde(default)]
    pub quantity: u32,
}

impl MaterialLine {
    /// "OPC - 53 Grade - 50kg Bag", skipping blank levels.
    pub fn description(&self) -> String {
        [&self.sub_category, &self.sub_category1, &self.sub_category2]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub purchase_order_id: String,
    #[serde(default)]
    pub request_date: String,
    #[serde(default)]
    pub delivery_site: String,
    #[serde(default)]
    pub materials: Vec<MaterialLine>,
    #[serde(default)]
    pub requested_by: String,
    #[serde(default)]
    pub status: IntentStatus,
}

impl PurchaseOrder {
    pub fn materials_count(&self) -> usize {
        self.materials.len()
    }
}

/// Payload submitted by the new-intent form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseOrderRequest {
    pub delivery_site: String,
    pub requested_by: String,
    pub materials: Vec<MaterialLine>,
}

impl CreatePurchaseOrderRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.delivery_site.trim().is_empty() {
            return Err("Select a delivery site".to_string());
        }
        if self.materials.is_empty() {
            return Err("Add at least one material".to_string());
        }
        if self.materials.iter().any(|m| m.quantity == 0) {
            return Err("Every material needs a quantity".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(IntentStatus::parse("APPROVED"), IntentStatus::Approved);
        assert_eq!(IntentStatus::parse("transferred"), IntentStatus::Transferred);
        assert_eq!(
            IntentStatus::parse("On Hold"),
            IntentStatus::Other("On Hold".to_string())
        );
        assert_eq!(IntentStatus::parse("On Hold").label(), "On Hold");
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(IntentStatus::Transferred.badge_class(), "status-badge--success");
        assert_eq!(IntentStatus::Cancelled.badge_class(), "status-badge--danger");
    }

    #[test]
    fn test_deserialize_purchase_order() {
        let raw = r#"{
            "_id": "65f0",
            "purchaseOrderId": "PO-0012",
            "requestDate": "2024-03-15T10:00:00.000Z",
            "deliverySite": "Site A",
            "requestedBy": "Ravi",
            "status": "approved",
            "materials": [{"category":"Cement","subCategory":"OPC","subCategory1":"53 Grade","subCategory2":"50kg Bag","quantity":10}]
        }"#;
        let po: PurchaseOrder = serde_json::from_str(raw).unwrap();
        assert_eq!(po.status, IntentStatus::Approved);
        assert_eq!(po.materials_count(), 1);
        assert_eq!(po.materials[0].description(), "OPC - 53 Grade - 50kg Bag");
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let po: PurchaseOrder = serde_json::from_str(r#"{"_id":"1","status":null}"#).unwrap();
        assert_eq!(po.status, IntentStatus::Pending);
    }

    #[test]
    fn test_validate_request() {
        let mut request = CreatePurchaseOrderRequest::default();
        assert!(request.validate().is_err());
        request.delivery_site = "Site A".into();
        assert_eq!(request.validate().unwrap_err(), "Add at least one material");
        request.materials.push(MaterialLine {
            category: "Cement".into(),
            quantity: 3,
            ..Default::default()
        });
        assert!(request.validate().is_ok());
    }
}
