use super::billing::Billing;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Origin of a delivery: a vendor purchase order or a transfer between sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryType {
    PurchaseOrder,
    #[default]
    SiteTransfer,
}

impl DeliveryType {
    pub fn code(self) -> &'static str {
        match self {
            DeliveryType::PurchaseOrder => "PO",
            DeliveryType::SiteTransfer => "ST",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeliveryType::PurchaseOrder => "Purchase Order",
            DeliveryType::SiteTransfer => "Site Transfer",
        }
    }

    pub fn id_label(self) -> &'static str {
        match self {
            DeliveryType::PurchaseOrder => "PO ID",
            DeliveryType::SiteTransfer => "ST ID",
        }
    }

    /// Caption under the id in the admin GRN table.
    pub fn caption(self) -> &'static str {
        match self {
            DeliveryType::PurchaseOrder => "Vendor-wise PO",
            DeliveryType::SiteTransfer => "ST ID",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            DeliveryType::PurchaseOrder => "type-badge--po",
            DeliveryType::SiteTransfer => "type-badge--st",
        }
    }
}

impl Serialize for DeliveryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for DeliveryType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("PO") => DeliveryType::PurchaseOrder,
            _ => DeliveryType::SiteTransfer,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Partial,
    Transferred,
    Other(String),
}

impl DeliveryStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" => DeliveryStatus::Pending,
            "partial" => DeliveryStatus::Partial,
            "transferred" => DeliveryStatus::Transferred,
            _ => DeliveryStatus::Other(raw.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::Partial => "Partial",
            DeliveryStatus::Transferred => "Transferred",
            DeliveryStatus::Other(raw) => raw,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            DeliveryStatus::Transferred => "status-badge--success",
            DeliveryStatus::Partial => "status-badge--warning",
            DeliveryStatus::Pending => "status-badge--neutral",
            DeliveryStatus::Other(_) => "status-badge--muted",
        }
    }

    pub fn is_transferred(&self) -> bool {
        matches!(self, DeliveryStatus::Transferred)
    }
}

impl Serialize for DeliveryStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for DeliveryStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| DeliveryStatus::parse(&s)).unwrap_or_default())
    }
}

/// A delivered material line with ordered and received quantities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryItem {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub sub_category1: String,
    #[serde(default)]
    pub sub_category2: String,
    #[serde(default)]
    pub st_quantity: f64,
    #[serde(default)]
    pub received_quantity: f64,
}

impl DeliveryItem {
    pub fn title(&self) -> String {
        if !self.category.is_empty() {
            self.category.clone()
        } else if !self.name.is_empty() {
            self.name.clone()
        } else {
            "N/A".to_string()
        }
    }

    /// Joined sub categories, or `None` when the first two levels are blank.
    pub fn subtitle(&self) -> Option<String> {
        if self.sub_category.is_empty() && self.sub_category1.is_empty() {
            return None;
        }
        let parts: Vec<&str> = [&self.sub_category, &self.sub_category1, &self.sub_category2]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect();
        Some(parts.join(" - "))
    }

    pub fn pending_quantity(&self) -> f64 {
        (self.st_quantity - self.received_quantity).max(0.0)
    }

    pub fn is_fully_received(&self) -> bool {
        self.received_quantity >= self.st_quantity
    }
}

/// Attachment reference: either a bare URL or `{ "url": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attachment {
    Url(String),
    Object { url: String },
}

impl Attachment {
    pub fn url(&self) -> &str {
        match self {
            Attachment::Url(url) => url,
            Attachment::Object { url } => url,
        }
    }

    pub fn file_name(&self) -> &str {
        let url = self.url();
        url.rsplit('/').next().unwrap_or(url)
    }
}

/// Upcoming delivery; once transferred it doubles as a goods receipt note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub st_id: String,
    #[serde(default)]
    pub transfer_number: String,
    #[serde(rename = "type", default)]
    pub delivery_type: DeliveryType,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "createdBy", default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub status: DeliveryStatus,
    #[serde(default)]
    pub items: Vec<DeliveryItem>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub billing: Option<Billing>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl Delivery {
    /// Id shown on cards: ST id, then transfer number.
    pub fn reference(&self) -> &str {
        non_empty(&self.st_id)
            .or_else(|| non_empty(&self.transfer_number))
            .unwrap_or("N/A")
    }

    /// Id shown in the admin table: transfer number, then ST id.
    pub fn grn_number(&self) -> &str {
        non_empty(&self.transfer_number)
            .or_else(|| non_empty(&self.st_id))
            .unwrap_or("N/A")
    }

    pub fn from_or_na(&self) -> &str {
        non_empty(&self.from).unwrap_or("N/A")
    }

    pub fn to_or_na(&self) -> &str {
        non_empty(&self.to).unwrap_or("N/A")
    }

    /// Timestamp the GRN was completed: updated, then delivery date, then created.
    pub fn completed_at(&self) -> Option<&str> {
        self.updated_at
            .as_deref()
            .or(self.date.as_deref())
            .or(self.created_at.as_deref())
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }
}

/// Deliveries already transferred, i.e. goods receipt notes.
pub fn transferred_only(deliveries: Vec<Delivery>) -> Vec<Delivery> {
    deliveries
        .into_iter()
        .filter(|d| d.status.is_transferred())
        .collect()
}

/// Deliveries still on their way.
pub fn upcoming_only(deliveries: Vec<Delivery>) -> Vec<Delivery> {
    deliveries
        .into_iter()
        .filter(|d| !d.status.is_transferred())
        .collect()
}

/// Renders a quantity without a trailing ".0" for whole numbers.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "_id": "d1",
        "st_id": "ST-0042",
        "transfer_number": "TR-9",
        "type": "PO",
        "from": "Vendor Yard",
        "to": "Site B",
        "createdBy": "Asha",
        "status": "Transferred",
        "items": [
            {"category": "Cement", "sub_category": "OPC", "sub_category1": "53 Grade", "st_quantity": 10, "received_quantity": 7},
            {"name": "Binding wire", "st_quantity": 5, "received_quantity": 5}
        ],
        "attachments": ["https://files.example/grn/challan-1.jpg", {"url": "https://files.example/grn/bill.pdf"}],
        "billing": {"invoiceNumber": "INV-1", "price": 1000, "discount": 50, "amount": 950, "billDate": "2024-03-10T00:00:00.000Z"},
        "createdAt": "2024-03-09T08:00:00.000Z",
        "updatedAt": "2024-03-11T12:30:00.000Z"
    }"#;

    #[test]
    fn test_deserialize_delivery() {
        let d: Delivery = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(d.delivery_type, DeliveryType::PurchaseOrder);
        assert!(d.status.is_transferred());
        assert_eq!(d.reference(), "ST-0042");
        assert_eq!(d.grn_number(), "TR-9");
        assert_eq!(d.items_count(), 2);
        assert_eq!(d.completed_at(), Some("2024-03-11T12:30:00.000Z"));
        assert_eq!(d.billing.as_ref().unwrap().amount, 950.0);
    }

    #[test]
    fn test_item_quantities() {
        let d: Delivery = serde_json::from_str(SAMPLE).unwrap();
        let cement = &d.items[0];
        assert_eq!(cement.pending_quantity(), 3.0);
        assert!(!cement.is_fully_received());
        assert_eq!(cement.title(), "Cement");
        assert_eq!(cement.subtitle().as_deref(), Some("OPC - 53 Grade"));

        let wire = &d.items[1];
        assert!(wire.is_fully_received());
        assert_eq!(wire.title(), "Binding wire");
        assert_eq!(wire.subtitle(), None);
    }

    #[test]
    fn test_over_delivery_has_no_pending() {
        let item = DeliveryItem {
            st_quantity: 4.0,
            received_quantity: 6.0,
            ..Default::default()
        };
        assert_eq!(item.pending_quantity(), 0.0);
        assert!(item.is_fully_received());
    }

    #[test]
    fn test_attachment_file_names() {
        let d: Delivery = serde_json::from_str(SAMPLE).unwrap();
        let names: Vec<&str> = d.attachments.iter().map(Attachment::file_name).collect();
        assert_eq!(names, vec!["challan-1.jpg", "bill.pdf"]);
    }

    #[test]
    fn test_defaults_and_fallbacks() {
        let d: Delivery = serde_json::from_str(r#"{"_id":"x"}"#).unwrap();
        assert_eq!(d.delivery_type, DeliveryType::SiteTransfer);
        assert_eq!(d.status, DeliveryStatus::Pending);
        assert_eq!(d.reference(), "N/A");
        assert_eq!(d.from_or_na(), "N/A");
        assert_eq!(d.completed_at(), None);
    }

    #[test]
    fn test_transferred_and_upcoming_split() {
        let all = vec![
            Delivery { id: "1".into(), status: DeliveryStatus::Transferred, ..Default::default() },
            Delivery { id: "2".into(), status: DeliveryStatus::Partial, ..Default::default() },
            Delivery { id: "3".into(), status: DeliveryStatus::parse("TRANSFERRED"), ..Default::default() },
        ];
        let done: Vec<String> = transferred_only(all.clone()).into_iter().map(|d| d.id).collect();
        let open: Vec<String> = upcoming_only(all).into_iter().map(|d| d.id).collect();
        assert_eq!(done, vec!["1", "3"]);
        assert_eq!(open, vec!["2"]);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(2.5), "2.5");
    }
}
