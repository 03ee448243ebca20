use crate::shared::date_utils::format_date;
use contracts::domain::a103_upcoming_delivery::{format_quantity, Delivery, DeliveryItem, GrnFilter};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct AdminGrnState {
    /// Transferred deliveries as last fetched; filtering happens on top.
    pub deliveries: Vec<Delivery>,
    pub filter: GrnFilter,
    pub sites: Vec<String>,
    pub show_filters: bool,
    /// `_id` of the delivery shown in the details modal
    pub selected_id: Option<String>,
    pub is_loaded: bool,
}

impl AdminGrnState {
    pub fn selected(&self) -> Option<&Delivery> {
        let id = self.selected_id.as_deref()?;
        self.deliveries.iter().find(|d| d.id == id)
    }

    /// Swaps in the server copy of a delivery after a billing save.
    pub fn replace(&mut self, updated: Delivery) {
        if let Some(slot) = self.deliveries.iter_mut().find(|d| d.id == updated.id) {
            *slot = updated;
        }
    }
}

/// Display strings of one admin GRN table row, owned so each cell can take its own.
#[derive(Clone, Debug, PartialEq)]
pub struct GrnTableRow {
    pub id: String,
    pub grn_number: String,
    pub caption: &'static str,
    pub type_label: &'static str,
    pub type_class: String,
    pub from: String,
    pub to: String,
    pub requested_by: String,
    pub status_label: String,
    pub status_class: String,
    pub created: String,
}

impl From<&Delivery> for GrnTableRow {
    fn from(d: &Delivery) -> Self {
        Self {
            id: d.id.clone(),
            grn_number: d.grn_number().to_string(),
            caption: d.delivery_type.caption(),
            type_label: d.delivery_type.label(),
            type_class: format!("type-badge {}", d.delivery_type.badge_class()),
            from: d.from_or_na().to_string(),
            to: d.to_or_na().to_string(),
            requested_by: d
                .created_by
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            status_label: d.status.label().to_string(),
            status_class: format!("status-badge {}", d.status.badge_class()),
            created: d
                .created_at
                .as_deref()
                .map(format_date)
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

/// One line of the "Materials Received" table in the details modal.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceivedItemRow {
    pub title: String,
    pub category: String,
    pub approved: String,
    pub received: String,
    pub badge: &'static str,
    pub badge_class: &'static str,
}

impl From<&DeliveryItem> for ReceivedItemRow {
    fn from(item: &DeliveryItem) -> Self {
        let (badge, badge_class) = if item.is_fully_received() {
            ("Complete", "status-badge status-badge--success")
        } else {
            ("Partial", "status-badge status-badge--warning")
        };
        Self {
            title: item.title(),
            category: item.subtitle().unwrap_or_else(|| "N/A".to_string()),
            approved: format_quantity(item.st_quantity),
            received: format_quantity(item.received_quantity),
            badge,
            badge_class,
        }
    }
}

pub fn create_state() -> RwSignal<AdminGrnState> {
    RwSignal::new(AdminGrnState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_keeps_order_and_selection() {
        let mut state = AdminGrnState {
            deliveries: vec![
                Delivery { id: "a".into(), ..Default::default() },
                Delivery { id: "b".into(), ..Default::default() },
            ],
            selected_id: Some("b".into()),
            ..Default::default()
        };
        state.replace(Delivery {
            id: "b".into(),
            transfer_number: "TR-2".into(),
            ..Default::default()
        });
        assert_eq!(state.deliveries[1].transfer_number, "TR-2");
        assert_eq!(state.selected().map(|d| d.grn_number()), Some("TR-2"));
    }

    #[test]
    fn test_table_row_from_delivery() {
        let delivery: Delivery = serde_json::from_str(
            r#"{
                "_id": "d7",
                "st_id": "ST-7",
                "transfer_number": "TR-7",
                "type": "PO",
                "from": "Vendor Yard",
                "status": "Transferred",
                "createdAt": "2024-03-15T14:02:00.000Z"
            }"#,
        )
        .unwrap();
        let row = GrnTableRow::from(&delivery);
        assert_eq!(row.id, "d7");
        assert_eq!(row.grn_number, "TR-7");
        assert_eq!(row.caption, "Vendor-wise PO");
        assert_eq!(row.type_label, "Purchase Order");
        assert_eq!(row.type_class, "type-badge type-badge--po");
        assert_eq!(row.from, "Vendor Yard");
        assert_eq!(row.to, "N/A");
        assert_eq!(row.requested_by, "N/A");
        assert_eq!(row.status_class, "status-badge status-badge--success");
        assert_eq!(row.created, "15 Mar 2024");
    }

    #[test]
    fn test_received_item_row_badges() {
        let partial = DeliveryItem {
            category: "Cement".into(),
            sub_category: "OPC".into(),
            st_quantity: 10.0,
            received_quantity: 7.5,
            ..Default::default()
        };
        let row = ReceivedItemRow::from(&partial);
        assert_eq!(row.title, "Cement");
        assert_eq!(row.category, "OPC");
        assert_eq!(row.approved, "10");
        assert_eq!(row.received, "7.5");
        assert_eq!(row.badge, "Partial");

        let complete = DeliveryItem {
            name: "Binding wire".into(),
            st_quantity: 5.0,
            received_quantity: 5.0,
            ..Default::default()
        };
        let row = ReceivedItemRow::from(&complete);
        assert_eq!(row.category, "N/A");
        assert_eq!(row.badge, "Complete");
        assert_eq!(row.badge_class, "status-badge status-badge--success");
    }

    #[test]
    fn test_replace_unknown_is_ignored() {
        let mut state = AdminGrnState::default();
        state.replace(Delivery { id: "x".into(), ..Default::default() });
        assert!(state.deliveries.is_empty());
        assert!(state.selected().is_none());
    }
}
