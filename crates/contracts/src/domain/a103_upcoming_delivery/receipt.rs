use super::aggregate::{Delivery, DeliveryItem};
use serde::{Deserialize, Serialize};

/// A line on the receive screen: checking it marks the full ordered
/// quantity as received, unchecking resets it to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub item_id: String,
    pub name: String,
    pub ordered_qty: f64,
    pub received_qty: f64,
}

impl ReceiptLine {
    pub fn from_item(item: &DeliveryItem) -> Self {
        let name = match item.subtitle() {
            Some(sub) => format!("{} ({})", item.title(), sub),
            None => item.title(),
        };
        Self {
            item_id: item.id.clone(),
            name,
            ordered_qty: item.st_quantity,
            received_qty: item.received_quantity,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.received_qty >= self.ordered_qty
    }

    pub fn toggle(&mut self, checked: bool) {
        self.received_qty = if checked { self.ordered_qty } else { 0.0 };
    }
}

pub fn receipt_lines(delivery: &Delivery) -> Vec<ReceiptLine> {
    delivery.items.iter().map(ReceiptLine::from_item).collect()
}

/// Sets the received state of the line with `item_id`, leaving others untouched.
pub fn toggle_line(lines: &mut [ReceiptLine], item_id: &str, checked: bool) {
    if let Some(line) = lines.iter_mut().find(|l| l.item_id == item_id) {
        line.toggle(checked);
    }
}

/// Body of the receive request; proof images travel separately as multipart parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiveDeliveryRequest {
    pub items: Vec<ReceiptLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, ordered: f64, received: f64) -> ReceiptLine {
        ReceiptLine {
            item_id: id.into(),
            name: id.into(),
            ordered_qty: ordered,
            received_qty: received,
        }
    }

    #[test]
    fn test_toggle_sets_full_or_zero() {
        let mut lines = vec![line("a", 10.0, 3.0), line("b", 4.0, 4.0)];
        assert!(!lines[0].is_checked());
        assert!(lines[1].is_checked());

        toggle_line(&mut lines, "a", true);
        assert_eq!(lines[0].received_qty, 10.0);
        assert!(lines[0].is_checked());

        toggle_line(&mut lines, "b", false);
        assert_eq!(lines[1].received_qty, 0.0);
        assert_eq!(lines[0].received_qty, 10.0);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut lines = vec![line("a", 1.0, 0.0)];
        toggle_line(&mut lines, "zzz", true);
        assert_eq!(lines[0].received_qty, 0.0);
    }

    #[test]
    fn test_from_item_names() {
        let item = DeliveryItem {
            id: "i1".into(),
            category: "Cement".into(),
            sub_category: "OPC".into(),
            st_quantity: 10.0,
            ..Default::default()
        };
        let line = ReceiptLine::from_item(&item);
        assert_eq!(line.name, "Cement (OPC)");
        assert_eq!(line.ordered_qty, 10.0);
        assert_eq!(line.received_qty, 0.0);
    }
}
