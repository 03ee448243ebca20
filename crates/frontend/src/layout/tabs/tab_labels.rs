//! Titles of tabs and menu entries.

pub const A102_PURCHASE_ORDER: &str = "a102_purchase_order";
pub const A102_PURCHASE_ORDER_NEW: &str = "a102_purchase_order_new";
pub const A102_PURCHASE_ORDER_DETAIL: &str = "a102_purchase_order_detail_";
pub const A103_UPCOMING_DELIVERY: &str = "a103_upcoming_delivery";
pub const A103_DELIVERY_DETAIL: &str = "a103_delivery_detail_";
pub const A103_GRN: &str = "a103_grn";
pub const A103_GRN_DETAIL: &str = "a103_grn_detail_";
pub const A103_ADMIN_GRN: &str = "a103_admin_grn";
pub const A101_MATERIAL_CATALOG: &str = "a101_material_catalog";

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        A102_PURCHASE_ORDER => "Intent",
        A102_PURCHASE_ORDER_NEW => "New Intent (PO)",
        A103_UPCOMING_DELIVERY => "Upcoming Deliveries",
        A103_GRN => "GRN",
        A103_ADMIN_GRN => "Admin GRN",
        A101_MATERIAL_CATALOG => "Indent Upload",
        _ => "",
    }
}

/// "<entity> · <identifier>", e.g. `detail_tab_label("GRN", "GRN-0004")`.
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_keys_have_titles() {
        for key in [
            A102_PURCHASE_ORDER,
            A103_UPCOMING_DELIVERY,
            A103_GRN,
            A103_ADMIN_GRN,
            A101_MATERIAL_CATALOG,
        ] {
            assert!(!tab_label_for_key(key).is_empty(), "{}", key);
        }
        assert_eq!(tab_label_for_key("a103_grn_detail_42"), "");
    }

    #[test]
    fn test_detail_label() {
        assert_eq!(detail_tab_label("GRN", "TR-7"), "GRN · TR-7");
    }
}
