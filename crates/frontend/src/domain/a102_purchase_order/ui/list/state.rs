use contracts::domain::a102_purchase_order::PurchaseOrder;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 10;

#[derive(Clone, Debug)]
pub struct PurchaseOrderListState {
    pub items: Vec<PurchaseOrder>,
    /// 1-indexed
    pub page: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for PurchaseOrderListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

impl PurchaseOrderListState {
    /// Stores a fetched page unless the user has moved to another one since.
    /// Returns false when the result was dropped.
    pub fn apply_page(&mut self, page: usize, items: Vec<PurchaseOrder>, total_pages: usize) -> bool {
        if page != self.page {
            return false;
        }
        self.items = items;
        self.total_pages = total_pages;
        self.is_loaded = true;
        true
    }
}

pub fn create_state() -> RwSignal<PurchaseOrderListState> {
    RwSignal::new(PurchaseOrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str) -> PurchaseOrder {
        PurchaseOrder {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_page_drops_stale_result() {
        let mut state = PurchaseOrderListState {
            page: 3,
            ..Default::default()
        };
        assert!(!state.apply_page(2, vec![order("a")], 5));
        assert!(state.items.is_empty());
        assert_eq!(state.total_pages, 1);
        assert!(!state.is_loaded);
    }

    #[test]
    fn test_apply_page_stores_current_page() {
        let mut state = PurchaseOrderListState::default();
        assert!(state.apply_page(1, vec![order("a"), order("b")], 4));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total_pages, 4);
        assert!(state.is_loaded);
    }
}
