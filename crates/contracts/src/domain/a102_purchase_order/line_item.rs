//! Material line items of an intent form.
//!
//! A row is edited field by field through cascading selectors. The owning
//! [`LineItemList`] applies the cascade reset: changing a level clears every
//! level below it. Quantity sits outside the hierarchy.

use super::aggregate::MaterialLine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineItemField {
    Category,
    SubCategory,
    SubCategory1,
    SubCategory2,
    Quantity,
}

impl LineItemField {
    pub const HIERARCHY: [LineItemField; 4] = [
        LineItemField::Category,
        LineItemField::SubCategory,
        LineItemField::SubCategory1,
        LineItemField::SubCategory2,
    ];

    /// Fields shown on a collapsed row, in display order.
    pub const SUMMARY: [LineItemField; 4] = [
        LineItemField::Category,
        LineItemField::SubCategory,
        LineItemField::SubCategory1,
        LineItemField::Quantity,
    ];

    /// Depth in the taxonomy; `None` for quantity.
    pub fn level(self) -> Option<usize> {
        match self {
            LineItemField::Category => Some(0),
            LineItemField::SubCategory => Some(1),
            LineItemField::SubCategory1 => Some(2),
            LineItemField::SubCategory2 => Some(3),
            LineItemField::Quantity => None,
        }
    }

    /// Fields cleared when this one changes.
    pub fn dependents(self) -> &'static [LineItemField] {
        match self.level() {
            Some(level) => &Self::HIERARCHY[level + 1..],
            None => &[],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LineItemField::Category => "Category",
            LineItemField::SubCategory => "Sub Category",
            LineItemField::SubCategory1 => "Sub Category 1",
            LineItemField::SubCategory2 => "Sub Category 2",
            LineItemField::Quantity => "Quantity",
        }
    }

    /// Empty, negative or non-numeric input is 0, which keeps the row incomplete.
    pub fn parse_quantity(raw: &str) -> u32 {
        raw.trim().parse::<u32>().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLineItem {
    pub category: String,
    pub sub_category: String,
    pub sub_category1: String,
    pub sub_category2: String,
    pub quantity: u32,
}

impl MaterialLineItem {
    pub fn is_complete(&self) -> bool {
        !self.category.is_empty()
            && !self.sub_category.is_empty()
            && !self.sub_category1.is_empty()
            && !self.sub_category2.is_empty()
            && self.quantity != 0
    }

    pub fn get(&self, field: LineItemField) -> String {
        match field {
            LineItemField::Category => self.category.clone(),
            LineItemField::SubCategory => self.sub_category.clone(),
            LineItemField::SubCategory1 => self.sub_category1.clone(),
            LineItemField::SubCategory2 => self.sub_category2.clone(),
            LineItemField::Quantity => {
                if self.quantity == 0 {
                    String::new()
                } else {
                    self.quantity.to_string()
                }
            }
        }
    }

    /// Sets a single field. Does not touch dependents.
    pub fn set(&mut self, field: LineItemField, value: &str) {
        match field {
            LineItemField::Category => self.category = value.to_string(),
            LineItemField::SubCategory => self.sub_category = value.to_string(),
            LineItemField::SubCategory1 => self.sub_category1 = value.to_string(),
            LineItemField::SubCategory2 => self.sub_category2 = value.to_string(),
            LineItemField::Quantity => self.quantity = LineItemField::parse_quantity(value),
        }
    }

    pub fn clear_dependents(&mut self, field: LineItemField) {
        for dependent in field.dependents() {
            self.set(*dependent, "");
        }
    }

    pub fn to_request_line(&self) -> MaterialLine {
        MaterialLine {
            category: self.category.clone(),
            sub_category: self.sub_category.clone(),
            sub_category1: self.sub_category1.clone(),
            sub_category2: self.sub_category2.clone(),
            quantity: self.quantity,
        }
    }
}

/// Which face of the editor is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemView {
    CollapsedSummary,
    ExpandedEdit,
}

impl LineItemView {
    pub fn resolve(complete: bool, editing: bool) -> Self {
        if complete && !editing {
            LineItemView::CollapsedSummary
        } else {
            LineItemView::ExpandedEdit
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemRow {
    pub id: Uuid,
    pub item: MaterialLineItem,
    pub editing: bool,
}

impl LineItemRow {
    pub fn view(&self) -> LineItemView {
        LineItemView::resolve(self.item.is_complete(), self.editing)
    }

    pub fn can_finish(&self) -> bool {
        self.item.is_complete()
    }
}

/// Rows of the intent form. Owns the cascade-reset rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItemList {
    rows: Vec<LineItemRow>,
}

impl LineItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[LineItemRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&LineItemRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut LineItemRow> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    /// Appends an empty row in edit mode.
    pub fn add(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.rows.push(LineItemRow {
            id,
            item: MaterialLineItem::default(),
            editing: true,
        });
        id
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        self.rows.len() != before
    }

    /// Applies a raw field update and clears the levels below `field`
    /// when its value actually changed.
    pub fn update(&mut self, id: Uuid, field: LineItemField, value: &str) -> bool {
        let Some(row) = self.get_mut(id) else {
            return false;
        };
        let changed = row.item.get(field) != value;
        row.item.set(field, value);
        if changed {
            row.item.clear_dependents(field);
        }
        row.editing = true;
        true
    }

    pub fn edit(&mut self, id: Uuid) {
        if let Some(row) = self.get_mut(id) {
            row.editing = true;
        }
    }

    /// Leaves edit mode; refused while the item is incomplete.
    pub fn done_editing(&mut self, id: Uuid) -> bool {
        match self.get_mut(id) {
            Some(row) if row.item.is_complete() => {
                row.editing = false;
                true
            }
            _ => false,
        }
    }

    pub fn can_finish(&self, id: Uuid) -> bool {
        self.get(id).map(LineItemRow::can_finish).unwrap_or(false)
    }

    pub fn all_complete(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|r| r.item.is_complete())
    }

    pub fn to_request_lines(&self) -> Vec<MaterialLine> {
        self.rows.iter().map(|r| r.item.to_request_line()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(list: &mut LineItemList) -> Uuid {
        let id = list.add();
        list.update(id, LineItemField::Category, "Cement");
        list.update(id, LineItemField::SubCategory, "OPC");
        list.update(id, LineItemField::SubCategory1, "53 Grade");
        list.update(id, LineItemField::SubCategory2, "50kg Bag");
        list.update(id, LineItemField::Quantity, "10");
        id
    }

    #[test]
    fn test_new_item_is_empty_and_incomplete() {
        let item = MaterialLineItem::default();
        assert!(!item.is_complete());
        assert_eq!(item.quantity, 0);
        assert_eq!(item.get(LineItemField::Quantity), "");
    }

    #[test]
    fn test_complete_example_collapses_after_done() {
        let mut list = LineItemList::new();
        let id = filled(&mut list);
        let row = list.get(id).unwrap();
        assert!(row.item.is_complete());
        assert_eq!(row.view(), LineItemView::ExpandedEdit);
        assert!(list.done_editing(id));
        assert_eq!(list.get(id).unwrap().view(), LineItemView::CollapsedSummary);
    }

    #[test]
    fn test_complete_item_not_editing_resolves_collapsed() {
        let item = MaterialLineItem {
            category: "Cement".into(),
            sub_category: "OPC".into(),
            sub_category1: "53 Grade".into(),
            sub_category2: "50kg Bag".into(),
            quantity: 10,
        };
        assert!(item.is_complete());
        assert_eq!(
            LineItemView::resolve(item.is_complete(), false),
            LineItemView::CollapsedSummary
        );
        assert_eq!(
            LineItemView::resolve(item.is_complete(), true),
            LineItemView::ExpandedEdit
        );
    }

    #[test]
    fn test_category_change_clears_all_subcategories() {
        let mut list = LineItemList::new();
        let id = filled(&mut list);
        list.update(id, LineItemField::Category, "Steel");
        let item = &list.get(id).unwrap().item;
        assert_eq!(item.category, "Steel");
        assert!(item.sub_category.is_empty());
        assert!(item.sub_category1.is_empty());
        assert!(item.sub_category2.is_empty());
        assert_eq!(item.quantity, 10);
        assert!(!item.is_complete());
    }

    #[test]
    fn test_middle_level_change_clears_only_below() {
        let mut list = LineItemList::new();
        let id = filled(&mut list);
        list.update(id, LineItemField::SubCategory1, "43 Grade");
        let item = &list.get(id).unwrap().item;
        assert_eq!(item.sub_category, "OPC");
        assert_eq!(item.sub_category1, "43 Grade");
        assert!(item.sub_category2.is_empty());
    }

    #[test]
    fn test_same_value_keeps_dependents() {
        let mut list = LineItemList::new();
        let id = filled(&mut list);
        list.update(id, LineItemField::Category, "Cement");
        assert!(list.get(id).unwrap().item.is_complete());
    }

    #[test]
    fn test_done_editing_refused_while_incomplete() {
        let mut list = LineItemList::new();
        let id = list.add();
        list.update(id, LineItemField::Category, "Cement");
        assert!(!list.can_finish(id));
        assert!(!list.done_editing(id));
        assert_eq!(list.get(id).unwrap().view(), LineItemView::ExpandedEdit);
    }

    #[test]
    fn test_edit_then_update_stays_expanded() {
        let mut list = LineItemList::new();
        let id = filled(&mut list);
        list.done_editing(id);
        list.edit(id);
        list.update(id, LineItemField::Quantity, "12");
        let row = list.get(id).unwrap();
        assert_eq!(row.view(), LineItemView::ExpandedEdit);
        assert_eq!(row.item.quantity, 12);
    }

    #[test]
    fn test_remove_in_either_state() {
        let mut list = LineItemList::new();
        let collapsed = filled(&mut list);
        list.done_editing(collapsed);
        let expanded = list.add();
        assert!(list.remove(collapsed));
        assert!(list.remove(expanded));
        assert!(list.is_empty());
        assert!(!list.remove(expanded));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(LineItemField::parse_quantity(" 7 "), 7);
        assert_eq!(LineItemField::parse_quantity(""), 0);
        assert_eq!(LineItemField::parse_quantity("-3"), 0);
        assert_eq!(LineItemField::parse_quantity("abc"), 0);
    }

    #[test]
    fn test_quantity_has_no_dependents() {
        assert!(LineItemField::Quantity.dependents().is_empty());
        assert!(LineItemField::SubCategory2.dependents().is_empty());
        assert_eq!(
            LineItemField::SubCategory.dependents(),
            &[LineItemField::SubCategory1, LineItemField::SubCategory2]
        );
    }

    #[test]
    fn test_summary_fields_skip_last_level() {
        let item = MaterialLineItem {
            category: "Cement".into(),
            sub_category: "OPC".into(),
            sub_category1: "53 Grade".into(),
            sub_category2: "50kg Bag".into(),
            quantity: 12,
        };
        let shown: Vec<(&str, String)> = LineItemField::SUMMARY
            .into_iter()
            .map(|f| (f.label(), item.get(f)))
            .collect();
        assert_eq!(
            shown,
            vec![
                ("Category", "Cement".to_string()),
                ("Sub Category", "OPC".to_string()),
                ("Sub Category 1", "53 Grade".to_string()),
                ("Quantity", "12".to_string()),
            ]
        );
    }

    #[test]
    fn test_all_complete_and_request_lines() {
        let mut list = LineItemList::new();
        assert!(!list.all_complete());
        filled(&mut list);
        assert!(list.all_complete());
        list.add();
        assert!(!list.all_complete());
        let lines = list.to_request_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].sub_category2, "50kg Bag");
        assert_eq!(lines[0].quantity, 10);
    }
}
