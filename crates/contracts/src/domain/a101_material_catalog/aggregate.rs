use crate::shared::search::contains_ci;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One row of the uploaded indent spreadsheet, as stored by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCatalogItem {
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Spreadsheet serial number; arrives as a number or a string
    #[serde(default, deserialize_with = "string_or_number")]
    pub sr_no: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub sub_category1: String,
    #[serde(default)]
    pub sub_category2: String,
    #[serde(default)]
    pub sheet_name: String,
    #[serde(default)]
    pub row_index: Option<u32>,
}

/// Columns shown in the catalog table, in display order.
pub const CATALOG_COLUMNS: [(&str, &str); 5] = [
    ("srNo", "SR NO."),
    ("category", "Category"),
    ("subCategory", "Sub Category"),
    ("subCategory1", "Sub Category 1"),
    ("sheetName", "Sheet Name"),
];

impl MaterialCatalogItem {
    pub fn column_value(&self, column: &str) -> String {
        match column {
            "srNo" => self.sr_no.clone().unwrap_or_default(),
            "category" => self.category.clone(),
            "subCategory" => self.sub_category.clone(),
            "subCategory1" => self.sub_category1.clone(),
            "sheetName" => self.sheet_name.clone(),
            _ => String::new(),
        }
    }

    /// Key used to order table rows: serial number, then row index, then 0.
    pub fn sort_key(&self) -> String {
        self.sr_no
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| self.row_index.map(|i| i.to_string()))
            .unwrap_or_else(|| "0".to_string())
    }

    pub fn matches_filter(&self, filter: &str) -> bool {
        CATALOG_COLUMNS
            .iter()
            .any(|(column, _)| contains_ci(&self.column_value(column), filter))
    }
}

/// Rows for the catalog table: filtered by `search` over the displayed
/// columns and ordered by [`MaterialCatalogItem::sort_key`] as text.
pub fn catalog_table_rows(items: &[MaterialCatalogItem], search: &str) -> Vec<MaterialCatalogItem> {
    let mut rows: Vec<MaterialCatalogItem> = items
        .iter()
        .filter(|item| item.matches_filter(search))
        .cloned()
        .collect();
    rows.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    rows
}

/// Server reply to a spreadsheet upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub deleted_count: usize,
}

impl UploadResult {
    pub fn summary(&self) -> String {
        format!(
            "Excel uploaded successfully! {} records added, {} old records deleted.",
            self.count, self.deleted_count
        )
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(sr_no: Option<&str>, category: &str, sheet: &str) -> MaterialCatalogItem {
        MaterialCatalogItem {
            sr_no: sr_no.map(String::from),
            category: category.to_string(),
            sheet_name: sheet.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_numeric_sr_no() {
        let raw = r#"{"_id":"m1","srNo":12,"category":"Cement","subCategory":"OPC","subCategory1":"53 Grade","sheetName":"Civil","rowIndex":4}"#;
        let parsed: MaterialCatalogItem = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.sr_no.as_deref(), Some("12"));
        assert_eq!(parsed.sub_category1, "53 Grade");
        assert_eq!(parsed.row_index, Some(4));
        assert!(parsed.sub_category2.is_empty());
    }

    #[test]
    fn test_rows_filtered_over_display_columns() {
        let items = vec![
            item(Some("1"), "Cement", "Civil"),
            item(Some("2"), "Cable", "Electrical"),
            item(Some("3"), "Steel", "Civil"),
        ];
        let rows = catalog_table_rows(&items, "civil");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Cement");
        assert_eq!(rows[1].category, "Steel");
    }

    #[test]
    fn test_rows_sorted_as_text() {
        let items = vec![
            item(Some("2"), "B", ""),
            item(Some("10"), "C", ""),
            item(None, "A", ""),
        ];
        let order: Vec<String> = catalog_table_rows(&items, "")
            .into_iter()
            .map(|i| i.category)
            .collect();
        // "0" < "10" < "2" when compared as strings
        assert_eq!(order, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_upload_summary() {
        let result: UploadResult = serde_json::from_str(r#"{"count":40,"deletedCount":38}"#).unwrap();
        assert_eq!(
            result.summary(),
            "Excel uploaded successfully! 40 records added, 38 old records deleted."
        );
    }
}
