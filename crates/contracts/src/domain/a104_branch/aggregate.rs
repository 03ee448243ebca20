use serde::{Deserialize, Serialize};

/// A company branch; its name doubles as a site / delivery location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Sorted, de-duplicated site names for filter and delivery-site selectors.
pub fn site_names(branches: &[Branch]) -> Vec<String> {
    let mut names: Vec<String> = branches
        .iter()
        .map(|b| b.name.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_names_sorted_and_unique() {
        let branches: Vec<Branch> = serde_json::from_str(
            r#"[{"_id":"1","name":"Site B"},{"_id":"2","name":"Main Store"},{"_id":"3","name":"Site B"},{"_id":"4","name":" "}]"#,
        )
        .unwrap();
        assert_eq!(site_names(&branches), vec!["Main Store", "Site B"]);
    }
}
