//! Case-insensitive substring matching shared by dropdowns and list filters.

/// Returns true when `haystack` contains `needle`, ignoring case.
/// An empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Narrows `options` to those containing `query` (case-insensitive),
/// preserving input order. No ranking is applied.
pub fn filter_options(options: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return options.to_vec();
    }
    let query = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_all() {
        let options = opts(&["Cement", "Steel", "Sand"]);
        assert_eq!(filter_options(&options, ""), options);
    }

    #[test]
    fn test_filter_preserves_order_and_ignores_case() {
        let options = opts(&["Steel Rod", "Cement", "STEEL plate", "Sand"]);
        assert_eq!(
            filter_options(&options, "steel"),
            opts(&["Steel Rod", "STEEL plate"])
        );
        assert_eq!(filter_options(&options, "AN"), opts(&["Sand"]));
    }

    #[test]
    fn test_substring_in_the_middle() {
        let options = opts(&["53 Grade", "43 Grade", "PPC"]);
        assert_eq!(filter_options(&options, "3 gr"), opts(&["53 Grade", "43 Grade"]));
    }

    #[test]
    fn test_no_match_yields_empty() {
        let options = opts(&["Cement", "Steel"]);
        assert!(filter_options(&options, "glass").is_empty());
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Site-A Warehouse", "warehouse"));
        assert!(contains_ci("anything", ""));
        assert!(!contains_ci("Site-A", "site-b"));
    }
}
