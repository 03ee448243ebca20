//! Four-level material taxonomy: Category → SubCategory → SubCategory1 → SubCategory2.
//!
//! Children are always looked up by the exact name of the chosen ancestor,
//! never by position. Missing keys resolve to an empty list.

use super::aggregate::MaterialCatalogItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<TaxonomyNode>,
}

impl TaxonomyNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    fn child(&self, name: &str) -> Option<&TaxonomyNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns the child with `name`, appending it when absent.
    fn child_mut_or_insert(&mut self, name: &str) -> &mut TaxonomyNode {
        let pos = match self.children.iter().position(|c| c.name == name) {
            Some(pos) => pos,
            None => {
                self.children.push(TaxonomyNode::new(name));
                self.children.len() - 1
            }
        };
        &mut self.children[pos]
    }

    fn child_names(&self) -> Vec<String> {
        self.children.iter().map(|c| c.name.clone()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    roots: Vec<TaxonomyNode>,
}

impl Taxonomy {
    /// Builds the tree from catalog rows in first-seen order. Blank names end a path.
    pub fn from_catalog(items: &[MaterialCatalogItem]) -> Self {
        let mut taxonomy = Taxonomy::default();
        for item in items {
            taxonomy.insert_path(&[
                &item.category,
                &item.sub_category,
                &item.sub_category1,
                &item.sub_category2,
            ]);
        }
        taxonomy
    }

    fn insert_path(&mut self, path: &[&str]) {
        let names: Vec<&str> = path
            .iter()
            .map(|s| s.trim())
            .take_while(|s| !s.is_empty())
            .collect();
        let Some((first, rest)) = names.split_first() else {
            return;
        };

        let pos = match self.roots.iter().position(|n| n.name == *first) {
            Some(pos) => pos,
            None => {
                self.roots.push(TaxonomyNode::new(*first));
                self.roots.len() - 1
            }
        };
        let mut node = &mut self.roots[pos];
        for name in rest {
            node = node.child_mut_or_insert(name);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    fn root(&self, category: &str) -> Option<&TaxonomyNode> {
        self.roots.iter().find(|n| n.name == category)
    }

    pub fn categories(&self) -> Vec<String> {
        self.roots.iter().map(|n| n.name.clone()).collect()
    }

    pub fn subcategories(&self, category: &str) -> Vec<String> {
        self.root(category)
            .map(TaxonomyNode::child_names)
            .unwrap_or_default()
    }

    pub fn sub_subcategories(&self, category: &str, sub_category: &str) -> Vec<String> {
        self.root(category)
            .and_then(|n| n.child(sub_category))
            .map(TaxonomyNode::child_names)
            .unwrap_or_default()
    }

    pub fn sub_sub_subcategories(
        &self,
        category: &str,
        sub_category: &str,
        sub_category1: &str,
    ) -> Vec<String> {
        self.root(category)
            .and_then(|n| n.child(sub_category))
            .and_then(|n| n.child(sub_category1))
            .map(TaxonomyNode::child_names)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(c: &str, s: &str, s1: &str, s2: &str) -> MaterialCatalogItem {
        MaterialCatalogItem {
            category: c.into(),
            sub_category: s.into(),
            sub_category1: s1.into(),
            sub_category2: s2.into(),
            ..Default::default()
        }
    }

    fn sample() -> Taxonomy {
        Taxonomy::from_catalog(&[
            row("Cement", "OPC", "53 Grade", "50kg Bag"),
            row("Cement", "OPC", "43 Grade", "50kg Bag"),
            row("Cement", "PPC", "Standard", "25kg Bag"),
            row("Steel", "TMT", "Fe500", "12mm"),
            row("Cement", "OPC", "53 Grade", "Bulk"),
            row("Cement", "OPC", "53 Grade", "50kg Bag"),
        ])
    }

    #[test]
    fn test_levels_in_first_seen_order() {
        let t = sample();
        assert_eq!(t.categories(), vec!["Cement", "Steel"]);
        assert_eq!(t.subcategories("Cement"), vec!["OPC", "PPC"]);
        assert_eq!(t.sub_subcategories("Cement", "OPC"), vec!["53 Grade", "43 Grade"]);
        assert_eq!(
            t.sub_sub_subcategories("Cement", "OPC", "53 Grade"),
            vec!["50kg Bag", "Bulk"]
        );
    }

    #[test]
    fn test_lookup_requires_exact_ancestor() {
        let t = sample();
        assert!(t.subcategories("cement").is_empty());
        assert!(t.sub_subcategories("Steel", "OPC").is_empty());
        assert!(t.sub_sub_subcategories("Cement", "PPC", "53 Grade").is_empty());
        assert!(t.subcategories("").is_empty());
    }

    #[test]
    fn test_blank_levels_end_the_path() {
        let t = Taxonomy::from_catalog(&[row("Paint", "", "Ignored", "Ignored"), row("", "X", "", "")]);
        assert_eq!(t.categories(), vec!["Paint"]);
        assert!(t.subcategories("Paint").is_empty());
    }

    #[test]
    fn test_empty_catalog_builds_empty_tree() {
        let t = Taxonomy::from_catalog(&[]);
        assert_eq!(t, Taxonomy::default());
        assert!(t.categories().is_empty());
        assert!(t.sub_sub_subcategories("Cement", "OPC", "53 Grade").is_empty());
    }
}
