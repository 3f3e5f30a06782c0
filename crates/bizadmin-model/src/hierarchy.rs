//! Read-only lookups over a flat structure list
//!
//! Items are indexed as delivered. Parent references are followed but never
//! checked: a dangling parent ends the chain, and a looping chain stops at
//! the first repeated item.

use std::collections::{HashMap, HashSet};

use crate::structure::FlatStructureItem;

#[derive(Debug, Clone)]
pub struct StructureIndex {
    /// Items in input order
    items: Vec<FlatStructureItem>,
    /// id -> position in `items`; the first item wins on repeated ids
    by_id: HashMap<String, usize>,
    /// parent id -> child positions, in input order
    children: HashMap<String, Vec<usize>>,
}

impl StructureIndex {
    pub fn new(items: Vec<FlatStructureItem>) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        let mut children: HashMap<String, Vec<usize>> = HashMap::new();

        for (i, item) in items.iter().enumerate() {
            by_id.entry(item.id.clone()).or_insert(i);
            if let Some(parent_id) = &item.parent_id {
                children.entry(parent_id.clone()).or_default().push(i);
            }
        }

        tracing::debug!(items = items.len(), "Indexed structure items");

        Self {
            items,
            by_id,
            children,
        }
    }

    fn parent_index(&self, i: usize) -> Option<usize> {
        self.items[i]
            .parent_id
            .as_deref()
            .and_then(|p| self.by_id.get(p).copied())
    }

    pub fn get(&self, id: &str) -> Option<&FlatStructureItem> {
        self.by_id.get(id).map(|&i| &self.items[i])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlatStructureItem> {
        self.items.iter()
    }

    /// Root items of one license
    pub fn roots<'a>(&'a self, license_id: &'a str) -> impl Iterator<Item = &'a FlatStructureItem> {
        self.items
            .iter()
            .filter(move |item| item.is_root() && item.license_id == license_id)
    }

    pub fn children(&self, id: &str) -> Vec<&FlatStructureItem> {
        self.children
            .get(id)
            .map(|kids| kids.iter().map(|&i| &self.items[i]).collect())
            .unwrap_or_default()
    }

    /// Parent chain of `id`, nearest first. Empty for roots and unknown ids.
    pub fn ancestors(&self, id: &str) -> Vec<&FlatStructureItem> {
        let mut chain = Vec::new();
        let Some(&start) = self.by_id.get(id) else {
            return chain;
        };

        let mut seen = HashSet::from([start]);
        let mut current = self.parent_index(start);
        while let Some(i) = current {
            if !seen.insert(i) {
                break;
            }
            chain.push(&self.items[i]);
            current = self.parent_index(i);
        }
        chain
    }

    /// Number of ancestors; roots are at depth 0.
    pub fn depth(&self, id: &str) -> Option<usize> {
        self.get(id).map(|_| self.ancestors(id).len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::StructureType;

    fn item(id: &str, kind: StructureType, parent: Option<&str>, license: &str) -> FlatStructureItem {
        FlatStructureItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            kind,
            parent_id: parent.map(str::to_string),
            license_id: license.to_string(),
        }
    }

    fn acme() -> Vec<FlatStructureItem> {
        vec![
            item("acme", StructureType::Company, None, "lic-1"),
            item("north", StructureType::Branch, Some("acme"), "lic-1"),
            item("finance", StructureType::Department, Some("north"), "lic-1"),
            item("payroll", StructureType::Section, Some("finance"), "lic-1"),
            item("south", StructureType::Branch, Some("acme"), "lic-1"),
            item("globex", StructureType::Company, None, "lic-2"),
        ]
    }

    #[test]
    fn test_queries() {
        let index = StructureIndex::new(acme());
        assert_eq!(index.len(), 6);

        let roots: Vec<_> = index.roots("lic-1").map(|i| i.id.as_str()).collect();
        assert_eq!(roots, vec!["acme"]);

        let kids: Vec<_> = index.children("acme").iter().map(|i| i.id.as_str()).collect();
        assert_eq!(kids, vec!["north", "south"]);
        assert!(index.children("payroll").is_empty());

        let chain: Vec<_> = index.ancestors("payroll").iter().map(|i| i.id.as_str()).collect();
        assert_eq!(chain, vec!["finance", "north", "acme"]);

        assert_eq!(index.depth("acme"), Some(0));
        assert_eq!(index.depth("payroll"), Some(3));
        assert_eq!(index.depth("missing"), None);
    }

    #[test]
    fn test_dangling_parent_is_indexed_as_delivered() {
        let index = StructureIndex::new(vec![item(
            "finance",
            StructureType::Department,
            Some("ghost"),
            "lic-1",
        )]);

        assert_eq!(index.get("finance").unwrap().parent_id.as_deref(), Some("ghost"));
        assert!(index.ancestors("finance").is_empty());
        assert_eq!(index.children("ghost").len(), 1);
        assert_eq!(index.roots("lic-1").count(), 0);
    }

    #[test]
    fn test_parent_from_other_license_is_followed() {
        let mut items = acme();
        items.push(item("rogue", StructureType::Unit, Some("globex"), "lic-1"));
        let index = StructureIndex::new(items);

        let chain: Vec<_> = index.ancestors("rogue").iter().map(|i| i.id.as_str()).collect();
        assert_eq!(chain, vec!["globex"]);
    }

    #[test]
    fn test_looping_chain_terminates() {
        let index = StructureIndex::new(vec![
            item("a", StructureType::Branch, Some("c"), "lic-1"),
            item("b", StructureType::Department, Some("a"), "lic-1"),
            item("c", StructureType::Section, Some("b"), "lic-1"),
        ]);

        let chain: Vec<_> = index.ancestors("a").iter().map(|i| i.id.as_str()).collect();
        assert_eq!(chain, vec!["c", "b"]);
        assert_eq!(index.depth("a"), Some(2));
    }

    #[test]
    fn test_repeated_id_keeps_first() {
        let mut items = acme();
        items.push(item("north", StructureType::Unit, None, "lic-9"));
        let index = StructureIndex::new(items);

        assert_eq!(index.get("north").unwrap().kind, StructureType::Branch);
        assert_eq!(index.len(), 7);
    }
}
