//! Seams between the tax engine and the data it is handed

use std::collections::{BTreeMap, HashMap};

use crate::types::CatalogItem;

/// Resolves a line item's catalog reference to the catalog entry
///
/// The engine never fetches catalog data itself; callers pass whatever
/// structure they already hold.
pub trait CatalogLookup {
    /// Find the catalog entry for `reference`
    fn catalog_item(&self, reference: &str) -> Option<&CatalogItem>;
}

impl CatalogLookup for HashMap<String, CatalogItem> {
    fn catalog_item(&self, reference: &str) -> Option<&CatalogItem> {
        self.get(reference)
    }
}

impl CatalogLookup for BTreeMap<String, CatalogItem> {
    fn catalog_item(&self, reference: &str) -> Option<&CatalogItem> {
        self.get(reference)
    }
}

impl CatalogLookup for [CatalogItem] {
    fn catalog_item(&self, reference: &str) -> Option<&CatalogItem> {
        self.iter().find(|item| item.id == reference)
    }
}

impl CatalogLookup for Vec<CatalogItem> {
    fn catalog_item(&self, reference: &str) -> Option<&CatalogItem> {
        self.as_slice().catalog_item(reference)
    }
}

/// Index a catalog by item id
pub fn catalog_map(items: impl IntoIterator<Item = CatalogItem>) -> HashMap<String, CatalogItem> {
    items
        .into_iter()
        .map(|item| (item.id.clone(), item))
        .collect()
}
