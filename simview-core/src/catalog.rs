use serde::{Deserialize, Serialize};
use simtable::Table;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
}

/// Supplies human-readable descriptions for columns.
pub trait DescriptionSource {
    fn describe(&self, column: &str) -> Option<String>;
}

pub struct NoDescriptions;

impl DescriptionSource for NoDescriptions {
    fn describe(&self, _column: &str) -> Option<String> {
        None
    }
}

impl DescriptionSource for BTreeMap<String, String> {
    fn describe(&self, column: &str) -> Option<String> {
        self.get(column).cloned()
    }
}

/// One entry per plottable column in header order, descriptions left empty.
pub fn build_catalog(table: &Table) -> Vec<CatalogEntry> {
    build_catalog_with(table, &NoDescriptions)
}

pub fn build_catalog_with(table: &Table, source: &dyn DescriptionSource) -> Vec<CatalogEntry> {
    // The loader already keys rows by time, so `columns()` never holds it.
    table
        .columns()
        .iter()
        .map(|name| CatalogEntry {
            name: name.clone(),
            description: source.describe(name).unwrap_or_default(),
        })
        .collect()
}

pub fn catalog_contains(catalog: &[CatalogEntry], name: &str) -> bool {
    catalog.iter().any(|entry| entry.name == name)
}
