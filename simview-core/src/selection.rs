use crate::catalog::{catalog_contains, CatalogEntry};
use log::debug;

/// The columns the operator chose to plot, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    names: Vec<String>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends each catalog member not already selected, in caller order.
    /// Names outside the catalog are ignored.
    pub fn add<S: AsRef<str>>(&mut self, names: &[S], catalog: &[CatalogEntry]) {
        for name in names {
            let name = name.as_ref();
            if self.contains(name) {
                continue;
            }
            if !catalog_contains(catalog, name) {
                debug!("ignoring unknown column '{name}'");
                continue;
            }
            self.names.push(name.to_string());
        }
    }

    pub fn remove<S: AsRef<str>>(&mut self, names: &[S]) {
        self.names
            .retain(|selected| !names.iter().any(|name| name.as_ref() == selected));
    }

    pub fn current(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|selected| selected == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Drops every selected name the catalog no longer offers and returns them.
    pub fn reconcile(&mut self, catalog: &[CatalogEntry]) -> Vec<String> {
        let (kept, dropped): (Vec<String>, Vec<String>) = self
            .names
            .drain(..)
            .partition(|name| catalog_contains(catalog, name));
        self.names = kept;
        dropped
    }
}
