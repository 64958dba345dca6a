use crate::catalog::{build_catalog_with, CatalogEntry, DescriptionSource, NoDescriptions};
use crate::error::InspectError;
use crate::range::{filter, TimeRange};
use crate::selection::SelectionManager;
use crate::series::{assemble, Series};
use log::{info, warn};
use simtable::{Table, TableSlice};
use std::io::Read;
use std::path::{Path, PathBuf};

/// What a successful load produced, for display by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub rows: usize,
    pub dropped_rows: usize,
    pub columns: usize,
    pub empty: bool,
    /// Selected names the new file no longer offers.
    pub dropped_selection: Vec<String>,
}

struct LoadedTable {
    path: PathBuf,
    table: Table,
    catalog: Vec<CatalogEntry>,
}

/// Holds the loaded table, its catalog, the operator's selection and the
/// time window, and turns them into series on request.
///
/// Calls are expected one at a time. A failing call leaves every piece of
/// state as it was.
pub struct Inspector {
    loaded: Option<LoadedTable>,
    selection: SelectionManager,
    range: Option<TimeRange>,
    descriptions: Box<dyn DescriptionSource>,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self::with_descriptions(NoDescriptions)
    }

    pub fn with_descriptions(source: impl DescriptionSource + 'static) -> Self {
        Self {
            loaded: None,
            selection: SelectionManager::new(),
            range: None,
            descriptions: Box::new(source),
        }
    }

    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport, InspectError> {
        let path = path.as_ref();
        let table = Table::load_from_file(path)?;
        Ok(self.install(path.to_path_buf(), table))
    }

    pub fn load_from_reader<R: Read>(
        &mut self,
        reader: R,
        origin: &str,
    ) -> Result<LoadReport, InspectError> {
        let table = Table::from_reader(reader, origin)?;
        Ok(self.install(PathBuf::from(origin), table))
    }

    fn install(&mut self, path: PathBuf, table: Table) -> LoadReport {
        let catalog = build_catalog_with(&table, self.descriptions.as_ref());
        let dropped_selection = self.selection.reconcile(&catalog);
        if !dropped_selection.is_empty() {
            info!(
                "{} no longer offers {}; removed from selection",
                path.display(),
                dropped_selection.join(", ")
            );
        }
        if table.is_empty() {
            warn!("{} has no rows with a numeric time", path.display());
        }
        let report = LoadReport {
            rows: table.len(),
            dropped_rows: table.dropped_rows(),
            columns: catalog.len(),
            empty: table.is_empty(),
            dropped_selection,
        };
        self.range = None;
        self.loaded = Some(LoadedTable {
            path,
            table,
            catalog,
        });
        report
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn table(&self) -> Option<&Table> {
        self.loaded.as_ref().map(|loaded| &loaded.table)
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.loaded.as_ref().map(|loaded| loaded.path.as_path())
    }

    /// Last path component of the loaded source, for labels.
    pub fn file_name(&self) -> Option<String> {
        let path = self.source_path()?;
        Some(
            path.file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
        )
    }

    pub fn catalog(&self) -> &[CatalogEntry] {
        self.loaded
            .as_ref()
            .map(|loaded| loaded.catalog.as_slice())
            .unwrap_or(&[])
    }

    pub fn describe(&self, name: &str) -> Option<&CatalogEntry> {
        self.catalog().iter().find(|entry| entry.name == name)
    }

    pub fn add<S: AsRef<str>>(&mut self, names: &[S]) {
        let Some(loaded) = self.loaded.as_ref() else {
            return;
        };
        self.selection.add(names, &loaded.catalog);
    }

    pub fn remove<S: AsRef<str>>(&mut self, names: &[S]) {
        self.selection.remove(names);
    }

    pub fn current(&self) -> &[String] {
        self.selection.current()
    }

    /// Stores an explicit window. It is checked when a plot is requested.
    pub fn set_range(&mut self, start: f64, end: f64) {
        self.range = Some(TimeRange::new(start, end));
    }

    pub fn clear_range(&mut self) {
        self.range = None;
    }

    pub fn explicit_range(&self) -> Option<TimeRange> {
        self.range
    }

    /// Minimum and maximum time key of the loaded table.
    pub fn default_range(&self) -> Option<TimeRange> {
        self.table().and_then(TimeRange::of_table)
    }

    pub fn effective_range(&self) -> Option<TimeRange> {
        self.range.or_else(|| self.default_range())
    }

    pub fn filter(&self, range: &TimeRange) -> Result<TableSlice<'_>, InspectError> {
        let table = self.table().ok_or(InspectError::NotLoaded)?;
        filter(table, range)
    }

    /// Series for the current selection over the effective range.
    pub fn assemble(&self) -> Result<Vec<Series>, InspectError> {
        if self.selection.is_empty() {
            return Err(InspectError::EmptySelection);
        }
        let table = self.table().ok_or(InspectError::NotLoaded)?;
        // An empty table has no default window and nothing to plot.
        let range = self.effective_range().ok_or(InspectError::NoNumericData)?;
        assemble(table, self.selection.current(), &range)
    }
}
