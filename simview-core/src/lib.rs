pub mod catalog;
pub mod engine;
pub mod error;
pub mod range;
pub mod selection;
pub mod series;
pub mod settings;

pub use catalog::{
    build_catalog, build_catalog_with, CatalogEntry, DescriptionSource, NoDescriptions,
};
pub use engine::{Inspector, LoadReport};
pub use error::InspectError;
pub use range::{filter, TimeRange};
pub use selection::SelectionManager;
pub use series::{assemble, Series};
pub use settings::{ChartSettings, InspectorSettings};
pub use simtable::{Table, TableSlice, TIME_COLUMN};
