use simtable::TableError;

/// Every failure an inspection call can report. None of them leaves the
/// engine in a different state than before the call.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InspectError {
    #[error("{0}")]
    SourceRead(String),
    #[error("{0}")]
    Schema(String),
    #[error("Start time must be less than end time. (start {start}, end {end})")]
    InvalidRange { start: f64, end: f64 },
    #[error("Please select columns to display.")]
    EmptySelection,
    #[error("No numeric data to plot.")]
    NoNumericData,
    #[error("No file loaded.")]
    NotLoaded,
}

impl From<TableError> for InspectError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::MissingTimeColumn { .. } => InspectError::Schema(err.to_string()),
            TableError::Io { .. } | TableError::Csv { .. } | TableError::RaggedRow { .. } => {
                InspectError::SourceRead(err.to_string())
            }
        }
    }
}
