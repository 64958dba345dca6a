use crate::error::InspectError;
use serde::{Deserialize, Serialize};
use simtable::{Table, TableSlice};

/// An inclusive time window. Only checked when it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The table's own bounds, or `None` when it has no rows.
    pub fn of_table(table: &Table) -> Option<Self> {
        table
            .time_bounds()
            .map(|(start, end)| Self::new(start, end))
    }

    pub fn validate(&self) -> Result<(), InspectError> {
        // Written so that NaN bounds fail as well.
        if self.start < self.end {
            Ok(())
        } else {
            Err(InspectError::InvalidRange {
                start: self.start,
                end: self.end,
            })
        }
    }
}

/// Restricts `table` to rows with time keys in `[range.start, range.end]`.
pub fn filter<'a>(table: &'a Table, range: &TimeRange) -> Result<TableSlice<'a>, InspectError> {
    range.validate()?;
    Ok(table.slice_time(range.start, range.end))
}
