use crate::error::InspectError;
use crate::range::{filter, TimeRange};
use log::debug;
use serde::Serialize;
use simtable::Table;

/// One selected column restricted to a time window. Every row of the window
/// contributes a point; `None` marks a value that is not a number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, Option<f64>)>,
}

impl Series {
    /// Points that carry a real value.
    pub fn values(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .filter_map(|(time, value)| value.map(|value| (*time, value)))
    }

    pub fn has_values(&self) -> bool {
        self.points.iter().any(|(_, value)| value.is_some())
    }

    /// Gap-free runs of points, in time order. A line drawn per run breaks at gaps.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (time, value) in &self.points {
            match value {
                Some(value) => current.push((*time, *value)),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Min and max over finite values.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.values()
            .map(|(_, value)| value)
            .filter(|value| value.is_finite())
            .fold(None, |bounds, value| match bounds {
                None => Some((value, value)),
                Some((min, max)) => Some((f64::min(min, value), f64::max(max, value))),
            })
    }
}

/// Builds one series per selected column, in selection order, over `range`.
///
/// Fails when nothing is selected, when the range is not `start < end`, or when
/// no selected column holds a single number inside the range.
pub fn assemble<S: AsRef<str>>(
    table: &Table,
    selection: &[S],
    range: &TimeRange,
) -> Result<Vec<Series>, InspectError> {
    if selection.is_empty() {
        return Err(InspectError::EmptySelection);
    }
    let window = filter(table, range)?;

    let mut series = Vec::with_capacity(selection.len());
    for name in selection {
        let name = name.as_ref();
        let Some(column) = table.column_index(name) else {
            debug!("column '{name}' is not in the loaded table, skipping");
            continue;
        };
        series.push(Series {
            name: name.to_string(),
            points: window.numeric_column(column).collect(),
        });
    }

    if !series.iter().any(Series::has_values) {
        return Err(InspectError::NoNumericData);
    }
    Ok(series)
}
