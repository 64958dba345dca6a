use crate::{parse_value, Row};

/// A borrowed, contiguous run of table rows.
#[derive(Debug, Clone, Copy)]
pub struct TableSlice<'a> {
    rows: &'a [Row],
}

impl<'a> TableSlice<'a> {
    pub fn new(rows: &'a [Row]) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + 'a {
        self.rows.iter().map(|row| row.time)
    }

    /// Numeric view of one column, one entry per row; gaps stay in place.
    pub fn numeric_column(&self, column: usize) -> impl Iterator<Item = (f64, Option<f64>)> + 'a {
        self.rows
            .iter()
            .map(move |row| (row.time, row.value(column).and_then(parse_value)))
    }
}
