use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod coerce;
pub mod slice;
pub use coerce::{parse_time, parse_value};
pub use slice::TableSlice;

/// Header name of the column every row is keyed by.
pub const TIME_COLUMN: &str = "Time";

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub time: f64,
    /// Raw cells, aligned with [`Table::columns`].
    pub values: Vec<String>,
}

impl Row {
    pub fn value(&self, column: usize) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

/// A loaded result file: rows keyed by time, sorted so keys never decrease.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
    dropped_rows: usize,
}

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("failed to read {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },
    #[error("{origin}: line {line} has {found} fields but the header has {expected}")]
    RaggedRow {
        origin: String,
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("{origin} has no 'Time' column")]
    MissingTimeColumn { origin: String },
}

impl Table {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|source| TableError::Io {
            origin: origin.clone(),
            source,
        })?;
        Self::from_reader(file, &origin)
    }

    /// Parses comma-separated text. The first record after the header holds
    /// units and is always skipped. Rows whose time does not parse are dropped.
    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self, TableError> {
        let csv_error = |source: csv::Error| TableError::Csv {
            origin: origin.to_string(),
            source,
        };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = unique_headers(reader.headers().map_err(csv_error)?.iter());
        let Some(time_index) = headers.iter().position(|name| name == TIME_COLUMN) else {
            return Err(TableError::MissingTimeColumn {
                origin: origin.to_string(),
            });
        };
        let columns: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != time_index)
            .map(|(_, name)| name.clone())
            .collect();

        // Units are never decoded, so any encoding is accepted there.
        let mut units = csv::ByteRecord::new();
        reader.read_byte_record(&mut units).map_err(csv_error)?;

        let mut rows = Vec::new();
        let mut dropped_rows = 0;
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            if record.len() > headers.len() {
                return Err(TableError::RaggedRow {
                    origin: origin.to_string(),
                    line: record.position().map(|pos| pos.line()).unwrap_or(0),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            let Some(time) = record.get(time_index).and_then(parse_time) else {
                dropped_rows += 1;
                continue;
            };
            let values = (0..headers.len())
                .filter(|idx| *idx != time_index)
                .map(|idx| record.get(idx).unwrap_or("").to_string())
                .collect();
            rows.push(Row { time, values });
        }
        rows.sort_by(|a, b| a.time.total_cmp(&b.time));

        debug!(
            "loaded {origin}: {} rows, {} columns, {dropped_rows} rows without a numeric time",
            rows.len(),
            columns.len()
        );
        Ok(Self {
            columns,
            rows,
            dropped_rows,
        })
    }

    /// Non-time column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Smallest and largest time key, or `None` when no row survived loading.
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        let first = self.rows.first()?;
        let last = self.rows.last()?;
        Some((first.time, last.time))
    }

    /// Rows whose time key lies in `[start, end]`, both ends inclusive.
    pub fn slice_time(&self, start: f64, end: f64) -> TableSlice<'_> {
        let lower = self.rows.partition_point(|row| row.time < start);
        let upper = self.rows.partition_point(|row| row.time <= end).max(lower);
        TableSlice::new(&self.rows[lower..upper])
    }

    pub fn as_slice(&self) -> TableSlice<'_> {
        TableSlice::new(&self.rows)
    }
}

/// Later duplicates get `.1`, `.2`, ... appended until the name is free.
fn unique_headers<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = Vec::new();
    for name in names {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{name}.{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}
