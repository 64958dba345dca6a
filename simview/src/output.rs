use simview_core::{CatalogEntry, LoadReport, Series, TimeRange};
use std::io::Write;

pub fn print_info(message: &str) {
    println!("[SimView][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[SimView][ERROR]: {message}");
}

pub fn print_load_report(file_name: &str, report: &LoadReport, range: Option<TimeRange>) {
    print_info(&format!(
        "Selected: {file_name} ({} rows, {} columns)",
        report.rows, report.columns
    ));
    if !report.dropped_selection.is_empty() {
        print_info(&format!(
            "Removed from selection: {}",
            report.dropped_selection.join(", ")
        ));
    }
    print_range(range);
}

pub fn print_range(range: Option<TimeRange>) {
    match range {
        Some(range) => print_info(&format!(
            "Simulation time range: {} sec to {} sec",
            range.start, range.end
        )),
        None => print_info("No valid simulation time data."),
    }
}

pub fn print_catalog(entries: &[CatalogEntry]) {
    if entries.is_empty() {
        print_info("No columns available");
        return;
    }
    print_info("Available columns:");
    for entry in entries {
        if entry.description.is_empty() {
            println!("{}", entry.name);
        } else {
            println!("{} - {}", entry.name, entry.description);
        }
    }
}

pub fn print_catalog_json(entries: &[CatalogEntry]) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(entries)?);
    Ok(())
}

pub fn print_description(entry: &CatalogEntry) {
    println!("{}: {}", entry.name, entry.description);
}

pub fn print_selection(names: &[String]) {
    if names.is_empty() {
        print_info("No columns selected");
    } else {
        print_info("Currently displayed columns:");
        for name in names {
            println!("{name}");
        }
    }
}

/// Rows of the shared time axis: all series of one request cover the same window.
fn aligned_rows(series: &[Series]) -> Vec<(f64, Vec<Option<f64>>)> {
    let Some(first) = series.first() else {
        return Vec::new();
    };
    first
        .points
        .iter()
        .enumerate()
        .map(|(idx, (time, _))| {
            let values = series
                .iter()
                .map(|s| s.points.get(idx).and_then(|(_, value)| *value))
                .collect();
            (*time, values)
        })
        .collect()
}

fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn print_series_table(series: &[Series]) {
    let mut header = vec!["Time".to_string()];
    header.extend(series.iter().map(|s| s.name.clone()));
    println!("{}", header.join("\t"));
    for (time, values) in aligned_rows(series) {
        let mut cells = vec![time.to_string()];
        cells.extend(values.into_iter().map(format_value));
        println!("{}", cells.join("\t"));
    }
}

pub fn write_series_csv<W: Write>(series: &[Series], out: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    let mut header = vec!["Time".to_string()];
    header.extend(series.iter().map(|s| s.name.clone()));
    writer.write_record(&header)?;
    for (time, values) in aligned_rows(series) {
        let mut record = vec![time.to_string()];
        record.extend(values.into_iter().map(format_value));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn print_series_json(series: &[Series]) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(series)?);
    Ok(())
}
