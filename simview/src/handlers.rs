use crate::commands::*;
use crate::output::*;
use crate::render::export_chart;
use crate::shell::run_shell;
use log::debug;
use simview_core::settings::load_settings_file;
use simview_core::{Inspector, InspectorSettings, Series};
use std::error::Error;
use std::path::Path;

pub fn handle_command(cli: Cli) -> Result<(), Box<dyn Error>> {
    debug!("reading settings from {}", cli.settings.display());
    let settings = load_settings_file(&cli.settings)?;
    match cli.command {
        Commands::Columns { file, json_query } => {
            let inspector = open(&settings, &file)?;
            if json_query {
                print_catalog_json(inspector.catalog())?;
            } else {
                print_catalog(inspector.catalog());
            }
        }
        Commands::Range { file } => {
            let inspector = open(&settings, &file)?;
            print_range(inspector.default_range());
        }
        Commands::Series {
            file,
            request,
            format,
        } => {
            let series = assemble_request(&settings, &file, &request)?;
            match format {
                OutputFormat::Table => print_series_table(&series),
                OutputFormat::Csv => write_series_csv(&series, std::io::stdout())?,
                OutputFormat::Json => print_series_json(&series)?,
            }
        }
        Commands::Plot {
            file,
            request,
            output,
        } => {
            let series = assemble_request(&settings, &file, &request)?;
            export_chart(&series, &settings.chart, &output)?;
            print_info(&format!("Chart written to {}", output.display()));
        }
        Commands::Describe { file, column } => {
            let inspector = open(&settings, &file)?;
            let entry = inspector
                .describe(&column)
                .ok_or_else(|| format!("Unknown column: {column}"))?;
            print_description(entry);
        }
        Commands::Shell { file } => {
            let mut inspector = Inspector::with_descriptions(settings.descriptions.clone());
            run_shell(&mut inspector, &settings, file.as_deref())?;
        }
    }
    Ok(())
}

fn open(settings: &InspectorSettings, file: &Path) -> Result<Inspector, Box<dyn Error>> {
    let mut inspector = Inspector::with_descriptions(settings.descriptions.clone());
    inspector.load(file)?;
    Ok(inspector)
}

/// A bound left out on the command line falls back to the file's own bound.
fn assemble_request(
    settings: &InspectorSettings,
    file: &Path,
    request: &SeriesRequest,
) -> Result<Vec<Series>, Box<dyn Error>> {
    let mut inspector = open(settings, file)?;
    inspector.add(request.columns.as_slice());
    if request.start.is_some() || request.end.is_some() {
        let defaults = inspector.default_range();
        let start = request
            .start
            .or(defaults.map(|range| range.start))
            .unwrap_or(f64::NEG_INFINITY);
        let end = request
            .end
            .or(defaults.map(|range| range.end))
            .unwrap_or(f64::INFINITY);
        inspector.set_range(start, end);
    }
    Ok(inspector.assemble()?)
}
