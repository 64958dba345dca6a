use clap::{Parser, Subcommand, ValueEnum};
use simview_core::settings::DEFAULT_SETTINGS_FILE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simview", version, about = "Inspect time-series simulation results")]
pub struct Cli {
    /// Chart and column description settings (TOML)
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the plottable columns of a result file
    Columns {
        file: PathBuf,
        #[arg(long, alias = "jq")]
        json_query: bool,
    },
    /// Show the time range covered by a result file
    Range { file: PathBuf },
    /// Print selected columns over a time window
    Series {
        file: PathBuf,
        #[command(flatten)]
        request: SeriesRequest,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Render selected columns to an SVG or PNG chart
    Plot {
        file: PathBuf,
        #[command(flatten)]
        request: SeriesRequest,
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Show the description of one column
    Describe { file: PathBuf, column: String },
    /// Interactive session over one engine
    Shell { file: Option<PathBuf> },
}

#[derive(clap::Args)]
pub struct SeriesRequest {
    #[arg(long = "column", short = 'c', required = true)]
    pub columns: Vec<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}
