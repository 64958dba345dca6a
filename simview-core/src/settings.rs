use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_SETTINGS_FILE: &str = "simview.toml";
pub const CHART_MIN_DIMENSION: u32 = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    pub dark_theme: bool,
    pub show_legend: bool,
    pub show_grid: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            title: "Graph of Selected Columns".to_string(),
            x_label: "Simulation Time (s)".to_string(),
            y_label: "Value".to_string(),
            width: 1200,
            height: 700,
            dark_theme: false,
            show_legend: true,
            show_grid: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorSettings {
    pub chart: ChartSettings,
    /// Column name to description, shown next to catalog entries.
    pub descriptions: BTreeMap<String, String>,
}

pub fn normalize_settings(mut settings: InspectorSettings) -> InspectorSettings {
    settings.chart.width = settings.chart.width.max(CHART_MIN_DIMENSION);
    settings.chart.height = settings.chart.height.max(CHART_MIN_DIMENSION);
    settings
}

/// Reads a TOML settings file. A file that does not exist yields defaults.
pub fn load_settings_file(path: &Path) -> Result<InspectorSettings, String> {
    if !path.exists() {
        return Ok(InspectorSettings::default());
    }
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read settings file '{}': {e}", path.display()))?;
    let settings: InspectorSettings = toml::from_str(&data)
        .map_err(|e| format!("Failed to parse settings file '{}': {e}", path.display()))?;
    Ok(normalize_settings(settings))
}
