use plotters::coord::Shift;
use plotters::prelude::*;
use simview_core::{ChartSettings, Series};
use std::path::Path;

/// Writes a line chart of `series` to `path`. A `.png` extension selects the
/// bitmap backend, anything else is written as SVG.
pub fn export_chart(series: &[Series], settings: &ChartSettings, path: &Path) -> Result<(), String> {
    let size = (settings.width, settings.height);
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false);
    if is_png {
        draw_chart(BitMapBackend::new(path, size).into_drawing_area(), series, settings)
    } else {
        draw_chart(SVGBackend::new(path, size).into_drawing_area(), series, settings)
    }
}

fn time_bounds(series: &[Series]) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for (time, _) in series.iter().flat_map(|s| s.values()) {
        bounds = Some(match bounds {
            None => (time, time),
            Some((min, max)) => (min.min(time), max.max(time)),
        });
    }
    bounds
}

fn value_bounds(series: &[Series]) -> Option<(f64, f64)> {
    series
        .iter()
        .filter_map(Series::value_bounds)
        .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
}

/// Largest magnitude kept on an axis, so the padded span stays finite.
const AXIS_LIMIT: f64 = f64::MAX / 4.0;

/// Pads the axis so flat lines and single samples stay visible. Returns
/// `None` when no finite, non-empty axis can be built.
fn padded(min: f64, max: f64) -> Option<(f64, f64)> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return None;
    }
    let min = min.clamp(-AXIS_LIMIT, AXIS_LIMIT);
    let max = max.clamp(-AXIS_LIMIT, AXIS_LIMIT);
    let span = max - min;
    let magnitude = min.abs().max(max.abs());
    // Tick placement steps in units of the span; a span lost in the
    // magnitude's precision never reaches the end of the axis.
    let pad = if span <= f64::EPSILON || span <= magnitude * 1e-9 {
        (magnitude * 0.05).max(1.0)
    } else {
        span * 0.05
    };
    let (low, high) = (min - pad, max + pad);
    (low < high && (high - low).is_finite()).then_some((low, high))
}

/// Padded time and value axes for `series`.
fn chart_axes(series: &[Series]) -> Result<((f64, f64), (f64, f64)), String> {
    let (min_time, max_time) = time_bounds(series).ok_or_else(|| "No samples to export.".to_string())?;
    let (min_y, max_y) = value_bounds(series).ok_or_else(|| "No samples to export.".to_string())?;
    let x = padded(min_time, max_time)
        .ok_or_else(|| format!("Cannot build a time axis from {min_time} to {max_time}."))?;
    let y = padded(min_y, max_y)
        .ok_or_else(|| format!("Cannot build a value axis from {min_y} to {max_y}."))?;
    Ok((x, y))
}

fn draw_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    series: &[Series],
    settings: &ChartSettings,
) -> Result<(), String> {
    let ((min_time, max_time), (min_y, max_y)) = chart_axes(series)?;

    let dark_theme = settings.dark_theme;
    let bg_color = if dark_theme {
        RGBColor(24, 24, 24)
    } else {
        RGBColor(255, 255, 255)
    };
    let text_color = if dark_theme {
        RGBColor(220, 220, 220)
    } else {
        RGBColor(40, 40, 40)
    };
    let axis_color = if dark_theme {
        RGBColor(80, 80, 80)
    } else {
        RGBColor(120, 120, 120)
    };

    root.fill(&bg_color).map_err(|e| e.to_string())?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40);
    if !settings.title.is_empty() {
        builder.caption(
            &settings.title,
            ("sans-serif", 24).into_font().color(&text_color),
        );
    }
    let mut chart = builder
        .build_cartesian_2d(min_time..max_time, min_y..max_y)
        .map_err(|e| e.to_string())?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(settings.x_label.as_str())
        .y_desc(settings.y_label.as_str())
        .axis_desc_style(("sans-serif", 16).into_font().color(&text_color))
        .label_style(("sans-serif", 14).into_font().color(&text_color))
        .axis_style(&axis_color);
    if settings.show_grid {
        mesh.light_line_style(&axis_color).bold_line_style(&axis_color);
    } else {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(|e| e.to_string())?;

    for (idx, s) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let mut labelled = false;
        for segment in s.segments() {
            let points: Vec<(f64, f64)> = segment
                .into_iter()
                .filter(|(_, value)| value.is_finite())
                .collect();
            let annotation = match points.len() {
                0 => continue,
                1 => chart.draw_series(std::iter::once(Circle::new(
                    points[0],
                    2,
                    color.filled(),
                ))),
                _ => chart.draw_series(LineSeries::new(points, color.stroke_width(1))),
            }
            .map_err(|e| e.to_string())?;
            if settings.show_legend && !labelled {
                annotation
                    .label(s.name.clone())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
                labelled = true;
            }
        }
    }

    if settings.show_legend {
        chart
            .configure_series_labels()
            .background_style(if dark_theme {
                RGBColor(18, 18, 18)
            } else {
                RGBColor(240, 240, 240)
            })
            .border_style(axis_color)
            .label_font(("sans-serif", 16).into_font().color(&text_color))
            .position(SeriesLabelPosition::UpperRight)
            .margin(12)
            .draw()
            .map_err(|e| e.to_string())?;
    }

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}
