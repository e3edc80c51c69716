//! Plotting infrastructure for the match charts
//!
//! This module provides chart primitives built on the [`plotters`] crate:
//! categorical bar charts (plain or dodged), line charts, pie charts and annotated
//! heatmaps. Charts are saved as PNG files.
//!
//! Empty inputs still produce a chart (title and axes, no marks) so that a match
//! without, say, any wickets yields an empty pie rather than an error.

use super::palette::yl_or_rd;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::PI;
use std::path::Path;
use thiserror::Error;

/// Resolution of rectangular charts.
pub const CHART_SIZE: (u32, u32) = (1200, 800);

/// Resolution of pie charts.
pub const PIE_SIZE: (u32, u32) = (800, 800);

/// Width of the heatmap color bar, in pixels.
const COLOR_BAR_WIDTH: u32 = 150;

/// Fraction of a category slot taken by its bars.
const BAR_SLOT_FILL: f64 = 0.8;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Title and axis descriptions shared by the rectangular charts.
#[derive(Debug, Clone, Copy)]
pub struct ChartLabels<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
}

/// One colored set of bars.
///
/// `bars` holds `(category index, height)` pairs. Series with a `name` appear in
/// the legend.
#[derive(Debug, Clone)]
pub struct BarSeries {
    pub name: Option<String>,
    pub color: RGBColor,
    pub bars: Vec<(usize, f64)>,
}

/// One named line.
#[derive(Debug, Clone)]
pub struct LineData {
    pub name: String,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

/// A labelled matrix of optional values; `cells[row][column]`.
#[derive(Debug, Clone, Default)]
pub struct HeatmapData {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
}

/// Upper bound for a value axis: a bit of headroom above the data, never empty.
pub fn value_axis_max(max_value: f64) -> f64 {
    if max_value.is_finite() && max_value > 0.0 {
        max_value * 1.1
    } else {
        1.0
    }
}

/// Formats a percentage share the way pie labels show it (`"33.3%"`).
pub fn percentage_label(value: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", value / total * 100.0)
}

/// Formats a heatmap cell: whole numbers without decimals, others compactly.
pub fn format_cell_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", (value * 100.0).round() / 100.0)
    }
}

/// Maps a tick position back onto a category label, if it lands on one.
fn category_at(labels: &[String], position: f64) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

/// Chart-space corners of heatmap cell (`row`, `column`), first row at the top.
fn cell_bounds(rows: usize, row: usize, column: usize) -> [(f64, f64); 2] {
    let x = column as f64;
    let y = (rows - 1 - row) as f64;
    [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)]
}

/// Creates a categorical bar chart and saves it as a PNG file
///
/// # Arguments
/// * `categories` - Labels of the x-axis slots, in display order
/// * `series` - Bars to draw; indices in each series refer to `categories`
/// * `dodge` - If true, series are placed side by side within each slot;
///   otherwise every bar takes the full slot width
/// * `labels` - Title and axis descriptions
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If a bar refers to a missing category or drawing failed
pub fn create_bar_plot(
    categories: &[String],
    series: &[BarSeries],
    dodge: bool,
    labels: &ChartLabels,
    output_path: &Path,
) -> Result<()> {
    for s in series {
        if let Some((index, _)) = s.bars.iter().find(|(i, _)| *i >= categories.len()) {
            return Err(PlotError::InvalidData(format!(
                "Bar category {} is outside the {} available categories",
                index,
                categories.len()
            )));
        }
    }

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let max_height = series
        .iter()
        .flat_map(|s| s.bars.iter().map(|(_, v)| *v))
        .fold(0.0, f64::max);
    let slots = categories.len().max(1);
    let x_range = -0.5..(slots as f64 - 0.5);

    let mut chart = ChartBuilder::on(&root)
        .caption(labels.title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_range, 0.0..value_axis_max(max_height))
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&|x| category_at(categories, *x))
        .x_desc(labels.x_label)
        .y_desc(labels.y_label)
        .axis_desc_style(("sans-serif", 30))
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let group_count = if dodge { series.len().max(1) } else { 1 };
    let bar_width = BAR_SLOT_FILL / group_count as f64;

    let mut has_legend = false;
    for (series_index, s) in series.iter().enumerate() {
        let offset = if dodge { series_index } else { 0 };
        let color = s.color;
        let drawn = chart
            .draw_series(s.bars.iter().map(|&(category, height)| {
                let left = category as f64 - BAR_SLOT_FILL / 2.0 + offset as f64 * bar_width;
                Rectangle::new([(left, 0.0), (left + bar_width, height)], color.filled())
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        if let Some(name) = &s.name {
            has_legend = true;
            drawn.label(name.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
            });
        }
    }

    if has_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 20))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates a multi-series line chart and saves it as a PNG file
///
/// The X-axis starts at 0; both axes are sized to fit every series. A legend lists
/// the series names in the given order.
pub fn create_line_plot(series: &[LineData], labels: &ChartLabels, output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let points = || series.iter().flat_map(|s| s.points.iter());
    let x_max = points().map(|(x, _)| *x).fold(0.0, f64::max);
    let y_max = points().map(|(_, y)| *y).fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(labels.title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(0.0..value_axis_max(x_max), 0.0..value_axis_max(y_max))
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(labels.x_label)
        .y_desc(labels.y_label)
        .axis_desc_style(("sans-serif", 30))
        .label_style(("sans-serif", 20))
        .bold_line_style(BLACK.mix(0.3).stroke_width(1))
        .light_line_style(BLACK.mix(0.08).stroke_width(1))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for s in series {
        let color = s.color;
        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), color.stroke_width(3)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(s.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 25, y)], color.stroke_width(3)));
    }

    if !series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 20))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Computes the outline of a pie slice in pixel coordinates.
///
/// Angles are in degrees, measured counter-clockwise from the positive X-axis
/// (screen Y grows downwards, so the sine term is subtracted).
pub fn pie_slice_points(
    center: (i32, i32),
    radius: f64,
    start_degrees: f64,
    sweep_degrees: f64,
) -> Vec<(i32, i32)> {
    let steps = (sweep_degrees.abs().ceil() as usize).max(1);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let angle = (start_degrees + sweep_degrees * step as f64 / steps as f64) * PI / 180.0;
        points.push((
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 - (radius * angle.sin()).round() as i32,
        ));
    }
    points
}

/// Point at `distance` from `center` along `degrees`, in pixel coordinates.
fn polar_point(center: (i32, i32), distance: f64, degrees: f64) -> (i32, i32) {
    let angle = degrees * PI / 180.0;
    (
        center.0 + (distance * angle.cos()).round() as i32,
        center.1 - (distance * angle.sin()).round() as i32,
    )
}

/// Creates a pie chart with percentage labels and saves it as a PNG file
///
/// Slices start at 90° (twelve o'clock) and proceed counter-clockwise in the given
/// order. Each slice carries its name outside the pie and its share inside.
///
/// # Arguments
/// * `slices` - `(name, value)` pairs; non-positive values are not drawn
/// * `colors` - Slice colors, cycled if shorter than `slices`
/// * `title` - Chart title
/// * `output_path` - Path where the PNG file should be saved
pub fn create_pie_plot(
    slices: &[(String, f64)],
    colors: &[RGBColor],
    title: &str,
    output_path: &Path,
) -> Result<()> {
    if colors.is_empty() && !slices.is_empty() {
        return Err(PlotError::InvalidData(
            "Pie chart needs at least one color".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, PIE_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let area = root
        .titled(title, ("sans-serif", 40))
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    draw_pie(&area, slices, colors)?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

fn draw_pie(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    slices: &[(String, f64)],
    colors: &[RGBColor],
) -> Result<()> {
    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = width.min(height) as f64 * 0.35;

    let total: f64 = slices.iter().map(|(_, v)| v.max(0.0)).sum();
    if total <= 0.0 {
        return Ok(());
    }

    let name_style = TextStyle::from(("sans-serif", 24).into_font()).color(&BLACK);
    let share_style = TextStyle::from(("sans-serif", 22).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    let mut start = 90.0;
    for (index, (name, value)) in slices.iter().enumerate() {
        if *value <= 0.0 {
            continue;
        }
        let sweep = value / total * 360.0;
        let color = colors[index % colors.len()];

        area.draw(&Polygon::new(
            pie_slice_points(center, radius, start, sweep),
            color.filled(),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

        let middle = start + sweep / 2.0;
        area.draw(&Text::new(
            percentage_label(*value, total),
            polar_point(center, radius * 0.6, middle),
            share_style.clone(),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

        // Names sit outside the rim, anchored away from the pie
        let horizontal = if (middle * PI / 180.0).cos() >= 0.0 {
            HPos::Left
        } else {
            HPos::Right
        };
        area.draw(&Text::new(
            name.clone(),
            polar_point(center, radius * 1.1, middle),
            name_style.pos(Pos::new(horizontal, VPos::Center)),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

        start += sweep;
    }

    Ok(())
}

/// Creates an annotated heatmap with a color bar and saves it as a PNG file
///
/// Rows are drawn top to bottom in the given order and columns left to right.
/// Present cells are filled on the yellow-orange-red scale and overlaid with their
/// value; absent cells are left blank.
///
/// # Arguments
/// * `data` - Row/column labels and the cell matrix
/// * `labels` - Title and axis descriptions
/// * `color_bar_label` - Description drawn next to the color bar
/// * `output_path` - Path where the PNG file should be saved
pub fn create_heatmap_plot(
    data: &HeatmapData,
    labels: &ChartLabels,
    color_bar_label: &str,
    output_path: &Path,
) -> Result<()> {
    let rows = data.row_labels.len();
    let columns = data.column_labels.len();
    if data.cells.len() != rows || data.cells.iter().any(|row| row.len() != columns) {
        return Err(PlotError::InvalidData(format!(
            "Heatmap cells must form a {}x{} matrix",
            rows, columns
        )));
    }

    let values = || data.cells.iter().flatten().flatten().copied();
    let min_value = values().fold(f64::INFINITY, f64::min);
    let max_value = values().fold(f64::NEG_INFINITY, f64::max);
    let (low, high) = if min_value.is_finite() && max_value.is_finite() {
        (min_value, max_value)
    } else {
        (0.0, 1.0)
    };
    let scale = |v: f64| {
        if high > low {
            (v - low) / (high - low)
        } else {
            0.5
        }
    };

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let (main_area, bar_area) = root.split_horizontally((CHART_SIZE.0 - COLOR_BAR_WIDTH) as i32);

    // Cells are centered on whole coordinates so ticks land on them
    let x_range = -0.5..(columns.max(1) as f64 - 0.5);
    let y_range = -0.5..(rows.max(1) as f64 - 0.5);

    let mut chart = ChartBuilder::on(&main_area)
        .caption(labels.title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    // First row at the top
    let top_down_rows: Vec<String> = data.row_labels.iter().rev().cloned().collect();
    let row_label = |y: &f64| category_at(&top_down_rows, *y);
    let column_label = |x: &f64| category_at(&data.column_labels, *x);

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(columns.max(1))
        .y_labels(rows.max(1))
        .x_label_formatter(&column_label)
        .y_label_formatter(&row_label)
        .x_desc(labels.x_label)
        .y_desc(labels.y_label)
        .axis_desc_style(("sans-serif", 30))
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let present_cells: Vec<(usize, usize, f64)> = data
        .cells
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|v| (r, c, v)))
        })
        .collect();

    chart
        .draw_series(present_cells.iter().map(|&(r, c, v)| {
            Rectangle::new(cell_bounds(rows, r, c), yl_or_rd(scale(v)).filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Cell separators
    chart
        .draw_series(present_cells.iter().map(|&(r, c, _)| {
            Rectangle::new(cell_bounds(rows, r, c), WHITE.stroke_width(1))
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let dark_text = TextStyle::from(("sans-serif", 16).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let light_text = dark_text.color(&WHITE);
    chart
        .draw_series(present_cells.iter().map(|&(r, c, v)| {
            let style = if scale(v) > 0.6 {
                light_text.clone()
            } else {
                dark_text.clone()
            };
            Text::new(
                format_cell_value(v),
                (c as f64, (rows - 1 - r) as f64),
                style,
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    draw_color_bar(&bar_area, low, high, color_bar_label)?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draws a vertical yellow-orange-red gradient labelled with the value range.
fn draw_color_bar(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    low: f64,
    high: f64,
    label: &str,
) -> Result<()> {
    const STEPS: usize = 100;
    let high = if high > low { high } else { low + 1.0 };

    let mut chart = ChartBuilder::on(area)
        .margin_top(80)
        .margin_bottom(80)
        .margin_left(10)
        .margin_right(10)
        .set_label_area_size(LabelAreaPosition::Right, 90)
        .build_cartesian_2d(0.0..1.0, low..high)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc(label)
        .axis_desc_style(("sans-serif", 22))
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let step = (high - low) / STEPS as f64;
    chart
        .draw_series((0..STEPS).map(|i| {
            let from = low + step * i as f64;
            Rectangle::new(
                [(0.0, from), (1.0, from + step)],
                yl_or_rd(i as f64 / (STEPS - 1) as f64).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
