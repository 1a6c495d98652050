// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, Rectangle};
use plotters::style::colors::WHITE;
use plotters::style::{Color, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    COLORBAR_AREA_WIDTH, COLORBAR_GRADIENT_STEPS, COLORBAR_LABEL_AREA_SIZE,
    COLORBAR_MARGIN_BOTTOM, COLORBAR_MARGIN_RIGHT, COLORBAR_MARGIN_TOP, FONT_SIZE_AXIS_LABEL,
    FONT_SIZE_CHART_TITLE, PLOT_HEIGHT, PLOT_WIDTH, POINT_SIZE,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Map a value within [min_val, max_val] onto the viridis colormap.
/// Values outside the range are clamped; non-finite input maps to black.
pub fn value_to_color(value: f64, min_val: f64, max_val: f64) -> RGBColor {
    if !value.is_finite() || !min_val.is_finite() || !max_val.is_finite() {
        return RGBColor(0, 0, 0);
    }

    let span = (max_val - min_val).abs().max(1e-9);
    let clamped = value.clamp(min_val, max_val);
    let t = ((clamped - min_val) / span).clamp(0.0, 1.0);

    let color = colorous::VIRIDIS.eval_continuous(t);
    RGBColor(color.r, color.g, color.b)
}

/// Color scale bounds, padded when the span collapses to a single value so
/// the color-bar keeps a drawable axis.
pub fn effective_color_range(color_range: (f64, f64)) -> (f64, f64) {
    let (min_val, max_val) = color_range;
    if (max_val - min_val).abs() < 1e-9 {
        calculate_range(min_val, max_val)
    } else {
        (min_val, max_val)
    }
}

/// Configuration for a single color-mapped scatter chart.
#[derive(Clone)]
pub struct ScatterPlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Axis description of the color-bar legend.
    pub color_label: String,
    /// Points as (x, y, color value).
    pub points: Vec<(f64, f64, f64)>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    /// (min, max) of the color scale.
    pub color_range: (f64, f64),
}

/// Draws the scatter chart itself: mesh, axis labels, and one filled circle
/// per point, colored by its value on the shared scale.
fn draw_scatter_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &ScatterPlotConfig,
    color_min: f64,
    color_max: f64,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    chart.draw_series(plot_config.points.iter().map(|&(x, y, value)| {
        Circle::new(
            (x, y),
            POINT_SIZE,
            value_to_color(value, color_min, color_max).filled(),
        )
    }))?;

    Ok(())
}

/// Draws the vertical color-bar legend: a stacked-rectangle gradient over the
/// color scale, with tick labels and the axis description on its left.
fn draw_colorbar(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &ScatterPlotConfig,
    color_min: f64,
    color_max: f64,
) -> Result<(), Box<dyn Error>> {
    let mut colorbar = ChartBuilder::on(area)
        .margin_top(COLORBAR_MARGIN_TOP)
        .margin_bottom(COLORBAR_MARGIN_BOTTOM)
        .margin_right(COLORBAR_MARGIN_RIGHT)
        .y_label_area_size(COLORBAR_LABEL_AREA_SIZE)
        .build_cartesian_2d(0.0f64..1.0f64, color_min..color_max)?;

    colorbar
        .configure_mesh()
        .disable_x_axis()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_desc(&plot_config.color_label)
        .y_labels(8)
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let step = (color_max - color_min) / COLORBAR_GRADIENT_STEPS as f64;
    colorbar.draw_series((0..COLORBAR_GRADIENT_STEPS).map(|i| {
        let low = color_min + step * i as f64;
        let high = low + step;
        let mid = low + step * 0.5;
        Rectangle::new(
            [(0.0, low), (1.0, high)],
            value_to_color(mid, color_min, color_max).filled(),
        )
    }))?;

    Ok(())
}

/// Renders a color-mapped scatter chart with a color-bar legend and saves it
/// as a PNG at `output_path`. The drawing area is presented and released
/// before returning; a missing target directory surfaces as an I/O error.
pub fn draw_scatter_plot(
    output_path: &Path,
    plot_config: &ScatterPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let (color_min, color_max) = effective_color_range(plot_config.color_range);

    let root_area =
        BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let (chart_area, colorbar_area) =
        root_area.split_horizontally(PLOT_WIDTH as i32 - COLORBAR_AREA_WIDTH);

    draw_scatter_chart(&chart_area, plot_config, color_min, color_max)?;
    draw_colorbar(&colorbar_area, plot_config, color_min, color_max)?;

    root_area.present()?;
    println!("  Scatter plot saved as '{}'.", output_path.display());
    Ok(())
}


// src/plot_framework.rs
