// src/plot_functions/plot_torque_scatter.rs

use std::error::Error;
use std::path::Path;

use crate::plot_framework::{calculate_range, draw_scatter_plot, ScatterPlotConfig};
use crate::torque::TorqueRecord;

/// Generates the static torque scatter plot: x = lever length, y = torque,
/// point color = mass on the viridis scale, with a "Mass (kg)" color-bar.
///
/// An empty table still renders the chart furniture over fallback 0..1
/// ranges, with no points. Records with a non-finite lever length or torque
/// are skipped; a non-finite mass draws as a black point.
pub fn plot_torque_scatter(
    table: &[TorqueRecord],
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut mass_min = f64::INFINITY;
    let mut mass_max = f64::NEG_INFINITY;

    let mut points: Vec<(f64, f64, f64)> = Vec::with_capacity(table.len());
    for record in table {
        if !record.lever_length_m.is_finite() || !record.torque_nm.is_finite() {
            continue; // unplottable coordinates
        }
        x_min = x_min.min(record.lever_length_m);
        x_max = x_max.max(record.lever_length_m);
        y_min = y_min.min(record.torque_nm);
        y_max = y_max.max(record.torque_nm);
        mass_min = mass_min.min(record.mass_kg);
        mass_max = mass_max.max(record.mass_kg);
        points.push((record.lever_length_m, record.torque_nm, record.mass_kg));
    }

    let (x_range, y_range) = if points.is_empty() {
        (0.0..1.0, 0.0..1.0)
    } else {
        let (x_low, x_high) = calculate_range(x_min, x_max);
        let (y_low, y_high) = calculate_range(y_min, y_max);
        (x_low..x_high, y_low..y_high)
    };
    let color_range = if mass_min.is_finite() && mass_max.is_finite() {
        (mass_min, mass_max)
    } else {
        (0.0, 1.0)
    };

    let plot_config = ScatterPlotConfig {
        title: "Static Torque vs Lever Length".to_string(),
        x_label: "Lever Length (m)".to_string(),
        y_label: "Static Torque (Nm)".to_string(),
        color_label: "Mass (kg)".to_string(),
        points,
        x_range,
        y_range,
        color_range,
    };

    draw_scatter_plot(output_path, &plot_config)
}

// src/plot_functions/plot_torque_scatter.rs
