// src/constants.rs

// Physics defaults.
pub const STANDARD_GRAVITY_M_S2: f64 = 9.81;
pub const DEFAULT_MASSES_KG: [f64; 3] = [3.0, 7.0, 10.0];
pub const DEFAULT_LEVER_LENGTHS_M: [f64; 10] =
    [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

// Default output locations. The parent directories are not created by the
// writers; a missing directory surfaces as an I/O error.
pub const DEFAULT_CSV_PATH: &str = "CSV/py-static_torque_results.csv";
pub const DEFAULT_PLOT_PATH: &str = "Images/py-static_torque_plot.png";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 720;

// Scatter point radius in pixels.
pub const POINT_SIZE: i32 = 6;

// Font sizes.
pub const FONT_SIZE_CHART_TITLE: i32 = 24;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;

// --- Color-bar geometry ---
// Width of the strip split off the right edge for the color-bar, and the
// space inside it reserved for tick labels and the axis description.
pub const COLORBAR_AREA_WIDTH: i32 = 120;
pub const COLORBAR_LABEL_AREA_SIZE: i32 = 60;
// Vertical margins that roughly line the bar up with the chart's plot area
// (title band above, x-label band below).
pub const COLORBAR_MARGIN_TOP: i32 = 40;
pub const COLORBAR_MARGIN_BOTTOM: i32 = 60;
pub const COLORBAR_MARGIN_RIGHT: i32 = 20;
// Number of filled rectangles approximating the continuous gradient.
pub const COLORBAR_GRADIENT_STEPS: usize = 64;

// src/constants.rs
