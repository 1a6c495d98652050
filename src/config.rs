// src/config.rs

use std::path::PathBuf;

use crate::constants::{
    DEFAULT_CSV_PATH, DEFAULT_LEVER_LENGTHS_M, DEFAULT_MASSES_KG, DEFAULT_PLOT_PATH,
    STANDARD_GRAVITY_M_S2,
};

/// Immutable per-run configuration for the torque sweep.
/// Centralizes the input grids, the gravitational constant, and both output
/// paths so none of them live in hidden global state.
#[derive(Debug, Clone)]
pub struct TorqueConfig {
    /// Masses to sweep, in kilograms (outer loop of the table).
    pub masses_kg: Vec<f64>,

    /// Lever lengths to sweep, in meters (inner loop of the table).
    pub lever_lengths_m: Vec<f64>,

    /// Gravitational acceleration in m/s^2.
    pub gravity_m_s2: f64,

    /// Destination of the CSV table.
    pub csv_path: PathBuf,

    /// Destination of the scatter plot PNG.
    pub plot_path: PathBuf,
}

impl Default for TorqueConfig {
    fn default() -> Self {
        Self {
            masses_kg: DEFAULT_MASSES_KG.to_vec(),
            lever_lengths_m: DEFAULT_LEVER_LENGTHS_M.to_vec(),
            gravity_m_s2: STANDARD_GRAVITY_M_S2,
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            plot_path: PathBuf::from(DEFAULT_PLOT_PATH),
        }
    }
}

impl TorqueConfig {
    /// Number of records the sweep will produce.
    pub fn grid_size(&self) -> usize {
        self.masses_kg.len() * self.lever_lengths_m.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_grid() {
        let config = TorqueConfig::default();
        assert_eq!(config.masses_kg.len(), 3);
        assert_eq!(config.lever_lengths_m.len(), 10);
        assert_eq!(config.grid_size(), 30);
        assert_eq!(config.gravity_m_s2, 9.81);
        assert_eq!(config.csv_path, PathBuf::from("CSV/py-static_torque_results.csv"));
        assert_eq!(config.plot_path, PathBuf::from("Images/py-static_torque_plot.png"));
    }
}

// src/config.rs
