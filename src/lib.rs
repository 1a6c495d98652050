// src/lib.rs - Library interface for internal module access

pub mod config;
pub mod constants;
pub mod csv_export;
pub mod plot_framework;
pub mod plot_functions;
pub mod torque;
