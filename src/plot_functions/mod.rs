// src/plot_functions/mod.rs

pub mod plot_torque_scatter;

// src/plot_functions/mod.rs
