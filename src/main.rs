// src/main.rs

use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use static_torque::config::TorqueConfig;
use static_torque::constants::{DEFAULT_CSV_PATH, DEFAULT_PLOT_PATH};
use static_torque::csv_export::write_torque_csv;
use static_torque::plot_functions::plot_torque_scatter::plot_torque_scatter;
use static_torque::torque::generate_torque_table;

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [torque_results.csv] [torque_plot.png]");
    eprintln!();
    eprintln!("Sweeps the built-in mass and lever-length grids, writes the static");
    eprintln!("torque table as CSV, and renders a color-coded scatter plot as PNG.");
    eprintln!("Output paths default to '{DEFAULT_CSV_PATH}' and '{DEFAULT_PLOT_PATH}';");
    eprintln!("their parent directories must already exist.");
}

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.iter().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }
    if args.len() > 3 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let mut config = TorqueConfig::default();
    if let Some(csv_path) = args.get(1) {
        config.csv_path = PathBuf::from(csv_path);
    }
    if let Some(plot_path) = args.get(2) {
        config.plot_path = PathBuf::from(plot_path);
    }

    // --- Table Generation ---
    println!(
        "Sweeping {} masses x {} lever lengths (g = {} m/s^2)...",
        config.masses_kg.len(),
        config.lever_lengths_m.len(),
        config.gravity_m_s2
    );
    let table = generate_torque_table(
        &config.masses_kg,
        &config.lever_lengths_m,
        config.gravity_m_s2,
    );
    println!("Computed {} torque records.", table.len());

    // --- CSV Export ---
    write_torque_csv(&table, &config.csv_path)?;

    // --- Plot Rendering ---
    plot_torque_scatter(&table, &config.plot_path)?;

    Ok(())
}
