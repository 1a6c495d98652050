// src/csv_export.rs

use std::error::Error;
use std::path::Path;

use crate::torque::TorqueRecord;

/// Write the torque table as a comma-separated file with a fixed header row.
///
/// Values are written with `f64`'s `Display` formatting (the shortest decimal
/// form that parses back to the same value), so reading the file recovers the
/// table exactly and repeated runs produce byte-identical output. The target
/// file is created or truncated; the parent directory must already exist.
pub fn write_torque_csv(table: &[TorqueRecord], output_path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(output_path)?;

    writer.write_record(["Mass (kg)", "Lever Length (m)", "Static Torque (Nm)"])?;
    for record in table {
        writer.write_record([
            record.mass_kg.to_string(),
            record.lever_length_m.to_string(),
            record.torque_nm.to_string(),
        ])?;
    }
    writer.flush()?;

    println!(
        "  Torque table saved as '{}' ({} rows).",
        output_path.display(),
        table.len()
    );
    Ok(())
}

// src/csv_export.rs
