// src/torque.rs

/// One computed sample of the sweep grid.
///
/// Records are immutable once produced; their position in the table is the
/// only identity they carry (outer mass order, inner lever-length order).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorqueRecord {
    pub mass_kg: f64,         // Mass (m) in kg.
    pub lever_length_m: f64,  // Lever length (R) in meters.
    pub torque_nm: f64,       // Static torque (T = m * g * R) in Nm.
}

/// Calculate static torque, T = m * g * R.
///
/// Inputs are not validated: negative or non-finite masses and lever lengths
/// propagate mathematically instead of raising a distinct error.
pub fn compute_static_torque(mass_kg: f64, lever_length_m: f64, gravity_m_s2: f64) -> f64 {
    mass_kg * gravity_m_s2 * lever_length_m
}

/// Generate the torque table over the Cartesian product of the given masses
/// (outer loop) and lever lengths (inner loop).
///
/// The record at flat index `i * lever_lengths_m.len() + j` corresponds to
/// `(masses_kg[i], lever_lengths_m[j])`. Empty input slices yield an empty
/// table, not an error.
pub fn generate_torque_table(
    masses_kg: &[f64],
    lever_lengths_m: &[f64],
    gravity_m_s2: f64,
) -> Vec<TorqueRecord> {
    let mut table = Vec::with_capacity(masses_kg.len() * lever_lengths_m.len());
    for &mass in masses_kg {
        for &lever_length in lever_lengths_m {
            let torque = compute_static_torque(mass, lever_length, gravity_m_s2);
            table.push(TorqueRecord {
                mass_kg: mass,
                lever_length_m: lever_length,
                torque_nm: torque,
            });
        }
    }
    table
}


// src/torque.rs
