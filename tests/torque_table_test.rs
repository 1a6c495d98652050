// tests/torque_table_test.rs

use approx::assert_relative_eq;
use static_torque::constants::{
    DEFAULT_LEVER_LENGTHS_M, DEFAULT_MASSES_KG, STANDARD_GRAVITY_M_S2,
};
use static_torque::torque::{compute_static_torque, generate_torque_table};

#[test]
fn formula_matches_m_g_r() {
    let masses = [0.0, 0.5, 3.0, 7.0, 10.0, 42.5];
    let lever_lengths = [0.0, 0.1, 0.25, 1.0, 2.0];
    for &mass in &masses {
        for &lever_length in &lever_lengths {
            assert_relative_eq!(
                compute_static_torque(mass, lever_length, STANDARD_GRAVITY_M_S2),
                mass * STANDARD_GRAVITY_M_S2 * lever_length,
                max_relative = 1e-9
            );
        }
    }
}

#[test]
fn table_length_is_cartesian_product_size() {
    let table = generate_torque_table(
        &DEFAULT_MASSES_KG,
        &DEFAULT_LEVER_LENGTHS_M,
        STANDARD_GRAVITY_M_S2,
    );
    assert_eq!(
        table.len(),
        DEFAULT_MASSES_KG.len() * DEFAULT_LEVER_LENGTHS_M.len()
    );
}

#[test]
fn empty_inputs_yield_empty_table() {
    assert!(generate_torque_table(&[], &[0.1, 0.2], 9.81).is_empty());
    assert!(generate_torque_table(&[3.0], &[], 9.81).is_empty());
    assert!(generate_torque_table(&[], &[], 9.81).is_empty());
}

#[test]
fn rows_follow_outer_mass_inner_lever_order() {
    let masses = [3.0, 7.0];
    let lever_lengths = [0.1, 0.2, 0.3];
    let table = generate_torque_table(&masses, &lever_lengths, 9.81);

    for (i, &mass) in masses.iter().enumerate() {
        for (j, &lever_length) in lever_lengths.iter().enumerate() {
            let record = &table[i * lever_lengths.len() + j];
            assert_eq!(record.mass_kg, mass);
            assert_eq!(record.lever_length_m, lever_length);
            assert_relative_eq!(
                record.torque_nm,
                mass * 9.81 * lever_length,
                max_relative = 1e-9
            );
        }
    }
}

#[test]
fn reference_scenario_values() {
    let table = generate_torque_table(&[3.0, 7.0, 10.0], &[0.1, 0.2], 9.81);
    let expected = [
        (3.0, 0.1, 2.943),
        (3.0, 0.2, 5.886),
        (7.0, 0.1, 6.867),
        (7.0, 0.2, 13.734),
        (10.0, 0.1, 9.81),
        (10.0, 0.2, 19.62),
    ];

    assert_eq!(table.len(), expected.len());
    for (record, &(mass, lever_length, torque)) in table.iter().zip(expected.iter()) {
        assert_eq!(record.mass_kg, mass);
        assert_eq!(record.lever_length_m, lever_length);
        assert_relative_eq!(record.torque_nm, torque, max_relative = 1e-9);
    }
}

#[test]
fn negative_and_non_finite_inputs_propagate() {
    // Permissive domain: nothing validates, the math flows through.
    assert_relative_eq!(
        compute_static_torque(-3.0, 0.5, 9.81),
        -14.715,
        max_relative = 1e-9
    );
    assert!(compute_static_torque(f64::NAN, 0.5, 9.81).is_nan());
    assert!(compute_static_torque(f64::INFINITY, 0.5, 9.81).is_infinite());

    let table = generate_torque_table(&[-1.0, f64::INFINITY], &[0.1], 9.81);
    assert_eq!(table.len(), 2);
    assert!(table[0].torque_nm < 0.0);
    assert!(table[1].torque_nm.is_infinite());
}
