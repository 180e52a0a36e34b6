//! Integration tests: sources against analytic solutions
//!
//! These tests exercise the full pipeline (kernel → quadrature → source →
//! grid) and compare it against closed-form results and physical symmetry
//! arguments.

use biot_rs::field::{FieldError, FieldGrid, Point3};
use biot_rs::sources::{CurrentLoop, Solenoid, DEFAULT_SUBINTERVALS};
use std::f64::consts::PI;

mod common;
use common::{assert_vectors_close, on_axis_loop_field, relative_error};

const MU0: f64 = 4e-7 * PI;

#[test]
fn test_loop_matches_on_axis_closed_form() {
    let coil = CurrentLoop::new(0.0, 0.02, 0.3, MU0).unwrap();

    for z in [0.005, 0.05, 0.5, 10.0] {
        let b = coil
            .field_at(&Point3::new(0.0, 0.0, z), DEFAULT_SUBINTERVALS)
            .unwrap();
        let exact = on_axis_loop_field(0.02, 0.3, MU0, z);

        assert!(
            relative_error(b.z, exact) < 1e-6,
            "axial field off at z = {}: {:e} vs {:e}",
            z,
            b.z,
            exact
        );
        // On the axis the transverse components vanish analytically; the
        // quadrature leaves only pairwise-cancellation rounding noise.
        assert!(b.x.abs() < exact.abs() * 1e-6);
        assert!(b.y.abs() < exact.abs() * 1e-6);
    }
}

#[test]
fn test_axial_offset_translates_the_field() {
    // A loop at z₀ probed at z₀ + d must agree with a centered loop
    // probed at d.
    let centered = CurrentLoop::new(0.0, 0.02, 0.3, MU0).unwrap();
    let shifted = CurrentLoop::new(0.5, 0.02, 0.3, MU0).unwrap();

    let probe = Point3::new(0.003, -0.001, 0.04);
    let reference = centered.field_at(&probe, 500).unwrap();
    let translated = shifted
        .field_at(&Point3::new(0.003, -0.001, 0.54), 500)
        .unwrap();

    assert_vectors_close(
        &translated,
        &reference,
        reference.norm() * 1e-12,
        "translated loop field",
    );
}

#[test]
fn test_degenerate_solenoid_equals_loop() {
    // N = 1 with L = 0 is exactly one loop at z = 0.
    let solenoid = Solenoid::new(0.02, 0.3, MU0, 1, 0.0).unwrap();
    let coil = CurrentLoop::new(0.0, 0.02, 0.3, MU0).unwrap();

    let probe = Point3::new(0.0, 0.01, 0.03);
    let from_solenoid = solenoid.field_at(&probe, 200).unwrap();
    let from_loop = coil.field_at(&probe, 200).unwrap();

    // 0 + x == x for finite x, so the superposition seed changes nothing
    assert_eq!(from_solenoid, from_loop);
}

#[test]
fn test_grid_pipeline_deterministic() {
    let solenoid = Solenoid::new(0.008, 0.8, MU0, 5, 0.025).unwrap();
    let grid = FieldGrid::uniform((0.0, 0.0, 1), (0.01, 0.04, 4), (-0.01, 0.035, 4)).unwrap();

    let first = solenoid.compute_field(&grid, 100).unwrap();
    let second = solenoid.compute_field(&grid, 100).unwrap();

    assert_eq!(first, second);
    assert!(first.is_finite());
}

#[test]
fn test_solenoid_field_structure() {
    // 20-turn solenoid, ends at z = 0 and z = L.
    let turns = 20;
    let length = 0.025;
    let solenoid = Solenoid::new(0.008, 0.8, MU0, turns, length).unwrap();

    // Exterior probe on the midplane, well outside the bore: the return
    // flux points along -z, and both transverse components vanish by
    // symmetry (mirror-paired turns and the θ → π − θ reflection).
    let outside = solenoid
        .field_at(&Point3::new(0.0, 0.04, length / 2.0), 100)
        .unwrap();
    assert!(outside.z < 0.0, "return flux must point along -z");
    assert!(outside.x.abs() < outside.z.abs() * 1e-3);
    assert!(outside.y.abs() < outside.z.abs() * 1e-3);

    // Interior probe at the bore center: close to the infinite-solenoid
    // estimate µ₀·I·N/L, reduced by the finite-length end effect
    // (cos α = (L/2)/√((L/2)² + R²) ≈ 0.84 for this geometry).
    let inside = solenoid
        .field_at(&Point3::new(0.0, 0.0, length / 2.0), 100)
        .unwrap();
    let ideal = MU0 * 0.8 * (turns as f64) / length;

    assert!(inside.z > 0.0);
    assert!(inside.z < ideal);
    assert!(inside.z > 0.7 * ideal, "end effect larger than geometry allows");

    // The bore concentrates the flux: interior field dwarfs the exterior
    assert!(inside.z > 10.0 * outside.norm());
}

#[test]
fn test_singularity_propagates_from_any_turn() {
    // A grid point on the conductor of the 3rd turn must abort the whole
    // computation, not leave a partial volume behind.
    let solenoid = Solenoid::new(0.008, 0.8, MU0, 5, 0.02).unwrap();
    let z_turn = solenoid.axial_positions()[2];
    let grid = FieldGrid::new(vec![0.0], vec![0.008], vec![z_turn]).unwrap();

    let result = solenoid.compute_field(&grid, 100);
    assert!(matches!(result, Err(FieldError::Singularity { .. })));
}
