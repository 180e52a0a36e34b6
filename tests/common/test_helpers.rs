//! Helper functions for integration tests

use biot_rs::field::FieldVector;

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-30 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Assert that two field vectors are close (component-wise tolerance)
pub fn assert_vectors_close(
    actual: &FieldVector,
    expected: &FieldVector,
    tolerance: f64,
    message: &str,
) {
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff < tolerance,
            "{}: component {} differs by {:e} (tolerance {:e})",
            message,
            i,
            diff,
            tolerance
        );
    }
}

/// Closed-form axial field of a circular loop centered at the origin:
///
/// B_z(z) = µ₀·I·R² / (2·(R² + z²)^{3/2})
pub fn on_axis_loop_field(radius: f64, current: f64, permeability: f64, z: f64) -> f64 {
    permeability * current * radius * radius
        / (2.0 * (radius * radius + z * z).powf(1.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_on_axis_field_at_center() {
        // At z = 0 the formula reduces to µ₀I/(2R)
        let b = on_axis_loop_field(0.02, 0.3, 4e-7 * std::f64::consts::PI, 0.0);
        let expected = 4e-7 * std::f64::consts::PI * 0.3 / (2.0 * 0.02);
        assert!((b - expected).abs() < 1e-18);
    }
}
