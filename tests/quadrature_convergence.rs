//! Convergence tests for the composite midpoint rule
//!
//! These tests verify that the quadrature exhibits the expected
//! convergence behaviour when refining the subinterval count.

use biot_rs::quadrature::{integrate, MidpointRule, Quadrature};
use std::f64::consts::PI;

mod common;
use common::relative_error;

#[test]
fn test_midpoint_second_order_convergence() {
    // Midpoint should have second-order convergence: error ~ O(n⁻²)
    // When n → 2n, error should → error/4

    let exact = 0.25; // ∫₀¹ x³ dx

    let n_list = vec![10, 20, 40, 80];
    let mut errors = Vec::new();

    for &n in &n_list {
        let value = integrate(|x| x * x * x, 0.0, 1.0, n).unwrap();
        errors.push((value - exact).abs());
    }

    // Check convergence ratios
    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("Midpoint convergence ratio {}->{}: {}", i, i + 1, ratio);

        // Should be close to 4 for second-order
        assert!(
            ratio > 3.5 && ratio < 4.5,
            "Convergence ratio {} not second-order",
            ratio
        );
    }
}

#[test]
fn test_half_period_sine_error_decays() {
    // ∫₀^π sin(x) dx = 2; over half a period the rule is only O(n⁻²),
    // so the error decays but does not vanish.
    let mut previous = f64::INFINITY;
    for n in [10, 100, 1000] {
        let value = integrate(f64::sin, 0.0, PI, n).unwrap();
        let error = relative_error(value, 2.0);
        assert!(
            error < previous,
            "error did not decrease at n = {}: {:e} >= {:e}",
            n,
            error,
            previous
        );
        previous = error;
    }

    // n = 100 is already comfortably inside engineering accuracy
    let value = integrate(f64::sin, 0.0, PI, 100).unwrap();
    assert!(relative_error(value, 2.0) < 1e-3);
}

#[test]
fn test_full_period_trigonometric_polynomials() {
    // Over a full period the midpoint rule is exact (up to rounding) for
    // trigonometric polynomials of degree < n; this is what makes modest
    // subinterval counts sufficient for loop-integral work.
    let rule = MidpointRule::new(16).unwrap();

    // ∫₀²π cos²(x) dx = π
    let value = rule.integrate(&|x: f64| x.cos() * x.cos(), 0.0, 2.0 * PI).unwrap();
    assert!(relative_error(value, PI) < 1e-14);

    // ∫₀²π sin(3x)·cos(2x) dx = 0
    let value = rule
        .integrate(&|x: f64| (3.0 * x).sin() * (2.0 * x).cos(), 0.0, 2.0 * PI)
        .unwrap();
    assert!(value.abs() < 1e-13);
}

#[test]
fn test_orientation_and_rejection() {
    // Reversing the bounds flips the sign
    let forward = integrate(|x| x * x, 1.0, 3.0, 64).unwrap();
    let backward = integrate(|x| x * x, 3.0, 1.0, 64).unwrap();
    assert!((forward + backward).abs() < 1e-12);

    // Zero subintervals is rejected rather than silently degenerate
    assert!(integrate(|x| x, 0.0, 1.0, 0).is_err());
    assert!(MidpointRule::new(0).is_err());
}
