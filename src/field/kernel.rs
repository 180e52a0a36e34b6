//! Biot-Savart field kernel and full-loop evaluator
//!
//! # Mathematical Background
//!
//! The Biot-Savart law gives the magnetic field contribution of an
//! infinitesimal current element. For a circular loop of radius R carrying
//! current I, centered at the origin of its local frame with its axis along
//! z, the arc element at angular position θ sits at
//! (R·cos θ, R·sin θ, 0). Writing K = μ₀·I/(4π) and r for the distance
//! from that element to the evaluation point (x, y, z), the differential
//! contributions are:
//!
//! ```text
//! dBx =  K · z · R · cos θ / r³
//! dBy =  K · z · R · sin θ / r³
//! dBz = −K · R · (sin θ·(y − R sin θ) + cos θ·(x − R cos θ)) / r³
//! ```
//!
//! Integrating each component over θ ∈ [0, 2π] yields the total loop field.
//!
//! # Sign Convention
//!
//! Positive current flows counter-clockwise viewed from +z; negative current
//! reverses the winding direction and hence the field.
//!
//! # Singularity
//!
//! The kernel diverges as r → 0: an evaluation point on the loop conductor
//! itself has no defined field. Such points are rejected with
//! [`FieldError::Singularity`] rather than silently producing infinities.
//!
//! # Purity
//!
//! Both functions here are stateless pure functions over explicit physical
//! parameters. No state, no allocation per call beyond the integration loop,
//! safe for concurrent evaluation.

use std::f64::consts::PI;

use crate::field::{FieldError, FieldVector, Point3};
use crate::quadrature::{MidpointRule, Quadrature};

// =================================================================================================
// Differential Kernel
// =================================================================================================

/// Differential Biot-Savart contribution of one arc element
///
/// Evaluates the field contribution at `point` from the infinitesimal arc
/// element of a loop (radius `radius`, current `current`, permeability
/// `permeability`, lying in the z = 0 plane of its local frame) located at
/// angular position `theta`.
///
/// # Arguments
///
/// * `point` - Evaluation point in the loop's local frame
/// * `radius` - Loop radius R (> 0)
/// * `current` - Loop current I (signed; positive = counter-clockwise from +z)
/// * `permeability` - Permeability μ₀ (> 0)
/// * `theta` - Angular position of the arc element, radians
///
/// # Errors
///
/// * [`FieldError::InvalidArgument`] for non-positive `radius` or
///   `permeability`
/// * [`FieldError::Singularity`] when `point` coincides with the arc
///   element (r = 0)
///
/// # Example
///
/// ```rust
/// use biot_rs::field::{kernel, Point3};
///
/// let mu0 = 4e-7 * std::f64::consts::PI;
/// let db = kernel::field_contribution(&Point3::new(0.0, 0.0, 10.0), 0.02, 0.3, mu0, 0.0)
///     .unwrap();
/// assert!(db.x > 0.0); // element at θ = 0 pushes the on-axis field toward +x
/// ```
pub fn field_contribution(
    point: &Point3,
    radius: f64,
    current: f64,
    permeability: f64,
    theta: f64,
) -> Result<FieldVector, FieldError> {
    validate_loop_parameters(radius, permeability)?;

    let k = permeability * current / (4.0 * PI);
    let (sin_theta, cos_theta) = theta.sin_cos();

    // Source point of the arc element and its distance to the evaluation
    // point.
    let dx = point.x - radius * cos_theta;
    let dy = point.y - radius * sin_theta;
    let r = (dx * dx + dy * dy + point.z * point.z).sqrt();

    if r == 0.0 {
        return Err(FieldError::Singularity {
            x: point.x,
            y: point.y,
            z: point.z,
        });
    }

    let r3 = r * r * r;
    Ok(FieldVector::new(
        k * point.z * radius * cos_theta / r3,
        k * point.z * radius * sin_theta / r3,
        -k * radius * (sin_theta * dy + cos_theta * dx) / r3,
    ))
}

// =================================================================================================
// Full-Loop Evaluator
// =================================================================================================

/// Total field of a full current loop at a single point
///
/// Integrates the three kernel components independently over θ ∈ [0, 2π]
/// with the composite midpoint rule, one [`Quadrature::integrate`] call per
/// component with the same `subintervals` count.
///
/// `subintervals` is the accuracy/performance knob: cost grows linearly
/// with it. The reference resolution is
/// [`crate::sources::DEFAULT_SUBINTERVALS`] (1000). The three component
/// integrations are independent of one another; within each, samples are
/// accumulated in increasing θ order (bit-reproducible).
///
/// # Errors
///
/// * [`FieldError::InvalidArgument`] for non-positive `radius` or
///   `permeability`, or `subintervals == 0`
/// * [`FieldError::Singularity`] when `point` lies exactly on the loop
///   circle (z = 0 and √(x² + y²) = R)
/// * [`FieldError::NonFinite`] when overflow produced NaN/∞ (evaluation
///   point pathologically close to the conductor)
///
/// # Example
///
/// ```rust
/// use biot_rs::field::{kernel, Point3};
///
/// let mu0 = 4e-7 * std::f64::consts::PI;
/// let b = kernel::loop_field_at(&Point3::new(0.0, 0.0, 10.0), 0.02, 0.3, mu0, 1000)
///     .unwrap();
///
/// // On the symmetry axis the field is purely axial
/// assert!(b.x.abs() < 1e-20 && b.y.abs() < 1e-20);
/// assert!(b.z > 0.0);
/// ```
pub fn loop_field_at(
    point: &Point3,
    radius: f64,
    current: f64,
    permeability: f64,
    subintervals: usize,
) -> Result<FieldVector, FieldError> {
    validate_loop_parameters(radius, permeability)?;

    // Points on the loop circle are the kernel's physical singularity.
    // Reject them up front so no integrand sample can divide by zero.
    let radial = (point.x * point.x + point.y * point.y).sqrt();
    if point.z == 0.0 && radial == radius {
        return Err(FieldError::Singularity {
            x: point.x,
            y: point.y,
            z: point.z,
        });
    }

    let rule = MidpointRule::new(subintervals)?;
    let k = permeability * current / (4.0 * PI);
    let (x, y, z) = (point.x, point.y, point.z);

    // Squared distance from the arc element at θ to the evaluation point.
    // Shared by all three integrands; strictly positive after the
    // singularity check above.
    let r2 = move |theta: f64| -> f64 {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let dx = x - radius * cos_theta;
        let dy = y - radius * sin_theta;
        dx * dx + dy * dy + z * z
    };

    let bx = rule.integrate(
        &|theta: f64| k * z * radius * theta.cos() / r2(theta).powf(1.5),
        0.0,
        2.0 * PI,
    )?;
    let by = rule.integrate(
        &|theta: f64| k * z * radius * theta.sin() / r2(theta).powf(1.5),
        0.0,
        2.0 * PI,
    )?;
    let bz = rule.integrate(
        &|theta: f64| {
            let (sin_theta, cos_theta) = theta.sin_cos();
            -k * radius
                * (sin_theta * (y - radius * sin_theta) + cos_theta * (x - radius * cos_theta))
                / r2(theta).powf(1.5)
        },
        0.0,
        2.0 * PI,
    )?;

    let b = FieldVector::new(bx, by, bz);
    if !(b.x.is_finite() && b.y.is_finite() && b.z.is_finite()) {
        return Err(FieldError::NonFinite {
            context: format!("loop_field_at({}, {}, {})", x, y, z),
        });
    }

    Ok(b)
}

// =================================================================================================
// Parameter Validation
// =================================================================================================

/// Reject unphysical loop parameters
pub(crate) fn validate_loop_parameters(radius: f64, permeability: f64) -> Result<(), FieldError> {
    if !(radius > 0.0) || !radius.is_finite() {
        return Err(FieldError::InvalidArgument(format!(
            "loop radius must be positive and finite, got {}", radius
        )));
    }
    if !(permeability > 0.0) || !permeability.is_finite() {
        return Err(FieldError::InvalidArgument(format!(
            "permeability must be positive and finite, got {}", permeability
        )));
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
