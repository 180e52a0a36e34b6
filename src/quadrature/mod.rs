//! Numerical quadrature
//!
//! This module provides traits and implementations for 1D definite-integral
//! approximation. A quadrature rule applies a numerical method to integrate
//! the integrand supplied by a physical kernel.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The crate separates concerns into two layers:
//!
//! 1. **Field kernel** (`field` module) - WHAT to integrate
//!    - Biot-Savart differential contributions
//!    - Pure functions of physical parameters
//!
//! 2. **Quadrature rule** (`Quadrature` trait) - HOW to integrate
//!    - Applies the numerical scheme
//!    - Independent of physics
//!
//! This separation allows the same rule to integrate any component of the
//! field kernel, and any future rule to drop in behind the same trait.
//!
//! # Module Organization
//!
//! - **`midpoint`**: Composite midpoint rule (`MidpointRule`), the only
//!   rule shipped today. Fixed subinterval count by design: accuracy is a
//!   caller-visible knob, not an adaptive black box.
//!
//! # Quick Start Example
//!
//! ```rust
//! use biot_rs::quadrature::{integrate, MidpointRule, Quadrature};
//!
//! // Free-function form: ∫₀^π sin(x) dx ≈ 2
//! let approx = integrate(f64::sin, 0.0, std::f64::consts::PI, 100).unwrap();
//! assert!((approx - 2.0).abs() < 1e-3);
//!
//! // Trait form: reusable rule with a fixed resolution
//! let rule = MidpointRule::new(100).unwrap();
//! let approx = rule.integrate(&f64::sin, 0.0, std::f64::consts::PI).unwrap();
//! assert!((approx - 2.0).abs() < 1e-3);
//! ```
//!
//! # Determinism
//!
//! Floating-point summation is order-sensitive. Every rule in this module
//! accumulates samples in strictly increasing abscissa order, so a given
//! `(f, a, b, n)` always produces a bit-identical result. Tests rely on
//! this; new rules must preserve it.
//!
//! # Error Handling
//!
//! All entry points return `Result<f64, QuadratureError>`:
//!
//! - Zero subintervals → [`QuadratureError::InvalidSubintervals`]
//!   (the subinterval width would divide by zero)
//! - Non-finite bounds → [`QuadratureError::NonFiniteBounds`]
//!
//! A failure on given inputs always fails identically; there is nothing to
//! retry.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod midpoint;

pub use midpoint::{integrate, MidpointRule};

use std::fmt;

// =================================================================================================
// Quadrature Trait
// =================================================================================================

/// Trait for 1D definite-integral approximation rules
///
/// # Responsibility
/// Approximates ∫ₐᵇ f(x) dx for a caller-supplied integrand. Does NOT know
/// anything about the physics of the integrand (that's the field module's
/// job).
///
/// # Sign Convention
/// Reversed bounds (`lower > upper`) yield the negative-oriented integral,
/// consistent with ∫ₐᵇ = −∫ᵇₐ.
///
/// # Determinism
/// Implementations must evaluate and accumulate samples in strictly
/// increasing abscissa order so results are bit-reproducible.
pub trait Quadrature: Send + Sync {
    /// Approximate the definite integral of `f` over `[lower, upper]`
    ///
    /// # Arguments
    /// * `f` - Real-to-real integrand
    /// * `lower` - Lower bound of integration
    /// * `upper` - Upper bound of integration (may be below `lower`)
    ///
    /// # Returns
    /// The approximate integral value, or a [`QuadratureError`] describing
    /// why the rule could not be applied.
    fn integrate(&self, f: &dyn Fn(f64) -> f64, lower: f64, upper: f64)
        -> Result<f64, QuadratureError>;

    /// Name of the rule (used for display and benchmarking)
    fn name(&self) -> &str;
}

// =================================================================================================
// Error Type
// =================================================================================================

/// Errors produced by quadrature rules
///
/// The set is deliberately small: quadrature is a pure computation, so the
/// only failure modes are degenerate inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadratureError {
    /// Subinterval count of zero: the subinterval width (b − a)/n is
    /// undefined and the accumulation degenerates.
    InvalidSubintervals,

    /// One or both integration bounds are NaN or infinite.
    NonFiniteBounds { lower: f64, upper: f64 },
}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadratureError::InvalidSubintervals => {
                write!(f, "subinterval count must be at least 1")
            }
            QuadratureError::NonFiniteBounds { lower, upper } => {
                write!(f, "integration bounds must be finite, got [{}, {}]", lower, upper)
            }
        }
    }
}

impl std::error::Error for QuadratureError {}

// =================================================================================================
// Tests
// =================================================================================================
