//! Magnetic field model
//!
//! This module provides the physical side of the crate:
//!
//! - **Field kernel**: the Biot-Savart differential contribution of an
//!   infinitesimal arc element of a current loop ([`kernel::field_contribution`])
//! - **Loop evaluator**: the full-loop field at a single point, obtained by
//!   integrating the kernel over θ ∈ [0, 2π] ([`kernel::loop_field_at`])
//! - **Data types**: points, field vectors, sampling grids, and computed
//!   field volumes ([`data`])
//!
//! # Architecture
//!
//! The field model is **separate from the numerical quadrature**:
//! - This module provides the **integrand** (physics)
//! - The [`crate::quadrature`] module provides the **method** (numerics)
//!
//! Kernel evaluation is a stateless pure function taking all physical
//! parameters explicitly. No closures are captured per call, no hidden
//! allocation happens per evaluation, and everything is safe to call
//! concurrently.
//!
//! # Example
//!
//! ```rust
//! use biot_rs::field::{kernel, Point3};
//!
//! let mu0 = 4e-7 * std::f64::consts::PI;
//! let point = Point3::new(0.0, 0.0, 10.0);
//!
//! // Differential contribution at θ = π/4
//! let db = kernel::field_contribution(&point, 0.02, 0.3, mu0, std::f64::consts::FRAC_PI_4)
//!     .unwrap();
//!
//! // Full-loop field at the same point
//! let b = kernel::loop_field_at(&point, 0.02, 0.3, mu0, 1000).unwrap();
//! # let _ = (db, b);
//! ```

// module declaration
pub mod data;
pub mod kernel;

// re-export commonly used types for convenience
pub use data::{FieldGrid, FieldVector, FieldVolume, Point3};

use std::fmt;

// =================================================================================================
// Error Taxonomy
// =================================================================================================

/// Errors surfaced by field computations
///
/// Every error is detected at the point of computation and returned
/// immediately: there are no partial results and no silent clamping.
/// All field operations are deterministic pure functions, so a failure on
/// given inputs will always fail identically — callers should treat any
/// variant as fatal for that computation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// A parameter is outside its physical domain (non-positive radius or
    /// permeability, zero subinterval count, inconsistent solenoid turn
    /// count, empty grid axis, ...).
    InvalidArgument(String),

    /// The evaluation point lies exactly on the loop conductor (distance
    /// r = 0 in the Biot-Savart kernel). This is a physical singularity of
    /// the kernel, not a numerical accident: the field is undefined there
    /// and the input is unsupported.
    Singularity { x: f64, y: f64, z: f64 },

    /// A NaN or infinite value escaped a computation. Indicates numerical
    /// overflow, usually from an evaluation point pathologically close to
    /// the conductor.
    NonFinite { context: String },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            FieldError::Singularity { x, y, z } => write!(
                f,
                "evaluation point ({}, {}, {}) lies on the loop conductor; \
                 the Biot-Savart kernel is singular there",
                x, y, z
            ),
            FieldError::NonFinite { context } => {
                write!(f, "non-finite field value in {}", context)
            }
        }
    }
}

impl std::error::Error for FieldError {}

impl From<crate::quadrature::QuadratureError> for FieldError {
    fn from(err: crate::quadrature::QuadratureError) -> Self {
        FieldError::InvalidArgument(err.to_string())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::QuadratureError;

    #[test]
    fn test_display_messages() {
        let err = FieldError::InvalidArgument("loop radius must be positive".to_string());
        assert!(err.to_string().contains("loop radius"));

        let err = FieldError::Singularity { x: 0.02, y: 0.0, z: 0.0 };
        assert!(err.to_string().contains("singular"));

        let err = FieldError::NonFinite { context: "loop_field_at".to_string() };
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn test_quadrature_error_converts_to_invalid_argument() {
        let err: FieldError = QuadratureError::InvalidSubintervals.into();
        assert!(matches!(err, FieldError::InvalidArgument(_)));
    }
}
