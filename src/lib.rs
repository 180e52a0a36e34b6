//! biot-rs: Biot-Savart Magnetic Field Simulation
//!
//! A framework for computing the magnetic field of circular current loops
//! and solenoids by numerical integration of the Biot-Savart law.
//! Built with Rust for performance and safety.
//!
//! # Architecture
//!
//! biot-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - The field kernel defines the physics (what to integrate)
//!    - The quadrature engine provides the method (how to integrate)
//!
//! 2. **Immutability and Pure Evaluation**
//!    - Field sources are immutable value objects
//!    - Every evaluation is a pure function of its inputs
//!    - Deterministic summation order for bit-reproducible results
//!
//! # Quick Start
//!
//! ```rust
//! use biot_rs::field::{FieldGrid, Point3};
//! use biot_rs::sources::{CurrentLoop, Solenoid};
//!
//! # fn main() -> Result<(), biot_rs::field::FieldError> {
//! let mu0 = 4e-7 * std::f64::consts::PI;
//!
//! // 1. A single current loop in the z = 0 plane
//! let coil = CurrentLoop::new(0.0, 0.02, 0.3, mu0)?;
//!
//! // 2. Evaluate the field at one point on the symmetry axis
//! let b = coil.field_at(&Point3::new(0.0, 0.0, 0.1), 1000)?;
//! println!("B = ({:.3e}, {:.3e}, {:.3e}) T", b.x, b.y, b.z);
//!
//! // 3. Or over a full 3D grid
//! let grid = FieldGrid::uniform((-0.05, 0.05, 5), (-0.05, 0.05, 5), (-0.05, 0.05, 5))?;
//! let volume = coil.compute_field(&grid, 100)?;
//! println!("Computed {} field vectors", volume.len());
//!
//! // 4. Superpose many loops into a solenoid
//! let solenoid = Solenoid::new(0.008, 0.8, mu0, 20, 0.025)?;
//! let total = solenoid.compute_field(&grid, 100)?;
//! # let _ = total;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`quadrature`]: Numerical integration (composite midpoint rule)
//! - [`field`]: Biot-Savart kernel, loop evaluator, and field data types
//! - [`sources`]: Field sources (current loop, solenoid)
//! - [`output`]: Result visualization and export

// Core modules
pub mod quadrature;

pub mod field;
pub mod sources;

// Consumers of computed fields (plots, CSV)
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use biot_rs::prelude::*;
    //! ```
    pub use crate::field::{FieldError,
                           FieldGrid,
                           FieldVector,
                           FieldVolume,
                           Point3};
    pub use crate::quadrature::{integrate,
                                MidpointRule,
                                Quadrature,
                                QuadratureError};
    pub use crate::sources::{CurrentLoop,
                             Solenoid,
                             DEFAULT_SUBINTERVALS};
}
