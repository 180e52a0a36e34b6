//! Field sources
//!
//! This module provides the physical entities that generate magnetic
//! fields:
//!
//! - [`CurrentLoop`]: a single circular loop, offset along the z axis
//! - [`Solenoid`]: N evenly spaced loops, summed by superposition
//!
//! # Core Concepts
//!
//! A source is an **immutable value object** created from physical
//! parameters and queried any number of times:
//!
//! - `field_at(point, subintervals)` - field vector at one point
//! - `compute_field(grid, subintervals)` - dense [`crate::field::FieldVolume`]
//!   over a rectilinear grid
//!
//! Grid evaluation is an embarrassingly parallel map over lattice cells:
//! every cell reads only the immutable source parameters and writes its own
//! output slot. Computing the same field twice therefore yields
//! bit-identical volumes, with or without the `parallel` feature.
//!
//! # Example
//!
//! ```rust
//! use biot_rs::field::FieldGrid;
//! use biot_rs::sources::{CurrentLoop, Solenoid, DEFAULT_SUBINTERVALS};
//!
//! # fn main() -> Result<(), biot_rs::field::FieldError> {
//! let mu0 = 4e-7 * std::f64::consts::PI;
//! let grid = FieldGrid::uniform((-0.02, 0.02, 3), (-0.02, 0.02, 3), (0.0, 0.025, 3))?;
//!
//! let single = CurrentLoop::new(0.0, 0.008, 0.8, mu0)?;
//! let stacked = Solenoid::new(0.008, 0.8, mu0, 20, 0.025)?;
//!
//! let b_single = single.compute_field(&grid, 100)?;
//! let b_stacked = stacked.compute_field(&grid, 100)?;
//! assert_eq!(b_single.shape(), b_stacked.shape());
//! # let _ = DEFAULT_SUBINTERVALS;
//! # Ok(())
//! # }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
mod current_loop;
mod solenoid;

pub use current_loop::CurrentLoop;
pub use solenoid::Solenoid;

/// Reference angular resolution for the loop integral
///
/// The accuracy/cost knob of the whole system: every grid cell costs
/// `3 × subintervals` kernel evaluations. 1000 subintervals reproduce the
/// reference behaviour; coarse survey grids are usually fine with 100.
pub const DEFAULT_SUBINTERVALS: usize = 1000;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand grid cells off to Rayon is an execution concern,
// not a physics concern, so it lives here with the grid-mapping code rather
// than in field/data.rs.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on
// every compute_field() call.  Relaxed ordering is sufficient: the value is
// a performance hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of grid cells above which `compute_field()` switches to
/// parallel iteration.
///
/// The crossover is set at 64 cells. A single cell already costs thousands
/// of kernel evaluations at the reference subinterval count, so the
/// dispatch overhead of Rayon's thread pool is amortised quickly.
const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// `compute_field()` uses sequential iteration when the grid contains fewer
/// cells than this value, and switches to Rayon when it contains more — but
/// only when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use biot_rs::sources::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.  A zero-cell threshold would force
/// parallel dispatch on every single-cell `compute_field()`, which is never
/// the intended behaviour.
///
/// # Example
///
/// ```rust
/// use biot_rs::sources::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(4096);
/// assert_eq!(parallel_threshold(), 4096);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds.  Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value never
        // panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Tests
// =================================================================================================
