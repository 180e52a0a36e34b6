//! Circular current loop entity

use crate::field::{kernel, FieldError, FieldGrid, FieldVector, FieldVolume, Point3};

#[cfg(feature = "parallel")]
use crate::sources::parallel_threshold;

// =================================================================================================
// Current Loop
// =================================================================================================

/// A single circular current loop
///
/// The loop lies in a plane perpendicular to the z axis, centered at
/// (0, 0, `axial_position`), with radius `radius` and signed current
/// `current` (positive = counter-clockwise viewed from +z).
///
/// # Local Frame
///
/// The Biot-Savart kernel assumes the loop sits in the z = 0 plane of its
/// own frame. Field queries therefore subtract `axial_position` from the
/// requested z coordinate before evaluating the kernel; callers always work
/// in global coordinates.
///
/// # Immutability
///
/// A loop is constructed once from validated parameters and never mutated.
/// Every field query is a pure function of the loop and its arguments, so
/// repeated queries with identical inputs return bit-identical results.
///
/// # Example
///
/// ```rust
/// use biot_rs::field::Point3;
/// use biot_rs::sources::CurrentLoop;
///
/// let mu0 = 4e-7 * std::f64::consts::PI;
/// let coil = CurrentLoop::new(0.01, 0.02, 0.3, mu0).unwrap();
///
/// // Same distance above the loop plane => same axial field as an
/// // origin-centered loop at that height
/// let b = coil.field_at(&Point3::new(0.0, 0.0, 0.11), 1000).unwrap();
/// assert!(b.z > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentLoop {
    /// Center position along the z axis [m]
    axial_position: f64,

    /// Loop radius [m], > 0
    radius: f64,

    /// Signed loop current [A]; positive = counter-clockwise from +z
    current: f64,

    /// Permeability of the medium [T·m/A], > 0
    permeability: f64,
}

impl CurrentLoop {
    /// Create a current loop
    ///
    /// # Arguments
    ///
    /// * `axial_position` - Center position along z [m]
    /// * `radius` - Loop radius [m] (> 0)
    /// * `current` - Signed current [A]
    /// * `permeability` - Permeability [T·m/A] (> 0)
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidArgument`] for non-positive radius or
    /// permeability, or any non-finite parameter.
    pub fn new(
        axial_position: f64,
        radius: f64,
        current: f64,
        permeability: f64,
    ) -> Result<Self, FieldError> {
        kernel::validate_loop_parameters(radius, permeability)?;
        if !axial_position.is_finite() {
            return Err(FieldError::InvalidArgument(format!(
                "axial position must be finite, got {}", axial_position
            )));
        }
        if !current.is_finite() {
            return Err(FieldError::InvalidArgument(format!(
                "current must be finite, got {}", current
            )));
        }

        Ok(Self {
            axial_position,
            radius,
            current,
            permeability,
        })
    }

    /// Center position along the z axis [m]
    pub fn axial_position(&self) -> f64 {
        self.axial_position
    }

    /// Loop radius [m]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed loop current [A]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Permeability [T·m/A]
    pub fn permeability(&self) -> f64 {
        self.permeability
    }

    /// Field vector at a single point (global coordinates)
    ///
    /// Shifts the point into the loop's local frame and integrates the
    /// Biot-Savart kernel over the full loop with `subintervals` midpoint
    /// samples per component.
    ///
    /// # Errors
    ///
    /// Propagates [`kernel::loop_field_at`] errors; in particular,
    /// [`FieldError::Singularity`] when the point lies on the conductor.
    pub fn field_at(&self, point: &Point3, subintervals: usize) -> Result<FieldVector, FieldError> {
        let local = Point3::new(point.x, point.y, point.z - self.axial_position);
        kernel::loop_field_at(
            &local,
            self.radius,
            self.current,
            self.permeability,
            subintervals,
        )
    }

    /// Field over a full 3D grid
    ///
    /// Returns a [`FieldVolume`] shaped |X|×|Y|×|Z| with the vector at
    /// `(i, j, k)` evaluated at `(xs[i], ys[j], zs[k])` in global
    /// coordinates (the loop's axial offset is applied internally).
    ///
    /// # Cost
    ///
    /// O(|X|·|Y|·|Z|·subintervals) kernel evaluations — the dominant cost
    /// center of the whole system. Cells are independent; with the
    /// `parallel` feature they are distributed over Rayon's thread pool
    /// once the cell count exceeds [`crate::sources::parallel_threshold`].
    /// Each cell is written by flat index, so the resulting volume is
    /// bit-identical regardless of scheduling.
    ///
    /// # Errors
    ///
    /// The first cell error aborts the whole computation; no partial
    /// volume is returned.
    pub fn compute_field(
        &self,
        grid: &FieldGrid,
        subintervals: usize,
    ) -> Result<FieldVolume, FieldError> {
        let (nx, ny, nz) = grid.shape();
        let total = nx * ny * nz;

        // One lattice cell, addressed by flat row-major index.
        let cell = |flat: usize| -> Result<FieldVector, FieldError> {
            let i = flat / (ny * nz);
            let j = (flat / nz) % ny;
            let k = flat % nz;
            self.field_at(
                &Point3::new(grid.xs()[i], grid.ys()[j], grid.zs()[k]),
                subintervals,
            )
        };

        #[cfg(feature = "parallel")]
        let values: Vec<FieldVector> = if total > parallel_threshold() {
            use rayon::prelude::*;
            (0..total)
                .into_par_iter()
                .map(cell)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            (0..total).map(cell).collect::<Result<Vec<_>, _>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let values: Vec<FieldVector> = (0..total).map(cell).collect::<Result<Vec<_>, _>>()?;

        FieldVolume::from_flat((nx, ny, nz), values)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const MU0: f64 = 4e-7 * PI;

    #[test]
    fn test_constructor_validation() {
        assert!(CurrentLoop::new(0.0, 0.02, 0.3, MU0).is_ok());
        assert!(CurrentLoop::new(0.0, 0.0, 0.3, MU0).is_err());
        assert!(CurrentLoop::new(0.0, -1.0, 0.3, MU0).is_err());
        assert!(CurrentLoop::new(0.0, 0.02, 0.3, 0.0).is_err());
        assert!(CurrentLoop::new(f64::NAN, 0.02, 0.3, MU0).is_err());
        assert!(CurrentLoop::new(0.0, 0.02, f64::INFINITY, MU0).is_err());
    }

    #[test]
    fn test_accessors() {
        let coil = CurrentLoop::new(0.01, 0.02, -0.3, MU0).unwrap();
        assert_eq!(coil.axial_position(), 0.01);
        assert_eq!(coil.radius(), 0.02);
        assert_eq!(coil.current(), -0.3);
        assert_eq!(coil.permeability(), MU0);
    }

    #[test]
    fn test_axial_offset_is_subtracted() {
        // A loop at z0 queried at z0 + d must match an origin loop queried
        // at d, bit for bit: the offset is a plain subtraction before the
        // identical kernel evaluation.
        // Offsets chosen exactly representable so the subtraction is exact.
        let at_origin = CurrentLoop::new(0.0, 0.02, 0.3, MU0).unwrap();
        let shifted = CurrentLoop::new(0.5, 0.02, 0.3, MU0).unwrap();

        let b0 = at_origin
            .field_at(&Point3::new(0.003, -0.002, 0.25), 300)
            .unwrap();
        let b1 = shifted
            .field_at(&Point3::new(0.003, -0.002, 0.75), 300)
            .unwrap();

        assert_eq!(b0, b1);
    }

    #[test]
    fn test_singularity_respects_offset() {
        // The conductor of a shifted loop lives at z = axial_position.
        let shifted = CurrentLoop::new(0.05, 0.02, 0.3, MU0).unwrap();
        let err = shifted
            .field_at(&Point3::new(0.02, 0.0, 0.05), 100)
            .unwrap_err();
        assert!(matches!(err, FieldError::Singularity { .. }));
    }

    #[test]
    fn test_compute_field_shape_and_layout() {
        let coil = CurrentLoop::new(0.0, 0.02, 0.3, MU0).unwrap();
        let grid = FieldGrid::new(
            vec![0.0, 0.01],
            vec![0.0],
            vec![0.05, 0.1, 0.15],
        )
        .unwrap();

        let volume = coil.compute_field(&grid, 100).unwrap();
        assert_eq!(volume.shape(), (2, 1, 3));

        // Cell (i, j, k) must hold the field at (xs[i], ys[j], zs[k])
        let direct = coil.field_at(&Point3::new(0.01, 0.0, 0.15), 100).unwrap();
        assert_eq!(volume.get(1, 0, 2), Some(&direct));
    }

    #[test]
    fn test_compute_field_idempotent() {
        let coil = CurrentLoop::new(0.0, 0.008, 0.8, MU0).unwrap();
        let grid = FieldGrid::uniform((-0.01, 0.01, 3), (-0.01, 0.01, 3), (0.0, 0.02, 3)).unwrap();

        let a = coil.compute_field(&grid, 50).unwrap();
        let b = coil.compute_field(&grid, 50).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_compute_field_propagates_singularity() {
        let coil = CurrentLoop::new(0.0, 0.02, 0.3, MU0).unwrap();
        // The middle Y sample lands exactly on the conductor.
        let grid = FieldGrid::new(vec![0.0], vec![0.0, 0.02], vec![0.0]).unwrap();

        let err = coil.compute_field(&grid, 100).unwrap_err();
        assert!(matches!(err, FieldError::Singularity { .. }));
    }
}
