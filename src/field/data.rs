//! Field data types
//!
//! This module provides the value types the rest of the crate computes with:
//! evaluation points, field vectors, rectilinear sampling grids, and dense
//! 3D volumes of computed field vectors.

use ndarray::{Array3, ArrayView2, Axis};
use std::fmt;

use crate::field::FieldError;

// =================================================================================================
// Points and Vectors
// =================================================================================================

/// Evaluation point (x, y, z) in consistent length units
///
/// Points and field vectors are deliberately distinct nalgebra types:
/// a point locates where the field is sampled, a [`FieldVector`] holds the
/// sampled components. nalgebra enforces the distinction (point − point is
/// a vector, point + point does not compile).
pub type Point3 = nalgebra::Point3<f64>;

/// Field vector (Bx, By, Bz), in Tesla for magnetic fields
///
/// Component-wise addition (used for superposition) and scalar
/// multiplication come from nalgebra.
pub type FieldVector = nalgebra::Vector3<f64>;

// =================================================================================================
// Field Grid (Rectilinear Sampling Lattice)
// =================================================================================================

/// Rectilinear 3D sampling lattice
///
/// Three ordered sample sequences, one per axis. The lattice point at index
/// `(i, j, k)` is `(xs[i], ys[j], zs[k])`.
///
/// # Uniform Spacing
///
/// Field computation accepts any sample spacing. Uniform spacing is only
/// required by the visualization consumer (pixel-index mapping); see
/// [`FieldGrid::is_uniform`].
///
/// # Example
///
/// ```rust
/// use biot_rs::field::FieldGrid;
///
/// // Explicit samples (a single-sample axis is fine)
/// let grid = FieldGrid::new(vec![0.0], vec![0.0, 0.04], vec![0.0125]).unwrap();
/// assert_eq!(grid.shape(), (1, 2, 1));
///
/// // Evenly spaced samples
/// let grid = FieldGrid::uniform((-0.05, 0.05, 21), (-0.05, 0.05, 21), (0.0, 0.1, 11)).unwrap();
/// assert!(grid.is_uniform(1e-12));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    zs: Vec<f64>,
}

impl FieldGrid {
    /// Create a grid from explicit sample sequences
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidArgument`] when any axis is empty or contains a
    /// non-finite sample.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, zs: Vec<f64>) -> Result<Self, FieldError> {
        let grid = Self { xs, ys, zs };
        grid.validate()?;
        Ok(grid)
    }

    /// Create a grid with evenly spaced samples on every axis
    ///
    /// Each axis is described by `(start, end, count)`. With `count >= 2`
    /// the samples span `[start, end]` inclusive with step
    /// `(end − start)/(count − 1)`; with `count == 1` the single sample is
    /// `start`.
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidArgument`] when a count is zero or a bound is
    /// non-finite.
    pub fn uniform(
        x_axis: (f64, f64, usize),
        y_axis: (f64, f64, usize),
        z_axis: (f64, f64, usize),
    ) -> Result<Self, FieldError> {
        Self::new(
            linspace(x_axis.0, x_axis.1, x_axis.2)?,
            linspace(y_axis.0, y_axis.1, y_axis.2)?,
            linspace(z_axis.0, z_axis.1, z_axis.2)?,
        )
    }

    /// X-axis samples
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Y-axis samples
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Z-axis samples
    pub fn zs(&self) -> &[f64] {
        &self.zs
    }

    /// Lattice shape (|X|, |Y|, |Z|)
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.xs.len(), self.ys.len(), self.zs.len())
    }

    /// Total number of lattice points
    pub fn len(&self) -> usize {
        self.xs.len() * self.ys.len() * self.zs.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lattice point at index (i, j, k)
    ///
    /// Returns `None` when any index is out of range.
    pub fn point(&self, i: usize, j: usize, k: usize) -> Option<Point3> {
        Some(Point3::new(
            *self.xs.get(i)?,
            *self.ys.get(j)?,
            *self.zs.get(k)?,
        ))
    }

    /// Check that every axis is uniformly spaced within `tolerance`
    ///
    /// Single-sample axes count as uniform. The visualization layer calls
    /// this before mapping lattice indices to pixels.
    pub fn is_uniform(&self, tolerance: f64) -> bool {
        axis_is_uniform(&self.xs, tolerance)
            && axis_is_uniform(&self.ys, tolerance)
            && axis_is_uniform(&self.zs, tolerance)
    }

    /// Validate axis contents
    fn validate(&self) -> Result<(), FieldError> {
        for (name, axis) in [("X", &self.xs), ("Y", &self.ys), ("Z", &self.zs)] {
            if axis.is_empty() {
                return Err(FieldError::InvalidArgument(format!(
                    "{} axis has no samples", name
                )));
            }
            if axis.iter().any(|v| !v.is_finite()) {
                return Err(FieldError::InvalidArgument(format!(
                    "{} axis contains a non-finite sample", name
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for FieldGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (nx, ny, nz) = self.shape();
        write!(f, "FieldGrid [{} * {} * {}]", nx, ny, nz)
    }
}

/// `count` evenly spaced samples spanning [start, end] inclusive
fn linspace(start: f64, end: f64, count: usize) -> Result<Vec<f64>, FieldError> {
    if count == 0 {
        return Err(FieldError::InvalidArgument(
            "axis sample count must be at least 1".to_string(),
        ));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(FieldError::InvalidArgument(format!(
            "axis bounds must be finite, got [{}, {}]", start, end
        )));
    }
    if count == 1 {
        return Ok(vec![start]);
    }

    let step = (end - start) / ((count - 1) as f64);
    // Index-based abscissae: the last sample lands on `end` up to one ulp.
    Ok((0..count).map(|i| start + (i as f64) * step).collect())
}

/// Uniform-spacing check for one axis
fn axis_is_uniform(samples: &[f64], tolerance: f64) -> bool {
    if samples.len() < 3 {
        return true;
    }
    let step = samples[1] - samples[0];
    samples
        .windows(2)
        .all(|w| ((w[1] - w[0]) - step).abs() <= tolerance)
}

// =================================================================================================
// Field Volume (Dense 3D Result)
// =================================================================================================

/// Dense 3D array of field vectors
///
/// Indexed by `(i, j, k)` corresponding to the originating grid's
/// `(xs[i], ys[j], zs[k])`. Produced by
/// [`crate::sources::CurrentLoop::compute_field`] and
/// [`crate::sources::Solenoid::compute_field`].
///
/// # Superposition
///
/// Volumes of identical shape add element-wise with `+`, which is how
/// multi-source fields are combined.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldVolume {
    data: Array3<FieldVector>,
}

impl FieldVolume {

    // ======================================= constructors =======================================

    /// Create a volume filled with zero vectors
    pub fn zeros(shape: (usize, usize, usize)) -> Self {
        Self {
            data: Array3::from_elem(shape, FieldVector::zeros()),
        }
    }

    /// Wrap an existing array of field vectors
    pub fn from_array(data: Array3<FieldVector>) -> Self {
        Self { data }
    }

    /// Build a volume from a flat vector in row-major (i, j, k) order
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidArgument`] when `values.len()` does not match
    /// the product of the shape.
    pub fn from_flat(
        shape: (usize, usize, usize),
        values: Vec<FieldVector>,
    ) -> Result<Self, FieldError> {
        let data = Array3::from_shape_vec(shape, values).map_err(|e| {
            FieldError::InvalidArgument(format!("flat data does not match shape: {}", e))
        })?;
        Ok(Self { data })
    }

    // ========================================== Queries ==========================================

    /// Volume shape (|X|, |Y|, |Z|)
    pub fn shape(&self) -> (usize, usize, usize) {
        let s = self.data.shape();
        (s[0], s[1], s[2])
    }

    /// Total number of field vectors
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Field vector at index (i, j, k), if in range
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<&FieldVector> {
        self.data.get((i, j, k))
    }

    /// Iterate over all field vectors in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &FieldVector> {
        self.data.iter()
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array3<FieldVector> {
        &self.data
    }

    // ======================================== Extractions ========================================

    /// Magnitudes |B| over the whole volume
    pub fn magnitudes(&self) -> Array3<f64> {
        self.data.map(|v| v.norm())
    }

    /// Largest magnitude in the volume (0.0 for an all-zero volume)
    pub fn max_magnitude(&self) -> f64 {
        self.data.iter().map(|v| v.norm()).fold(0.0, f64::max)
    }

    /// (y, z) plane of field vectors at a fixed X index
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidArgument`] when `x_index` is out of range.
    pub fn plane_x(&self, x_index: usize) -> Result<ArrayView2<'_, FieldVector>, FieldError> {
        let (nx, _, _) = self.shape();
        if x_index >= nx {
            return Err(FieldError::InvalidArgument(format!(
                "x index {} out of range for volume with {} X samples",
                x_index, nx
            )));
        }
        Ok(self.data.index_axis(Axis(0), x_index))
    }

    /// Check the volume for NaN or infinite components
    ///
    /// NaN can arise from 0/0 and Inf from overflow; either indicates the
    /// evaluation point set touched the kernel singularity.
    pub fn is_finite(&self) -> bool {
        self.data
            .iter()
            .all(|v| v.x.is_finite() && v.y.is_finite() && v.z.is_finite())
    }
}

// ================================== Superposition arithmetic ==================================

impl std::ops::Add for FieldVolume {
    type Output = FieldVolume;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "volume shapes must match for superposition"
        );
        Self {
            data: &self.data + &rhs.data,
        }
    }
}

impl std::ops::AddAssign for FieldVolume {
    fn add_assign(&mut self, rhs: Self) {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "volume shapes must match for superposition"
        );
        self.data += &rhs.data;
    }
}

// ======================== Display ============================

impl fmt::Display for FieldVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (nx, ny, nz) = self.shape();
        write!(f, "FieldVolume [{} * {} * {}]", nx, ny, nz)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape_and_len() {
        let grid = FieldGrid::new(vec![0.0, 1.0], vec![0.0], vec![0.0, 0.5, 1.0]).unwrap();
        assert_eq!(grid.shape(), (2, 1, 3));
        assert_eq!(grid.len(), 6);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_grid_rejects_empty_axis() {
        let err = FieldGrid::new(vec![], vec![0.0], vec![0.0]).unwrap_err();
        assert!(matches!(err, FieldError::InvalidArgument(_)));
    }

    #[test]
    fn test_grid_rejects_non_finite_sample() {
        let err = FieldGrid::new(vec![0.0], vec![f64::NAN], vec![0.0]).unwrap_err();
        assert!(matches!(err, FieldError::InvalidArgument(_)));
    }

    #[test]
    fn test_uniform_grid_spans_bounds() {
        let grid = FieldGrid::uniform((0.0, 1.0, 5), (0.0, 1.0, 2), (-1.0, 1.0, 3)).unwrap();
        assert_eq!(grid.xs(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(grid.zs(), &[-1.0, 0.0, 1.0]);
        assert!(grid.is_uniform(1e-12));
    }

    #[test]
    fn test_single_sample_axis() {
        let grid = FieldGrid::uniform((0.0, 1.0, 1), (0.0, 0.0, 1), (0.0, 1.0, 4)).unwrap();
        assert_eq!(grid.xs(), &[0.0]);
        assert_eq!(grid.shape(), (1, 1, 4));
    }

    #[test]
    fn test_non_uniform_detected() {
        let grid = FieldGrid::new(vec![0.0, 0.1, 0.3], vec![0.0], vec![0.0]).unwrap();
        assert!(!grid.is_uniform(1e-12));
    }

    #[test]
    fn test_grid_point_lookup() {
        let grid = FieldGrid::new(vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]).unwrap();
        assert_eq!(grid.point(1, 0, 1), Some(Point3::new(2.0, 3.0, 5.0)));
        assert_eq!(grid.point(2, 0, 0), None);
    }

    #[test]
    fn test_volume_zeros() {
        let volume = FieldVolume::zeros((2, 3, 4));
        assert_eq!(volume.shape(), (2, 3, 4));
        assert_eq!(volume.len(), 24);
        assert_eq!(volume.max_magnitude(), 0.0);
        assert!(volume.is_finite());
    }

    #[test]
    fn test_volume_from_flat_shape_mismatch() {
        let err = FieldVolume::from_flat((2, 2, 2), vec![FieldVector::zeros(); 7]).unwrap_err();
        assert!(matches!(err, FieldError::InvalidArgument(_)));
    }

    #[test]
    fn test_volume_superposition() {
        let mut a = FieldVolume::zeros((1, 1, 2));
        let b = FieldVolume::from_flat(
            (1, 1, 2),
            vec![FieldVector::new(1.0, 0.0, -1.0), FieldVector::new(0.5, 2.0, 0.0)],
        )
        .unwrap();

        a += b.clone();
        let c = a + b;

        assert_eq!(c.get(0, 0, 0), Some(&FieldVector::new(2.0, 0.0, -2.0)));
        assert_eq!(c.get(0, 0, 1), Some(&FieldVector::new(1.0, 4.0, 0.0)));
    }

    #[test]
    #[should_panic(expected = "volume shapes must match")]
    fn test_volume_shape_mismatch_panics() {
        let _ = FieldVolume::zeros((1, 1, 2)) + FieldVolume::zeros((1, 2, 1));
    }

    #[test]
    fn test_plane_extraction() {
        let volume = FieldVolume::from_flat(
            (2, 1, 2),
            vec![
                FieldVector::new(1.0, 0.0, 0.0),
                FieldVector::new(2.0, 0.0, 0.0),
                FieldVector::new(3.0, 0.0, 0.0),
                FieldVector::new(4.0, 0.0, 0.0),
            ],
        )
        .unwrap();

        let plane = volume.plane_x(1).unwrap();
        assert_eq!(plane[(0, 0)].x, 3.0);
        assert_eq!(plane[(0, 1)].x, 4.0);
        assert!(volume.plane_x(2).is_err());
    }

    #[test]
    fn test_non_finite_detection() {
        let volume = FieldVolume::from_flat(
            (1, 1, 1),
            vec![FieldVector::new(f64::NAN, 0.0, 0.0)],
        )
        .unwrap();
        assert!(!volume.is_finite());
    }
}
