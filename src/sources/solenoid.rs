//! Solenoid entity (superposition of current loops)

use crate::field::{FieldError, FieldGrid, FieldVector, FieldVolume, Point3};
use crate::sources::CurrentLoop;

// =================================================================================================
// Solenoid
// =================================================================================================

/// A solenoid approximated by N evenly spaced current loops
///
/// The solenoid axis lies along z with its ends at z = 0 and z = `length`.
/// The N turns are modeled as N independent [`CurrentLoop`]s at axial
/// positions `zᵢ = i·L/(N−1)` for `i ∈ [0, N)` — both ends carry a loop —
/// and the total field is their superposition:
///
/// ```text
/// B_total = Σₙ B_n
/// ```
///
/// # Turn Count
///
/// - `turns >= 2`: the regular case; the spacing L/(N−1) is well defined.
/// - `turns == 1`: accepted only with `length == 0` (a degenerate solenoid
///   that is exactly one loop at z = 0; no spacing is ever derived).
/// - `turns == 0`: rejected.
///
/// # Reduction Order
///
/// [`Solenoid::compute_field`] accumulates the per-loop volumes in
/// ascending turn index order. The order is fixed so results are
/// bit-reproducible; floating-point summation is order-sensitive even
/// though any order is physically equivalent.
///
/// # Example
///
/// ```rust
/// use biot_rs::field::Point3;
/// use biot_rs::sources::Solenoid;
///
/// let mu0 = 4e-7 * std::f64::consts::PI;
/// let solenoid = Solenoid::new(0.008, 0.8, mu0, 20, 0.025).unwrap();
///
/// // Interior of the bore: strong axial field
/// let inside = solenoid
///     .field_at(&Point3::new(0.0, 0.0, 0.0125), 100)
///     .unwrap();
/// assert!(inside.z > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solenoid {
    /// Turn radius [m], > 0
    radius: f64,

    /// Signed current through every turn [A]
    current: f64,

    /// Permeability of the medium [T·m/A], > 0
    permeability: f64,

    /// Number of turns
    turns: usize,

    /// Axial length [m], >= 0; ends at z = 0 and z = length
    length: f64,

    /// Constituent loops, ascending axial position
    loops: Vec<CurrentLoop>,
}

impl Solenoid {
    /// Create a solenoid
    ///
    /// # Arguments
    ///
    /// * `radius` - Turn radius [m] (> 0)
    /// * `current` - Signed current [A] (positive = counter-clockwise from +z)
    /// * `permeability` - Permeability [T·m/A] (> 0)
    /// * `turns` - Number of turns (see type-level docs for the `turns == 1`
    ///   special case)
    /// * `length` - Axial length [m] (>= 0)
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidArgument`] when `turns == 0`, when `turns == 1`
    /// with a nonzero length (the L/(N−1) spacing would divide by zero),
    /// when `length < 0`, or when the loop parameters are unphysical.
    pub fn new(
        radius: f64,
        current: f64,
        permeability: f64,
        turns: usize,
        length: f64,
    ) -> Result<Self, FieldError> {
        if turns == 0 {
            return Err(FieldError::InvalidArgument(
                "solenoid must have at least one turn".to_string(),
            ));
        }
        if !length.is_finite() || length < 0.0 {
            return Err(FieldError::InvalidArgument(format!(
                "solenoid length must be non-negative and finite, got {}", length
            )));
        }
        if turns == 1 && length != 0.0 {
            return Err(FieldError::InvalidArgument(
                "a single-turn solenoid must have zero length \
                 (turn spacing L/(N-1) is undefined for N = 1)"
                    .to_string(),
            ));
        }

        // Turn positions span [0, L] inclusive. For the degenerate
        // single-turn case the one loop sits at z = 0 and no spacing is
        // derived.
        let axial_positions: Vec<f64> = if turns == 1 {
            vec![0.0]
        } else {
            let step = length / ((turns - 1) as f64);
            (0..turns).map(|i| (i as f64) * step).collect()
        };

        let loops = axial_positions
            .into_iter()
            .map(|z| CurrentLoop::new(z, radius, current, permeability))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            radius,
            current,
            permeability,
            turns,
            length,
            loops,
        })
    }

    /// Turn radius [m]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed current [A]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Permeability [T·m/A]
    pub fn permeability(&self) -> f64 {
        self.permeability
    }

    /// Number of turns
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Axial length [m]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Constituent loops, ascending axial position
    pub fn loops(&self) -> &[CurrentLoop] {
        &self.loops
    }

    /// Axial positions of the turns [m], ascending
    pub fn axial_positions(&self) -> Vec<f64> {
        self.loops.iter().map(CurrentLoop::axial_position).collect()
    }

    /// Field vector at a single point (global coordinates)
    ///
    /// Sum of the constituent loop fields, accumulated in ascending turn
    /// index order.
    ///
    /// # Errors
    ///
    /// Propagates the first loop error ([`FieldError::Singularity`] when
    /// the point lies on any turn's conductor).
    pub fn field_at(&self, point: &Point3, subintervals: usize) -> Result<FieldVector, FieldError> {
        let mut total = FieldVector::zeros();
        for coil in &self.loops {
            total += coil.field_at(point, subintervals)?;
        }
        Ok(total)
    }

    /// Field over a full 3D grid
    ///
    /// Computes each turn's [`FieldVolume`] (itself an embarrassingly
    /// parallel grid map, see [`CurrentLoop::compute_field`]) and
    /// superposes them in ascending turn index order — the documented,
    /// fixed reduction order that keeps results bit-reproducible.
    ///
    /// # Cost
    ///
    /// O(turns·|X|·|Y|·|Z|·subintervals) kernel evaluations.
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
        let mut total = FieldVolume::zeros(grid.shape());
        for coil in &self.loops {
            total += coil.compute_field(grid, subintervals)?;
        }
        Ok(total)
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
        assert!(Solenoid::new(0.008, 0.8, MU0, 20, 0.025).is_ok());
        assert!(Solenoid::new(0.008, 0.8, MU0, 0, 0.025).is_err());
        assert!(Solenoid::new(0.008, 0.8, MU0, 1, 0.025).is_err());
        assert!(Solenoid::new(0.008, 0.8, MU0, 1, 0.0).is_ok());
        assert!(Solenoid::new(0.008, 0.8, MU0, 2, -0.01).is_err());
        assert!(Solenoid::new(0.0, 0.8, MU0, 20, 0.025).is_err());
        assert!(Solenoid::new(0.008, 0.8, 0.0, 20, 0.025).is_err());
    }

    #[test]
    fn test_turn_positions_span_length() {
        let solenoid = Solenoid::new(0.008, 0.8, MU0, 5, 0.02).unwrap();
        let positions = solenoid.axial_positions();

        assert_eq!(positions.len(), 5);
        assert_eq!(positions[0], 0.0);
        assert!((positions[4] - 0.02).abs() < 1e-15);
        assert!((positions[1] - 0.005).abs() < 1e-15);

        // Positions ascend
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_single_turn_equals_single_loop() {
        // Degenerate solenoid: one turn, zero length == one loop at z = 0.
        let solenoid = Solenoid::new(0.02, 0.3, MU0, 1, 0.0).unwrap();
        let coil = CurrentLoop::new(0.0, 0.02, 0.3, MU0).unwrap();
        let grid = FieldGrid::uniform((-0.01, 0.01, 3), (-0.01, 0.01, 3), (0.01, 0.05, 3)).unwrap();

        let from_solenoid = solenoid.compute_field(&grid, 100).unwrap();
        let from_loop = coil.compute_field(&grid, 100).unwrap();

        // Identical up to the zero-volume seed of the superposition sum
        // (0 + x == x exactly for finite x).
        assert_eq!(from_solenoid, from_loop);
    }

    #[test]
    fn test_two_turns_equal_sum_of_loops() {
        let solenoid = Solenoid::new(0.008, 0.8, MU0, 2, 0.025).unwrap();
        let bottom = CurrentLoop::new(0.0, 0.008, 0.8, MU0).unwrap();
        let top = CurrentLoop::new(0.025, 0.008, 0.8, MU0).unwrap();
        let grid = FieldGrid::new(vec![0.0], vec![0.0, 0.003], vec![0.0125]).unwrap();

        let combined = solenoid.compute_field(&grid, 100).unwrap();
        let manual = bottom.compute_field(&grid, 100).unwrap()
            + top.compute_field(&grid, 100).unwrap();

        // Same loops, same ascending accumulation order
        let b = combined.get(0, 1, 0).unwrap();
        let m = manual.get(0, 1, 0).unwrap();
        assert_eq!(b, m);
    }

    #[test]
    fn test_compute_field_idempotent() {
        let solenoid = Solenoid::new(0.008, 0.8, MU0, 4, 0.025).unwrap();
        let grid = FieldGrid::new(vec![0.0], vec![0.0, 0.04], vec![0.0125]).unwrap();

        let a = solenoid.compute_field(&grid, 50).unwrap();
        let b = solenoid.compute_field(&grid, 50).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_field_at_matches_compute_field() {
        let solenoid = Solenoid::new(0.008, 0.8, MU0, 3, 0.025).unwrap();
        let grid = FieldGrid::new(vec![0.0], vec![0.01], vec![0.02]).unwrap();

        let volume = solenoid.compute_field(&grid, 80).unwrap();
        let point = solenoid
            .field_at(&Point3::new(0.0, 0.01, 0.02), 80)
            .unwrap();

        assert_eq!(volume.get(0, 0, 0), Some(&point));
    }
}
