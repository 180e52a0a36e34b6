//! Example: Finite Solenoid - Superposition of Current Loops
//!
//! Models a short solenoid as N evenly spaced current loops and computes
//! the total field by superposition:
//!
//! - Point probes: B at the midplane, on the axis and outside the bore
//! - Axial profile: B_z(z) through the bore, exported to CSV
//! - Visualization: a cross-section slice plot of the x = 0 plane
//!
//! **Physical System**:
//! - Solenoid of 20 turns, radius 8 mm, length 25 mm
//! - Ends at z = 0 and z = L, axis along z
//! - Current 0.8 A per turn, vacuum permeability
//!
//! **Parameters**:
//! - R = 0.008 m (turn radius)
//! - I = 0.8 A (current)
//! - N = 20 (turns)
//! - L = 0.025 m (length)
//! - µ₀ = 4π×10⁻⁷ T·m/A
//! - n = 100 (quadrature subintervals)

use biot_rs::{
    field::{FieldGrid, Point3},
    output::{
        export_axial_profile_csv, plot_slice_x, CsvConfig, CsvMetadata, PlotConfig,
    },
    sources::Solenoid,
};

use std::f64::consts::PI;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Solenoid - Superposition Field Study");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Physical parameters ======

    let mu0 = 4e-7 * PI; // Vacuum permeability [T·m/A]
    let radius = 0.008;  // Turn radius [m]
    let current = 0.8;   // Current per turn [A]
    let turns = 20;      // Number of turns
    let length = 0.025;  // Solenoid length [m]
    let subintervals = 100;

    println!("Solenoid Parameters:");
    println!("  R (radius)       : {} m", radius);
    println!("  I (current)      : {} A", current);
    println!("  N (turns)        : {}", turns);
    println!("  L (length)       : {} m", length);
    println!("  µ₀ (permeability): {:e} T·m/A", mu0);
    println!("  n (subintervals) : {}\n", subintervals);

    let solenoid = Solenoid::new(radius, current, mu0, turns, length)?;
    println!(
        "Turn spacing: {:.6} m ({} loops from z = 0 to z = {})\n",
        length / ((turns - 1) as f64),
        solenoid.loops().len(),
        length
    );

    // ====== Temporary directory ======

    let tmp_dir = std::env::temp_dir();

    // =============================================================================================
    // Point probes at the midplane z = L/2
    // =============================================================================================

    println!("═══════════════════════════════════════════════════════");
    println!("  Midplane Probes: B(0, y, L/2)");
    println!("═══════════════════════════════════════════════════════\n");

    println!(
        "{:>8} {:>14} {:>14} {:>14} {:>14}",
        "y (m)", "Bx (µT)", "By (µT)", "Bz (µT)", "|B| (µT)"
    );
    println!("{:-<68}", "");

    let start = Instant::now();

    for y in [0.0, 0.04] {
        let point = Point3::new(0.0, y, length / 2.0);
        let b = solenoid.field_at(&point, subintervals)?;

        println!(
            "{:>8.3} {:>14.6} {:>14.6} {:>14.6} {:>14.6}",
            y,
            b.x * 1e6,
            b.y * 1e6,
            b.z * 1e6,
            b.norm() * 1e6
        );
    }

    println!("\nProbes completed in {:.3} s", start.elapsed().as_secs_f64());

    // Sanity check: the ideal infinite solenoid gives B = µ₀·I·N/L inside
    let ideal = mu0 * current * (turns as f64) / length;
    println!(
        "Infinite-solenoid estimate µ₀IN/L = {:.6} µT (finite bore reads lower)",
        ideal * 1e6
    );

    // =============================================================================================
    // Axial profile export
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Axial Profile: B(0, 0, z), z ∈ [-L, 2L]");
    println!("═══════════════════════════════════════════════════════\n");

    let profile_grid = FieldGrid::uniform(
        (0.0, 0.0, 1),
        (0.0, 0.0, 1),
        (-length, 2.0 * length, 61),
    )?;

    let start = Instant::now();
    let profile = solenoid.compute_field(&profile_grid, subintervals)?;
    println!(
        "Profile ({} samples) computed in {:.3} s",
        profile_grid.zs().len(),
        start.elapsed().as_secs_f64()
    );

    let csv_path = tmp_dir.join("solenoid_axis.csv");
    let metadata = CsvMetadata::from_solenoid(radius, current, turns, length, subintervals);
    let csv_config = CsvConfig::default().with_metadata(metadata);
    export_axial_profile_csv(
        &profile,
        &profile_grid,
        0,
        0,
        csv_path.to_str().unwrap(),
        Some(&csv_config),
    )?;
    println!("Axial profile CSV : {:?}", csv_path);

    // =============================================================================================
    // Cross-section plot
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Generating Cross-Section Plot");
    println!("═══════════════════════════════════════════════════════\n");

    // x = 0 plane through the bore; y samples avoid y = ±R where the grid
    // would intersect the conductors.
    let grid = FieldGrid::uniform(
        (0.0, 0.0, 1),
        (-0.015, 0.015, 21),
        (-0.01, 0.035, 31),
    )?;

    let start = Instant::now();
    let volume = solenoid.compute_field(&grid, subintervals)?;
    println!(
        "Grid {:?} computed in {:.3} s",
        grid.shape(),
        start.elapsed().as_secs_f64()
    );
    println!("Max |B| in slice: {:.6e} T", volume.max_magnitude());

    let plot_path = tmp_dir.join("solenoid_slice.png");
    let config = PlotConfig::default()
        .titled("Solenoid cross-section (x = 0)")
        .quiver_every(2);
    plot_slice_x(&volume, &grid, 0, plot_path.to_str().unwrap(), Some(&config))?;
    println!("Slice plot : {:?}", plot_path);

    Ok(())
}
