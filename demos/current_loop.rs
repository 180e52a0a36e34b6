//! Example: Single Current Loop - Kernel, Quadrature, and Closed Form
//!
//! Computes the magnetic field of a single circular current loop and
//! checks the numerical machinery against the analytic on-axis solution:
//!
//! - Kernel sampling: the integrand dB(θ) tabulated at 8 angles
//! - On-axis sweep: B(0, 0, z) by midpoint quadrature
//! - Validation: comparison against B_z = µ₀IR²/(2(R²+z²)^{3/2})
//! - Visualization: a cross-section slice plot of the x = 0 plane
//!
//! **Physical System**:
//! - Circular loop of radius 2 cm centered at the origin, axis along z
//! - Current 0.3 A, counter-clockwise seen from +z
//! - Vacuum permeability
//!
//! **Parameters**:
//! - R = 0.02 m (loop radius)
//! - I = 0.3 A (current)
//! - µ₀ = 4π×10⁻⁷ T·m/A
//! - n = 1000 (quadrature subintervals)

use biot_rs::{
    field::{kernel, FieldGrid, Point3},
    output::{plot_slice_x, PlotConfig},
    sources::CurrentLoop,
};

use std::f64::consts::PI;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Current Loop - Biot-Savart Field Study");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Physical parameters ======

    let mu0 = 4e-7 * PI; // Vacuum permeability [T·m/A]
    let radius = 0.02;   // Loop radius [m]
    let current = 0.3;   // Current [A]
    let subintervals = 1000;

    println!("Loop Parameters:");
    println!("  R (radius)       : {} m", radius);
    println!("  I (current)      : {} A", current);
    println!("  µ₀ (permeability): {:e} T·m/A", mu0);
    println!("  n (subintervals) : {}\n", subintervals);

    // ====== Temporary directory ======

    let tmp_dir = std::env::temp_dir();

    // =============================================================================================
    // Kernel sampling: dB(θ) at 8 angles, far on the axis
    // =============================================================================================

    println!("═══════════════════════════════════════════════════════");
    println!("  Integrand Samples at P = (0, 0, 10) m");
    println!("═══════════════════════════════════════════════════════\n");

    let far_point = Point3::new(0.0, 0.0, 10.0);

    println!(
        "{:>10} {:>16} {:>16} {:>16}",
        "θ (rad)", "dBx (×10⁻¹¹ T)", "dBy (×10⁻¹¹ T)", "dBz (×10⁻¹¹ T)"
    );
    println!("{:-<62}", "");

    for i in 0..8 {
        let theta = (i as f64) * 2.0 * PI / 8.0;
        let db = kernel::field_contribution(&far_point, radius, current, mu0, theta)?;
        println!(
            "{:>10.4} {:>16.6} {:>16.6} {:>16.6}",
            theta,
            db.x * 1e11,
            db.y * 1e11,
            db.z * 1e11
        );
    }

    // =============================================================================================
    // On-axis sweep: quadrature versus closed form
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  On-Axis Sweep: Quadrature vs Closed Form");
    println!("═══════════════════════════════════════════════════════\n");

    let coil = CurrentLoop::new(0.0, radius, current, mu0)?;

    println!(
        "{:>8} {:>16} {:>16} {:>12}",
        "z (m)", "Bz num (T)", "Bz exact (T)", "rel. error"
    );
    println!("{:-<56}", "");

    let start = Instant::now();

    for z in [-0.2, -0.1, 0.0, 0.1, 0.2] {
        let b = coil.field_at(&Point3::new(0.0, 0.0, z), subintervals)?;

        // B_z = µ₀IR² / (2(R² + z²)^{3/2}) on the axis
        let exact = mu0 * current * radius * radius
            / (2.0 * (radius * radius + z * z).powf(1.5));
        let rel = (b.z - exact).abs() / exact.abs();

        println!("{:>8.2} {:>16.6e} {:>16.6e} {:>12.2e}", z, b.z, exact, rel);
    }

    let elapsed = start.elapsed().as_secs_f64();
    println!("\nSweep completed in {:.3} s", elapsed);

    // =============================================================================================
    // Cross-section plot
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Generating Cross-Section Plot");
    println!("═══════════════════════════════════════════════════════\n");

    // x = 0 plane through the loop axis. Even sample counts keep every
    // sample off z = 0 and off y = ±R, so no grid point sits on the wire.
    let grid = FieldGrid::uniform(
        (0.0, 0.0, 1),
        (-0.05, 0.05, 20),
        (-0.05, 0.05, 20),
    )?;

    let start = Instant::now();
    let volume = coil.compute_field(&grid, 200)?;
    println!(
        "Grid {:?} computed in {:.3} s",
        grid.shape(),
        start.elapsed().as_secs_f64()
    );
    println!("Max |B| in slice: {:.6e} T", volume.max_magnitude());

    let plot_path = tmp_dir.join("current_loop_slice.png");
    let config = PlotConfig::default()
        .titled("Current loop cross-section (x = 0)")
        .quiver_every(2);
    plot_slice_x(&volume, &grid, 0, plot_path.to_str().unwrap(), Some(&config))?;
    println!("Slice plot : {:?}", plot_path);

    Ok(())
}
