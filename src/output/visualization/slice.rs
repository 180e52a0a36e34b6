//! Plane-slice rendering (magnitude heatmap + quiver overlay)
//!
//! Renders the (y, z) plane of a [`FieldVolume`] at a fixed X index:
//!
//! 1. **Heatmap** — one filled rectangle per lattice cell, colored by the
//!    field magnitude |B| through the configured linear ramp
//! 2. **Quiver** — unit-vector arrows showing the in-plane (By, Bz)
//!    direction, one per `quiver_stride` cells
//!
//! The plane is drawn in logical (y, z) coordinates with ordinary axis
//! orientation; there is no image-style reversed axis.
//!
//! # Usage
//!
//! ```rust,ignore
//! use biot_rs::output::visualization::plot_slice_x;
//!
//! let volume = coil.compute_field(&grid, 100)?;
//! plot_slice_x(&volume, &grid, 0, "loop_field.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use crate::field::{FieldGrid, FieldVector, FieldVolume};
use super::config::PlotConfig;

// =================================================================================================
// Core Plotting Function
// =================================================================================================

/// Plot the (y, z) plane at X index `x_index`
///
/// # Arguments
///
/// * `volume` - Computed field volume
/// * `grid` - The grid the volume was computed on (supplies coordinates)
/// * `x_index` - Index into the grid's X samples selecting the plane
/// * `output_path` - Path to save the plot (PNG, or SVG by extension)
/// * `config` - Optional plot configuration
///
/// # Errors
///
/// - Volume and grid shapes differ, or `x_index` is out of range
/// - The sliced axes are not uniformly spaced (pixel mapping needs equal
///   steps; this is the renderer's constraint, not the core's)
/// - Fewer than 2 samples on Y or Z (no drawable area)
/// - Backend I/O failures
///
/// # Example
///
/// ```rust,ignore
/// plot_slice_x(&volume, &grid, 0, "slice.png", None)?;
/// ```
pub fn plot_slice_x(
    volume: &FieldVolume,
    grid: &FieldGrid,
    x_index: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let (nx, ny, nz) = volume.shape();

    if volume.shape() != grid.shape() {
        return Err(format!(
            "volume shape {:?} does not match grid shape {:?}",
            volume.shape(),
            grid.shape()
        )
        .into());
    }
    if x_index >= nx {
        return Err(format!("x index {} out of range ({} X samples)", x_index, nx).into());
    }
    if ny < 2 || nz < 2 {
        return Err("slice plane needs at least 2 samples on Y and Z".to_string().into());
    }

    // Pixel-index mapping requires equal steps along the sliced axes.
    let span = (grid.ys()[ny - 1] - grid.ys()[0])
        .abs()
        .max((grid.zs()[nz - 1] - grid.zs()[0]).abs());
    if !grid.is_uniform(span * 1e-9 + 1e-15) {
        return Err("slice plotting requires uniformly spaced grid samples"
            .to_string()
            .into());
    }

    // Collect the plane and its normalization before touching any backend.
    let plane: Vec<Vec<FieldVector>> = {
        let view = volume.plane_x(x_index)?;
        (0..ny)
            .map(|j| (0..nz).map(|k| view[(j, k)]).collect())
            .collect()
    };
    let max_magnitude = plane
        .iter()
        .flatten()
        .map(|v| v.norm())
        .fold(0.0, f64::max);

    // Create default config if needed (avoid temporary value)
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    // Determine backend from the file extension and plot
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_slice_impl(backend, &plane, grid.ys(), grid.zs(), max_magnitude, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_slice_impl(backend, &plane, grid.ys(), grid.zs(), max_magnitude, config)
        }
    }
}

/// Implementation for slice plotting with a concrete backend
fn plot_slice_impl<DB: DrawingBackend>(
    backend: DB,
    plane: &[Vec<FieldVector>],
    ys: &[f64],
    zs: &[f64],
    max_magnitude: f64,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let dy = ys[1] - ys[0];
    let dz = zs[1] - zs[0];

    let y_range = (ys[0] - dy / 2.0)..(ys[ys.len() - 1] + dy / 2.0);
    let z_range = (zs[0] - dz / 2.0)..(zs[zs.len() - 1] + dz / 2.0);

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(y_range, z_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .draw()?;

    // ====== Heatmap: one rectangle per cell ======

    // All-zero slices (max_magnitude == 0) normalize to the ramp floor.
    let scale = if max_magnitude > 0.0 { max_magnitude } else { 1.0 };

    chart.draw_series(plane.iter().enumerate().flat_map(|(j, column)| {
        column.iter().enumerate().map(move |(k, v)| {
            let color = config.magnitude_color(v.norm() / scale);
            Rectangle::new(
                [
                    (ys[j] - dy / 2.0, zs[k] - dz / 2.0),
                    (ys[j] + dy / 2.0, zs[k] + dz / 2.0),
                ],
                color.filled(),
            )
        })
    }))?;

    // ====== Quiver overlay: in-plane unit vectors ======

    if config.show_quiver {
        let stride = config.quiver_stride.max(1);
        // Arrow length scales with the cell spacing so arrows never
        // overlap at stride 1.
        let arrow = 0.8 * (stride as f64) * dy.abs().min(dz.abs());

        for (j, column) in plane.iter().enumerate().step_by(stride) {
            for (k, v) in column.iter().enumerate().step_by(stride) {
                let magnitude = v.norm();
                if magnitude == 0.0 {
                    continue;
                }

                // Normalize by the full 3D magnitude: in-plane arrows
                // shorten where the field points out of the plane.
                let uy = v.y / magnitude;
                let uz = v.z / magnitude;

                let (cy, cz) = (ys[j], zs[k]);
                let tail = (cy - uy * arrow / 2.0, cz - uz * arrow / 2.0);
                let head = (cy + uy * arrow / 2.0, cz + uz * arrow / 2.0);

                chart.draw_series(std::iter::once(PathElement::new(
                    vec![tail, head],
                    config.quiver_color,
                )))?;
                chart.draw_series(std::iter::once(Circle::new(
                    head,
                    2,
                    config.quiver_color.filled(),
                )))?;
            }
        }
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
