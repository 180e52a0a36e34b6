//! Output module for computed field volumes
//!
//! This module provides tools to output [`crate::field::FieldVolume`]
//! results in various formats:
//! - **Visualization**: PNG/SVG plane-slice plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Slice plots (heatmap + quiver)
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── slice.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use biot_rs::output::{plot_slice_x, PlotConfig};
//!
//! // Magnitude heatmap + quiver overlay of the x = xs[0] plane
//! plot_slice_x(&volume, &grid, 0, "field.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use biot_rs::output::{export_axial_profile_csv, CsvConfig};
//!
//! // On-axis profile B(z) at (xs[i], ys[j])
//! export_axial_profile_csv(&volume, &grid, 0, 0, "axis.csv", None)?;
//! ```
//!
//! # Design Notes
//!
//! The output layer is a **consumer** of the core: it reads a finished
//! `FieldVolume` plus its originating `FieldGrid` and never feeds anything
//! back. The one constraint it imposes is its own: pixel-index mapping in
//! the slice plots needs uniformly spaced grid samples, which the core
//! itself never requires.

pub mod visualization;
pub mod export;

// Re-export commonly used items for convenience
pub use visualization::{
    plot_slice_x,
    PlotConfig,
};

pub use export::{
    export_axial_profile_csv,
    export_slice_csv,
    CsvConfig,
    CsvMetadata,
};
