//! Visualization module for computed field volumes
//!
//! This module renders plane slices of a 3D field using the `plotters`
//! library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration ([`PlotConfig`])
//! - **slice**: Fixed-X plane rendering — magnitude heatmap with a
//!   unit-vector quiver overlay
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use biot_rs::output::visualization::{plot_slice_x, PlotConfig};
//!
//! let volume = solenoid.compute_field(&grid, 100)?;
//!
//! // Default styling
//! plot_slice_x(&volume, &grid, 0, "solenoid.png", None)?;
//!
//! // Custom styling
//! let mut config = PlotConfig::default();
//! config.title = "Solenoid cross-section".to_string();
//! config.quiver_stride = 2;
//! plot_slice_x(&volume, &grid, 0, "solenoid.svg", Some(&config))?;
//! ```
//!
//! # Uniform Spacing
//!
//! The heatmap maps lattice indices to equal-sized pixels, so the sliced
//! axes must be uniformly spaced. This is a constraint of the renderer,
//! not of the field computation; non-uniform grids are rejected here with
//! an error.

pub mod config;
pub mod slice;

pub use config::PlotConfig;

pub use slice::plot_slice_x;
