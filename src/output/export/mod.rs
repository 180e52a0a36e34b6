//! Export module for computed field volumes
//!
//! # Architecture
//!
//! Each format lives in its own sub-module. Adding a new format means
//! adding a file, without ever modifying existing code.
//!
//! # Available formats
//!
//! | Format  | Module          | Version |
//! |---------|-----------------|---------|
//! | CSV     | [`csv`]         | v0.1.0  |
//! | VTK     | `vtk` (future)  | v0.2.0  |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use biot_rs::output::export::{export_axial_profile_csv, export_slice_csv};
//!
//! // On-axis profile B(z) along (xs[0], ys[0])
//! export_axial_profile_csv(&volume, &grid, 0, 0, "axis.csv", None)?;
//!
//! // Full fixed-X plane, one row per (j, k) cell
//! export_slice_csv(&volume, &grid, 0, "slice.csv", None)?;
//! ```

pub mod csv;

// Re-export the most commonly used items at the module level so users can write:
//   use biot_rs::output::export::{export_axial_profile_csv, CsvConfig};
// instead of the full sub-module path.
pub use csv::{export_axial_profile_csv, export_slice_csv, CsvConfig, CsvMetadata};
