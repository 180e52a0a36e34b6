//! CSV export functionality for computed field volumes
//!
//! This module writes field data to CSV (Comma-Separated Values) format,
//! which is compatible with Excel, Python pandas, MATLAB, and most data
//! analysis tools.
//!
//! # Features
//!
//! - **Axial profiles**: B(z) along one (x, y) column of the grid
//! - **Plane slices**: the full fixed-X plane, one row per (j, k) cell
//! - **Metadata support**: optional `#`-comment header with source parameters
//! - **Customizable**: delimiter, precision, column headers
//! - **Validation**: checks shapes, indices, and non-finite values
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use biot_rs::output::export::export_axial_profile_csv;
//!
//! let volume = coil.compute_field(&grid, 100)?;
//! export_axial_profile_csv(&volume, &grid, 0, 0, "axis.csv", None)?;
//! ```
//!
//! **Output** (`axis.csv`):
//! ```csv
//! z (m),Bx (T),By (T),Bz (T),|B| (T)
//! -0.100000,0.000000,0.000000,0.000009,0.000009
//! 0.000000,0.000000,0.000000,0.000024,0.000024
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use biot_rs::output::export::{export_axial_profile_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata {
//!     source_name: Some("Solenoid".to_string()),
//!     radius: Some(0.008),
//!     current: Some(0.8),
//!     turns: Some(20),
//!     length: Some(0.025),
//!     subintervals: Some(100),
//!     ..Default::default()
//! };
//!
//! let config = CsvConfig::default().with_metadata(metadata);
//! export_axial_profile_csv(&volume, &grid, 0, 0, "axis.csv", Some(&config))?;
//! ```
//!
//! **Output** (`axis.csv`):
//! ```csv
//! # Magnetic Field Data
//! # Generated: 2026-08-26T15:30:00Z
//! # Source: Solenoid
//! # Radius: 0.008 m
//! # Current: 0.8 A
//! # Turns: 20
//! # Length: 0.025 m
//! # Subintervals: 100
//! #
//! z (m),Bx (T),By (T),Bz (T),|B| (T)
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::field::{FieldGrid, FieldVolume};

// =================================================================================================
// Configuration Structures
// =================================================================================================

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `decimal_separator`: Decimal point character (default: '.')
/// - `precision`: Number of significant digits (default: 6)
/// - `include_metadata`: Add header comments with source info
/// - `metadata`: Source metadata to include
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 12,         // High precision
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of significant digits for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 significant digits)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are included in the header.
///
/// # Example
///
/// ```rust,ignore
/// let metadata = CsvMetadata {
///     source_name: Some("CurrentLoop".to_string()),
///     radius: Some(0.02),
///     current: Some(0.3),
///     subintervals: Some(1000),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Source name (e.g., "CurrentLoop", "Solenoid")
    pub source_name: Option<String>,

    /// Loop/turn radius (m)
    pub radius: Option<f64>,

    /// Signed current (A)
    pub current: Option<f64>,

    /// Permeability of the medium (T·m/A)
    pub permeability: Option<f64>,

    /// Number of turns (solenoids)
    pub turns: Option<usize>,

    /// Axial length (m, solenoids)
    pub length: Option<f64>,

    /// Quadrature subinterval count
    pub subintervals: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata for a single current loop
    pub fn from_loop(radius: f64, current: f64, subintervals: usize) -> Self {
        Self {
            source_name: Some("CurrentLoop".to_string()),
            radius: Some(radius),
            current: Some(current),
            subintervals: Some(subintervals),
            ..Default::default()
        }
    }

    /// Create metadata for a solenoid
    pub fn from_solenoid(
        radius: f64,
        current: f64,
        turns: usize,
        length: f64,
        subintervals: usize,
    ) -> Self {
        Self {
            source_name: Some("Solenoid".to_string()),
            radius: Some(radius),
            current: Some(current),
            turns: Some(turns),
            length: Some(length),
            subintervals: Some(subintervals),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Magnetic Field Data")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(source) = &metadata.source_name {
        writeln!(file, "# Source: {}", source)?;
    }
    if let Some(radius) = metadata.radius {
        writeln!(file, "# Radius: {} m", radius)?;
    }
    if let Some(current) = metadata.current {
        writeln!(file, "# Current: {} A", current)?;
    }
    if let Some(permeability) = metadata.permeability {
        writeln!(file, "# Permeability: {} T·m/A", permeability)?;
    }
    if let Some(turns) = metadata.turns {
        writeln!(file, "# Turns: {}", turns)?;
    }
    if let Some(length) = metadata.length {
        writeln!(file, "# Length: {} m", length)?;
    }
    if let Some(subintervals) = metadata.subintervals {
        writeln!(file, "# Subintervals: {}", subintervals)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
///
/// Uses scientific notation: field magnitudes routinely span from µT down
/// to rounding noise, and fixed-point formatting would flush small
/// components to zero.
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$e}", value, prec = config.precision);

    // Replace decimal separator if needed
    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Shared shape / finiteness validation for both exporters
fn validate_export(volume: &FieldVolume, grid: &FieldGrid) -> Result<(), Box<dyn Error>> {
    if volume.is_empty() {
        return Err("Empty data: field volume must not be empty".into());
    }
    if volume.shape() != grid.shape() {
        return Err(format!(
            "Shape mismatch: volume {:?} versus grid {:?}",
            volume.shape(),
            grid.shape()
        )
        .into());
    }
    if !volume.is_finite() {
        return Err("Invalid data: NaN or Inf detected in field volume".into());
    }
    Ok(())
}

// =================================================================================================
// Export Functions
// =================================================================================================

/// Export an axial field profile to CSV
///
/// Writes B(z) along the grid column at X index `x_index` and Y index
/// `y_index`: one row per Z sample with columns `z, Bx, By, Bz, |B|`.
///
/// # Arguments
///
/// * `volume` - Computed field volume
/// * `grid` - The grid the volume was computed on
/// * `x_index` - X index of the profile column
/// * `y_index` - Y index of the profile column
/// * `output_path` - Output file path
/// * `config` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - Empty volume, shape mismatch, or out-of-range indices
/// - NaN or Inf values in the volume
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_axial_profile_csv(&volume, &grid, 0, 0, "axis.csv", None)?;
/// ```
pub fn export_axial_profile_csv(
    volume: &FieldVolume,
    grid: &FieldGrid,
    x_index: usize,
    y_index: usize,
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    validate_export(volume, grid)?;

    let (nx, ny, nz) = volume.shape();
    if x_index >= nx || y_index >= ny {
        return Err(format!(
            "Index out of range: ({}, {}) in a {}x{} X-Y lattice",
            x_index, y_index, nx, ny
        )
        .into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    let d = config.delimiter;
    writeln!(file, "z (m){}Bx (T){}By (T){}Bz (T){}|B| (T)", d, d, d, d)?;

    // ============================= Write Data =============================

    for k in 0..nz {
        // Indices were range-checked above
        let b = volume
            .get(x_index, y_index, k)
            .ok_or("field volume cell unexpectedly missing")?;

        writeln!(
            file,
            "{}{}{}{}{}{}{}{}{}",
            format_number(grid.zs()[k], config),
            d,
            format_number(b.x, config),
            d,
            format_number(b.y, config),
            d,
            format_number(b.z, config),
            d,
            format_number(b.norm(), config)
        )?;
    }

    Ok(())
}

/// Export a fixed-X plane slice to CSV
///
/// Writes the full (y, z) plane at X index `x_index` in row-major (j, k)
/// order: one row per cell with columns `j, k, y, z, Bx, By, Bz, |B|`.
///
/// # Arguments
///
/// * `volume` - Computed field volume
/// * `grid` - The grid the volume was computed on
/// * `x_index` - X index selecting the plane
/// * `output_path` - Output file path
/// * `config` - Optional CSV configuration
///
/// # Errors
///
/// - Empty volume, shape mismatch, or `x_index` out of range
/// - NaN or Inf values in the volume
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_slice_csv(&volume, &grid, 0, "slice.csv", None)?;
/// ```
pub fn export_slice_csv(
    volume: &FieldVolume,
    grid: &FieldGrid,
    x_index: usize,
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    validate_export(volume, grid)?;

    let (nx, ny, nz) = volume.shape();
    if x_index >= nx {
        return Err(format!("X index {} out of range ({} samples)", x_index, nx).into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    let d = config.delimiter;
    writeln!(
        file,
        "j{}k{}y (m){}z (m){}Bx (T){}By (T){}Bz (T){}|B| (T)",
        d, d, d, d, d, d, d
    )?;

    // ============================= Write Data =============================

    for j in 0..ny {
        for k in 0..nz {
            let b = volume
                .get(x_index, j, k)
                .ok_or("field volume cell unexpectedly missing")?;

            writeln!(
                file,
                "{}{}{}{}{}{}{}{}{}{}{}{}{}{}{}",
                j,
                d,
                k,
                d,
                format_number(grid.ys()[j], config),
                d,
                format_number(grid.zs()[k], config),
                d,
                format_number(b.x, config),
                d,
                format_number(b.y, config),
                d,
                format_number(b.z, config),
                d,
                format_number(b.norm(), config)
            )?;
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
