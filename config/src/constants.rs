//! # Configuration Constants
//!
//! Centralized constants for the frustum mesh generator.
//!
//! ## Categories
//!
//! - **Precision**: Tolerance for unit-length normals
//! - **Resolution**: Radial side-count bounds and default
//! - **Fallback Geometry**: The segment used when no valid segment is given
//! - **Output**: Default OBJ header, object name and file path

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance used when checking that a normal has unit length.
///
/// Ring normals go through `cos`/`sin` and a square root before being
/// rescaled, so their length is only 1.0 up to rounding.
pub const NORMAL_TOLERANCE: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Smallest accepted number of radial sides (a triangular prism).
pub const MIN_SIDES: u32 = 3;

/// Largest accepted number of radial sides.
pub const MAX_SIDES: u32 = 36;

/// Side count substituted when the requested one is missing, non-finite or
/// outside [`MIN_SIDES`]..=[`MAX_SIDES`].
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SIDES, MAX_SIDES, MIN_SIDES};
///
/// assert!((MIN_SIDES..=MAX_SIDES).contains(&DEFAULT_SIDES));
/// ```
pub const DEFAULT_SIDES: u32 = 8;

// =============================================================================
// FALLBACK GEOMETRY
// =============================================================================

/// Height of the fallback segment.
pub const DEFAULT_SEGMENT_HEIGHT: f64 = 6.0;

/// Bottom radius of the fallback segment.
pub const DEFAULT_SEGMENT_R1: f64 = 1.0;

/// Top radius of the fallback segment.
pub const DEFAULT_SEGMENT_R2: f64 = 0.8;

/// Number of values that make up one segment: height, bottom radius, top
/// radius.
pub const SEGMENT_ARITY: usize = 3;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Comment written on the first line of every OBJ file.
pub const DEFAULT_HEADER: &str = "Stacked frustum mesh";

/// Object name written on the `o` line.
pub const DEFAULT_OBJECT_NAME: &str = "building";

/// File the command line writes to when no `--output` is given.
pub const DEFAULT_OUTPUT_PATH: &str = "building.obj";

/// Default `RUST_LOG` filter for the command line.
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns true when `value` is a finite side count within
/// [`MIN_SIDES`]..=[`MAX_SIDES`].
///
/// Fractional values inside the range are accepted; callers truncate them.
///
/// # Example
///
/// ```rust
/// use config::constants::sides_in_range;
///
/// assert!(sides_in_range(3.0));
/// assert!(sides_in_range(36.0));
/// assert!(!sides_in_range(2.0));
/// assert!(!sides_in_range(f64::NAN));
/// ```
#[inline]
pub fn sides_in_range(value: f64) -> bool {
    value.is_finite() && value >= MIN_SIDES as f64 && value <= MAX_SIDES as f64
}

/// Checks whether a vector length is 1.0 within [`NORMAL_TOLERANCE`].
///
/// # Example
///
/// ```rust
/// use config::constants::is_unit_length;
///
/// assert!(is_unit_length(1.0 + 1e-12));
/// assert!(!is_unit_length(0.0));
/// assert!(!is_unit_length(f64::NAN));
/// ```
#[inline]
pub fn is_unit_length(length: f64) -> bool {
    (length - 1.0).abs() < NORMAL_TOLERANCE
}
