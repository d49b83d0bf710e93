//! # Segments and Stack Configuration
//!
//! A stack is an ordered list of frustum segments sharing one radial side
//! count. Segment `i` starts where segment `i - 1` ends along the Y axis.

use crate::error::{MeshError, MeshResult};
use config::constants::{
    sides_in_range, DEFAULT_SEGMENT_HEIGHT, DEFAULT_SEGMENT_R1, DEFAULT_SEGMENT_R2,
};
use serde::{Deserialize, Serialize};

/// One stacked frustum layer.
///
/// `height <= 0` and negative radii are accepted and produce inverted or
/// degenerate geometry rather than an error.
///
/// # Example
///
/// ```rust
/// use frustum_mesh::Segment;
///
/// let seg = Segment::new(2.0, 1.0, 0.5);
/// assert!(seg.is_finite());
/// assert!(!seg.is_cylinder());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Extent along the stacking axis
    pub height: f64,
    /// Bottom radius
    pub r1: f64,
    /// Top radius
    pub r2: f64,
}

impl Default for Segment {
    fn default() -> Self {
        Self::new(DEFAULT_SEGMENT_HEIGHT, DEFAULT_SEGMENT_R1, DEFAULT_SEGMENT_R2)
    }
}

impl Segment {
    /// Creates a segment from its height and bottom/top radii.
    pub const fn new(height: f64, r1: f64, r2: f64) -> Self {
        Self { height, r1, r2 }
    }

    /// Builds a segment from a `[height, r1, r2]` triple.
    pub fn from_triple(values: [f64; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }

    /// Returns true when height and both radii are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.height.is_finite() && self.r1.is_finite() && self.r2.is_finite()
    }

    /// Returns true when both radii are equal.
    #[inline]
    pub fn is_cylinder(&self) -> bool {
        self.r1 == self.r2
    }

    /// Horizontal and vertical components of the lateral surface normal.
    ///
    /// Returns `(n_h, n_v)` where `n_h = h / L` and `n_v = (r1 - r2) / L`
    /// with `L = sqrt((r1 - r2)^2 + h^2)`. A zero-length slope (zero height,
    /// equal radii) uses `L = 1`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use frustum_mesh::Segment;
    ///
    /// let (n_h, n_v) = Segment::new(4.0, 1.0, 1.0).slope_normal();
    /// assert_eq!((n_h, n_v), (1.0, 0.0));
    /// ```
    pub fn slope_normal(&self) -> (f64, f64) {
        let delta_r = self.r1 - self.r2;
        let mut length = (delta_r * delta_r + self.height * self.height).sqrt();
        if length == 0.0 {
            length = 1.0;
        }
        (self.height / length, delta_r / length)
    }
}

/// Validated input for the mesh builder.
///
/// Constructed through [`StackConfig::new`], which enforces the side-count
/// range and a non-empty list of finite segments, or through
/// [`crate::validate`] which substitutes defaults instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackConfig {
    sides: u32,
    segments: Vec<Segment>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            sides: config::constants::DEFAULT_SIDES,
            segments: vec![Segment::default()],
        }
    }
}

impl StackConfig {
    /// Creates a configuration, rejecting input the builder cannot handle.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidSides`] when `sides` is outside `3..=36`
    /// - [`MeshError::EmptyStack`] when `segments` is empty
    /// - [`MeshError::NonFiniteSegment`] when a segment holds NaN or infinity
    ///
    /// # Example
    ///
    /// ```rust
    /// use frustum_mesh::{Segment, StackConfig};
    ///
    /// let config = StackConfig::new(4, vec![Segment::new(2.0, 1.0, 1.0)]).unwrap();
    /// assert_eq!(config.sides(), 4);
    /// assert!(StackConfig::new(2, vec![Segment::default()]).is_err());
    /// ```
    pub fn new(sides: u32, segments: Vec<Segment>) -> MeshResult<Self> {
        if !sides_in_range(sides as f64) {
            return Err(MeshError::invalid_sides(sides));
        }
        if segments.is_empty() {
            return Err(MeshError::EmptyStack);
        }
        if let Some(index) = segments.iter().position(|s| !s.is_finite()) {
            return Err(MeshError::non_finite(
                index,
                format!("{:?}", segments[index]),
            ));
        }
        Ok(Self { sides, segments })
    }

    /// Wraps input that validation has already brought into range.
    pub(crate) fn from_validated(sides: u32, segments: Vec<Segment>) -> Self {
        debug_assert!(sides_in_range(sides as f64));
        debug_assert!(!segments.is_empty());
        debug_assert!(segments.iter().all(Segment::is_finite));
        Self { sides, segments }
    }

    /// Number of radial sides per ring.
    #[inline]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Segments in stacking order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sum of all segment heights, i.e. the Y coordinate of the top cap.
    pub fn total_height(&self) -> f64 {
        self.segments.iter().map(|s| s.height).sum()
    }

    /// Number of vertices the builder will emit.
    pub fn expected_vertex_count(&self) -> usize {
        2 * self.sides as usize * self.segments.len() + 2
    }

    /// Number of triangles the builder will emit.
    pub fn expected_triangle_count(&self) -> usize {
        let n = self.sides as usize;
        2 * n * self.segments.len() + 2 * n
    }
}
