//! # Stack Assembler
//!
//! Builds the mesh of a stacked frustum solid from a [`StackConfig`].
//!
//! ## Emission Order
//!
//! ```text
//! for each segment s (base height accumulates from 0):
//!     bottom ring   (sides vertices, radius r1)
//!     top ring      (sides vertices, radius r2)
//!     lateral faces (2 * sides triangles)
//!     bottom cap    (first segment only: 1 vertex, sides triangles)
//!     top cap       (last segment only: 1 vertex, sides triangles)
//! ```
//!
//! The order fixes the vertex numbering that the OBJ exporter mirrors.
//! Boundaries between segments get no cap and no connecting faces, so a
//! change of radius leaves an open seam.

pub mod cap;
pub mod ring;
pub mod stitch;

#[cfg(test)]
mod tests;

use crate::mesh::Mesh;
use crate::segment::{Segment, StackConfig};
use cap::{emit_cap, CapSide};
use ring::emit_segment_rings;
use stitch::stitch_lateral;

/// Owns the state of one mesh assembly pass.
///
/// # Example
///
/// ```rust
/// use frustum_mesh::{Segment, StackBuilder, StackConfig};
///
/// let config = StackConfig::new(4, vec![Segment::new(2.0, 1.0, 1.0)]).unwrap();
/// let mesh = StackBuilder::new(&config).build();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
#[derive(Debug)]
pub struct StackBuilder<'a> {
    config: &'a StackConfig,
    mesh: Mesh,
    current_height: f64,
}

impl<'a> StackBuilder<'a> {
    /// Creates a builder with capacity for the whole stack.
    pub fn new(config: &'a StackConfig) -> Self {
        Self {
            config,
            mesh: Mesh::with_capacity(
                config.expected_vertex_count(),
                config.expected_triangle_count(),
            ),
            current_height: 0.0,
        }
    }

    /// Runs every segment in order and returns the finished mesh.
    pub fn build(mut self) -> Mesh {
        let last = self.config.segments().len().saturating_sub(1);
        for (index, segment) in self.config.segments().iter().enumerate() {
            self.push_segment(segment, index == 0, index == last);
        }

        log::debug!(
            "built stack: {} segments, {} vertices, {} triangles, height {}",
            self.config.segments().len(),
            self.mesh.vertex_count(),
            self.mesh.triangle_count(),
            self.current_height
        );
        self.mesh
    }

    fn push_segment(&mut self, segment: &Segment, first: bool, last: bool) {
        let sides = self.config.sides();
        let base = self.current_height;
        let (bottom, top) = emit_segment_rings(&mut self.mesh, sides, segment, base);

        stitch_lateral(&mut self.mesh, &bottom, &top);

        if first {
            emit_cap(&mut self.mesh, &bottom, 0.0, CapSide::Bottom);
        }
        if last {
            emit_cap(&mut self.mesh, &top, base + segment.height, CapSide::Top);
        }

        self.current_height += segment.height;
    }
}

/// Builds the mesh for a validated configuration.
///
/// Deterministic: the same configuration always yields the same mesh.
///
/// # Example
///
/// ```rust
/// use frustum_mesh::{build_stack, StackConfig};
///
/// // default: 8 sides, one segment {6, 1.0, 0.8}
/// let mesh = build_stack(&StackConfig::default());
/// assert_eq!(mesh.vertex_count(), 18);
/// assert_eq!(mesh.triangle_count(), 32);
/// ```
pub fn build_stack(config: &StackConfig) -> Mesh {
    StackBuilder::new(config).build()
}
