//! # Cap Generator
//!
//! Closes the very bottom and very top of the stack with a triangle fan
//! around a center vertex on the Y axis.

use crate::mesh::Mesh;
use glam::DVec3;

/// Which end of the stack a cap closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapSide {
    /// Faces down (-Y), wound `(center, ring[i], ring[i+1])`
    Bottom,
    /// Faces up (+Y), wound `(center, ring[i+1], ring[i])`
    Top,
}

impl CapSide {
    /// Normal shared by the center vertex of this cap.
    pub fn normal(self) -> DVec3 {
        match self {
            CapSide::Bottom => DVec3::NEG_Y,
            CapSide::Top => DVec3::Y,
        }
    }
}

/// Emits a center vertex at `(0, y, 0)` and fans it to `ring`.
///
/// Returns the index of the center vertex.
pub fn emit_cap(mesh: &mut Mesh, ring: &[u32], y: f64, side: CapSide) -> u32 {
    let center = mesh.add_vertex(DVec3::new(0.0, y, 0.0), side.normal());
    let sides = ring.len();

    for i in 0..sides {
        let a = ring[i];
        let b = ring[(i + 1) % sides];
        match side {
            CapSide::Bottom => mesh.add_triangle(center, a, b),
            CapSide::Top => mesh.add_triangle(center, b, a),
        }
    }

    center
}
