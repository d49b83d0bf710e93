//! # Ring Generator
//!
//! Places `sides` vertices evenly around the Y axis at a fixed height.

use crate::mesh::Mesh;
use crate::segment::Segment;
use glam::DVec3;
use std::f64::consts::TAU;

/// Angle of ring vertex `i`: `2π·i/sides`.
#[inline]
pub fn ring_angle(i: u32, sides: u32) -> f64 {
    TAU * i as f64 / sides as f64
}

/// Lateral normal at angle `theta` for slope components `(n_h, n_v)`.
///
/// Not normalized; [`Mesh`] normalizes on insertion.
#[inline]
pub fn lateral_normal((n_h, n_v): (f64, f64), theta: f64) -> DVec3 {
    DVec3::new(n_h * theta.cos(), n_v, n_h * theta.sin())
}

/// Emits one ring and returns its vertex indices in angular order.
///
/// # Arguments
///
/// * `sides` - Number of vertices around the ring
/// * `radius` - Distance from the Y axis
/// * `y` - Height of the ring
/// * `slope` - `(n_h, n_v)` shared by every vertex of the ring
pub fn emit_ring(mesh: &mut Mesh, sides: u32, radius: f64, y: f64, slope: (f64, f64)) -> Vec<u32> {
    (0..sides)
        .map(|i| {
            let theta = ring_angle(i, sides);
            let position = DVec3::new(theta.cos() * radius, y, theta.sin() * radius);
            mesh.add_vertex(position, lateral_normal(slope, theta))
        })
        .collect()
}

/// Emits the bottom ring (radius `r1` at `base`) and top ring (radius `r2`
/// at `base + height`) of a segment.
///
/// Both rings carry the segment's slope normal.
pub fn emit_segment_rings(
    mesh: &mut Mesh,
    sides: u32,
    segment: &Segment,
    base: f64,
) -> (Vec<u32>, Vec<u32>) {
    let slope = segment.slope_normal();
    let bottom = emit_ring(mesh, sides, segment.r1, base, slope);
    let top = emit_ring(mesh, sides, segment.r2, base + segment.height, slope);
    (bottom, top)
}
