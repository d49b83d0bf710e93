//! # Lateral Face Stitcher
//!
//! Connects a bottom ring to a top ring with two triangles per side.

use crate::mesh::Mesh;

/// Emits the side wall between two rings of equal length.
///
/// For each `i` with `j = (i + 1) % sides` the quad is split into
/// `(bottom[i], top[i], bottom[j])` and `(bottom[j], top[i], top[j])`.
/// The last side wraps back to index 0, so no seam vertices are duplicated.
pub fn stitch_lateral(mesh: &mut Mesh, bottom: &[u32], top: &[u32]) {
    debug_assert_eq!(bottom.len(), top.len());
    let sides = bottom.len();

    for i in 0..sides {
        let j = (i + 1) % sides;

        let b0 = bottom[i];
        let t0 = top[i];
        let b1 = bottom[j];
        let t1 = top[j];

        mesh.add_triangle(b0, t0, b1);
        mesh.add_triangle(b1, t0, t1);
    }
}
