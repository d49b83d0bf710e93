//! # Mesh Data Structure
//!
//! Vertices, one normal per vertex, and triangle faces.
//!
//! Face indices are **0-based** into the vertex list. The OBJ exporter adds
//! one on output; nothing else in the crate sees 1-based indices.

use config::constants::is_unit_length;
use glam::DVec3;

/// A triangle mesh with per-vertex normals.
///
/// Normals are stored parallel to vertices: `normals()[i]` belongs to
/// `vertices()[i]`. Meshes are produced by
/// [`StackBuilder`](crate::stack::StackBuilder) and are read-only to
/// callers.
///
/// # Example
///
/// ```rust
/// use frustum_mesh::{build_stack, StackConfig};
///
/// let mesh = build_stack(&StackConfig::default());
/// assert_eq!(mesh.vertex_count(), mesh.normals().len());
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Unit normals, one per vertex
    normals: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle, 0-based)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex with its normal and returns the vertex index.
    ///
    /// The normal is scaled to unit length; a zero vector is kept as is.
    pub(crate) fn add_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(unit_or_zero(normal));
        index
    }

    /// Adds a triangle by vertex indices.
    pub(crate) fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the normal at the given index.
    #[inline]
    pub fn normal(&self, index: u32) -> DVec3 {
        self.normals[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Geometric normal of a triangle from its winding (not normalized).
    ///
    /// Points to the side the triangle faces; zero for degenerate triangles.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangles[index];
        let v0 = self.vertex(a);
        (self.vertex(b) - v0).cross(self.vertex(c) - v0)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Returns true when every stored normal has unit length.
    pub fn normals_are_unit(&self) -> bool {
        self.normals.iter().all(|n| is_unit_length(n.length()))
    }

    /// Validates the mesh for structural correctness.
    ///
    /// Checks:
    /// - One normal per vertex
    /// - All triangle indices are in range
    /// - No triangle repeats an index
    ///
    /// Zero-area triangles are allowed: cones and zero-height segments
    /// produce them legitimately.
    pub fn validate(&self) -> bool {
        if self.normals.len() != self.vertices.len() {
            return false;
        }

        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        })
    }
}

fn unit_or_zero(v: DVec3) -> DVec3 {
    let mut len = v.length();
    if len == 0.0 {
        len = 1.0;
    }
    v / len
}
