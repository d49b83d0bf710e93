//! # Frustum Mesh
//!
//! Procedural meshes for stacked frustum solids: a column of segments,
//! each with its own height and bottom/top radius, sharing one radial side
//! count. The result carries per-vertex normals and can be written as
//! Wavefront OBJ.
//!
//! ## Architecture
//!
//! ```text
//! raw input ──validate──▶ StackConfig ──build_stack──▶ Mesh ──export::obj──▶ OBJ text
//! ```
//!
//! - [`validate`]: side count and numeric triples to a [`StackConfig`]
//! - [`stack`]: ring generator, lateral stitcher, caps, assembler
//! - [`export`]: OBJ serialization and file writing
//!
//! ## Usage
//!
//! ```rust
//! use frustum_mesh::{build_stack, to_obj_string, validate, ObjOptions};
//!
//! let (config, report) = validate::validate(Some(8.0), &[6.0, 1.0, 0.8]);
//! assert!(report.is_clean());
//!
//! let mesh = build_stack(&config);
//! let obj = to_obj_string(&mesh, &ObjOptions::default());
//! assert!(obj.contains("\nf 1//1 9//9 2//2"));
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod segment;
pub mod stack;
pub mod validate;

pub use error::{MeshError, MeshResult};
pub use export::{to_obj_string, write_obj_file, ObjOptions, ObjWriter};
pub use mesh::Mesh;
pub use segment::{Segment, StackConfig};
pub use stack::{build_stack, StackBuilder};
pub use validate::{RawStackConfig, ValidationReport};

/// Validates raw input, builds the mesh and serializes it in one call.
///
/// # Example
///
/// ```rust
/// let obj = frustum_mesh::generate_obj(Some(4.0), &[2.0, 1.0, 1.0]);
/// assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 16);
/// ```
pub fn generate_obj(raw_sides: Option<f64>, values: &[f64]) -> String {
    let (config, _) = validate::validate(raw_sides, values);
    to_obj_string(&build_stack(&config), &ObjOptions::default())
}
