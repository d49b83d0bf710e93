//! # Mesh Export
//!
//! Text serialization of finished meshes.

pub mod obj;

pub use obj::{format_number, to_obj_string, write_obj_file, ObjOptions, ObjWriter};
