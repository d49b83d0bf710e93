//! # Wavefront OBJ Export
//!
//! Writes a [`Mesh`] as OBJ text:
//!
//! ```text
//! # <header>
//! o <name>
//! v x y z          (one per vertex)
//! vn nx ny nz      (one per normal)
//! f a//a b//b c//c (one per face, 1-based)
//! ```
//!
//! Lines are separated by `\n` with no trailing newline. Each face corner
//! uses the same index for its vertex and its normal because normals are
//! stored per vertex.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::{DEFAULT_HEADER, DEFAULT_OBJECT_NAME};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header and object name written before the geometry.
///
/// Line breaks in either field are written as spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjOptions {
    /// Text of the leading `#` comment line
    pub header: String,
    /// Name on the `o` line
    pub object_name: String,
}

impl Default for ObjOptions {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            object_name: DEFAULT_OBJECT_NAME.to_string(),
        }
    }
}

impl ObjOptions {
    /// Options with a custom object name and the default header.
    pub fn named(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            ..Self::default()
        }
    }
}

/// Formats a number the way a JavaScript engine prints a double.
///
/// - integral values have no fractional part (`6`, not `6.0`)
/// - negative zero prints as `0`
/// - magnitudes below `1e-6` or from `1e21` up use exponent notation with
///   an explicit sign (`1e-7`, `1e+21`)
///
/// # Example
///
/// ```rust
/// use frustum_mesh::export::format_number;
///
/// assert_eq!(format_number(6.0), "6");
/// assert_eq!(format_number(0.8), "0.8");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1.2246467991473532e-16), "1.2246467991473532e-16");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

/// Streams OBJ text into any writer.
///
/// # Example
///
/// ```rust
/// use frustum_mesh::{build_stack, ObjOptions, ObjWriter, StackConfig};
///
/// let mesh = build_stack(&StackConfig::default());
/// let mut buffer = Vec::new();
/// ObjWriter::new(&mut buffer, ObjOptions::default()).write_mesh(&mesh).unwrap();
/// assert!(buffer.starts_with(b"# "));
/// ```
#[derive(Debug)]
pub struct ObjWriter<W: Write> {
    writer: W,
    options: ObjOptions,
    started: bool,
}

impl<W: Write> ObjWriter<W> {
    /// Wraps a writer.
    pub fn new(writer: W, options: ObjOptions) -> Self {
        Self {
            writer,
            options,
            started: false,
        }
    }

    /// Writes header, vertices, normals and faces.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::Write`] if the underlying writer fails.
    pub fn write_mesh(&mut self, mesh: &Mesh) -> MeshResult<()> {
        let header = format!("# {}", single_line(&self.options.header));
        let object = format!("o {}", single_line(&self.options.object_name));
        self.line(&header)?;
        self.line(&object)?;

        for v in mesh.vertices() {
            let line = format!(
                "v {} {} {}",
                format_number(v.x),
                format_number(v.y),
                format_number(v.z)
            );
            self.line(&line)?;
        }

        for n in mesh.normals() {
            let line = format!(
                "vn {} {} {}",
                format_number(n.x),
                format_number(n.y),
                format_number(n.z)
            );
            self.line(&line)?;
        }

        for tri in mesh.triangles() {
            let [a, b, c] = tri.map(|i| i + 1);
            let line = format!("f {a}//{a} {b}//{b} {c}//{c}");
            self.line(&line)?;
        }

        self.writer.flush()?;
        Ok(())
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, text: &str) -> MeshResult<()> {
        if self.started {
            self.writer.write_all(b"\n")?;
        }
        self.writer.write_all(text.as_bytes())?;
        self.started = true;
        Ok(())
    }
}

// Line breaks in free-form text would start new OBJ statements.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// Serializes a mesh into an OBJ string.
pub fn to_obj_string(mesh: &Mesh, options: &ObjOptions) -> String {
    let mut writer = ObjWriter::new(Vec::new(), options.clone());
    // writing into a Vec cannot fail
    if let Err(err) = writer.write_mesh(mesh) {
        log::error!("in-memory OBJ serialization failed: {}", err);
    }
    String::from_utf8_lossy(&writer.into_inner()).into_owned()
}

/// Creates (or truncates) `path` and writes the mesh to it.
///
/// # Errors
///
/// Returns [`MeshError::Io`] with the path attached when the file cannot be
/// created or written.
pub fn write_obj_file(path: impl AsRef<Path>, mesh: &Mesh, options: &ObjOptions) -> MeshResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|err| MeshError::io(path, err))?;

    ObjWriter::new(BufWriter::new(file), options.clone())
        .write_mesh(mesh)
        .map_err(|err| match err {
            MeshError::Write(source) => MeshError::io(path, source),
            other => other,
        })?;

    log::debug!(
        "wrote {} vertices and {} faces to {}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        path.display()
    );
    Ok(())
}
