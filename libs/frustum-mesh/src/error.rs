//! # Mesh Errors
//!
//! Error types for stack configuration, mesh export and config loading.
//! Building a mesh from a [`StackConfig`](crate::segment::StackConfig) never
//! fails; the variants below only come from the boundaries around it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur around mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Side count outside the accepted range
    #[error("Invalid side count: {sides} (expected {min}..={max})")]
    InvalidSides { sides: u32, min: u32, max: u32 },

    /// A stack needs at least one segment
    #[error("Stack must contain at least one segment")]
    EmptyStack,

    /// Segment with a non-finite height or radius
    #[error("Segment {index} has a non-finite value: {message}")]
    NonFiniteSegment { index: usize, message: String },

    /// Reading or writing a file failed
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing serialized output to a stream failed
    #[error("Write failed: {0}")]
    Write(#[from] std::io::Error),

    /// JSON configuration could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl MeshError {
    /// Creates an invalid side count error using the configured bounds.
    pub fn invalid_sides(sides: u32) -> Self {
        Self::InvalidSides {
            sides,
            min: config::constants::MIN_SIDES,
            max: config::constants::MAX_SIDES,
        }
    }

    /// Creates a non-finite segment error.
    pub fn non_finite(index: usize, message: impl Into<String>) -> Self {
        Self::NonFiniteSegment {
            index,
            message: message.into(),
        }
    }

    /// Attaches a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
