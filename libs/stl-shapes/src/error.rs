//! # Shape Errors
//!
//! Error types for shape generation and export.

use std::path::PathBuf;

use stl_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while creating or exporting shapes.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// `export`/`mesh` was called before `create`.
    #[error("{shape} has not been created yet; call create() before export()")]
    NotCreated {
        /// Shape kind, e.g. "Circle".
        shape: &'static str,
    },

    /// The x and y coordinate arrays of a ring differ in length.
    #[error("length of x and y should be the same, found {x} and {y}")]
    CoordinateMismatch {
        /// Number of x coordinates.
        x: usize,
        /// Number of y coordinates.
        y: usize,
    },

    /// Two rings stitched into a strip have different sample counts.
    #[error("cannot stitch rings of {lower} and {upper} points")]
    RingMismatch {
        /// Points on the lower ring.
        lower: usize,
        /// Points on the upper ring.
        upper: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid {shape} parameter: {message}")]
    InvalidParameter {
        /// Shape kind.
        shape: &'static str,
        /// What was wrong.
        message: String,
    },

    /// The output directory could not be created.
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Mesh construction or writing failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl ShapeError {
    /// Creates an invalid parameter error.
    pub fn invalid(shape: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            shape,
            message: message.into(),
        }
    }
}

/// Result type alias for shape operations.
pub type ShapeResult<T> = Result<T, ShapeError>;
