//! # Mesh Errors
//!
//! Error types for mesh construction, serialization and transforms.
//!
//! ## Error Policy
//!
//! - Contract violations (length mismatches, wrong triangle arity) fail
//!   immediately
//! - A missing input file and an unwritable output file are distinct errors
//! - Degenerate triangles are never an error; they get a zero normal

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building, writing, reading or transforming
/// meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The input mesh file does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The output mesh file could not be created or written.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Triangles and normals must pair up one to one.
    #[error("triangle/normal count mismatch: {triangles} triangles, {normals} normals")]
    LengthMismatch {
        /// Number of triangles supplied.
        triangles: usize,
        /// Number of normals supplied.
        normals: usize,
    },

    /// A triangle was built from a point list that is not exactly 3 long.
    #[error("a triangle needs exactly 3 points, got {got}")]
    TriangleArity {
        /// Number of points supplied.
        got: usize,
    },

    /// A serialized mesh array is not made of (normal, v0, v1, v2) groups.
    #[error("mesh array has {rows} rows, which is not a multiple of 4")]
    NotFacetAligned {
        /// Row count after stripping the pad row.
        rows: usize,
    },

    /// Strict parsing found a data row whose tail is not three numbers.
    #[error("malformed numeric row at line {line}: {content:?}")]
    MalformedRow {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// Any other I/O failure while reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a write failure for `path`.
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
