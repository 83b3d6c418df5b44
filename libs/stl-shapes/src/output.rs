//! # Output Directory
//!
//! Explicit destination for exported meshes. Nothing is created until an
//! export asks for it.

use std::path::{Path, PathBuf};

use config::constants::{GlobalConfig, MESH_FILE_EXTENSION};
use tracing::debug;

use crate::error::{ShapeError, ShapeResult};

/// Directory that exported shapes are written into.
///
/// # Example
///
/// ```rust
/// use stl_shapes::OutputDir;
///
/// let dir = OutputDir::new("meshes");
/// assert_eq!(dir.file_path("circle"), std::path::Path::new("meshes/circle.stl"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Uses `root` as the output directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Uses the configured output directory.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(config.output_dir.clone())
    }

    /// Returns the directory path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates the directory (and parents) if missing.
    pub fn ensure(&self) -> ShapeResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|source| ShapeError::OutputDir {
            path: self.root.clone(),
            source,
        })?;
        debug!(path = %self.root.display(), "Output directory ready");
        Ok(())
    }

    /// Resolves `<root>/<stem>.stl`. Dots inside `stem` are kept.
    pub fn file_path(&self, stem: &str) -> PathBuf {
        self.root.join(format!("{stem}.{MESH_FILE_EXTENSION}"))
    }
}

impl Default for OutputDir {
    fn default() -> Self {
        Self::from_config(&GlobalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_config() {
        let dir = OutputDir::default();
        assert_eq!(dir.path(), Path::new(config::constants::DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_dotted_stems_stay_distinct() {
        let dir = OutputDir::new("out");
        let v1 = dir.file_path("part.v1");
        let v2 = dir.file_path("part.v2");
        assert_ne!(v1, v2);
        assert_eq!(v1, Path::new("out").join("part.v1.stl"));
        assert_eq!(dir.file_path("circle"), Path::new("out").join("circle.stl"));
    }

    #[test]
    fn test_ensure_creates_nested_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = OutputDir::new(tmp.path().join("a").join("b"));
        dir.ensure().unwrap();
        assert!(dir.path().is_dir());
        // Idempotent
        dir.ensure().unwrap();
    }

    #[test]
    fn test_ensure_fails_on_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "not a dir").unwrap();
        let dir = OutputDir::new(blocker.join("inner"));
        assert!(matches!(dir.ensure(), Err(ShapeError::OutputDir { .. })));
    }
}
