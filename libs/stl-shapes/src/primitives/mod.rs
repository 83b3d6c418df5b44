//! # Primitives
//!
//! Parametric shape generators. Every shape follows the same two-phase
//! protocol: `create()` samples the coordinate rings from the current
//! configuration, then `mesh()`/`export()` triangulates them.
//!
//! ## Shapes
//!
//! - [`circle::Circle`] - flat disc, fanned from its centre
//! - [`cylinder::Cylinder`] - side band plus optional caps (frustums allowed)
//! - [`cuboid::Cuboid`] - cylinder sampled at 4 sides
//! - [`tetrahedron::Tetrahedron`] - 3 base points fanned from the origin
//! - [`pyramid::Pyramid`] - 4 base points fanned from the origin, optional base
//! - [`sphere::Sphere`] - stacked latitude rings with polar caps

pub mod circle;
pub mod cuboid;
pub mod cylinder;
pub mod pyramid;
pub mod ring;
pub mod sphere;
pub mod tetrahedron;
pub mod triangulate;

use std::path::{Path, PathBuf};

use stl_mesh::{write_mesh, Mesh};

use crate::error::ShapeResult;
use crate::output::OutputDir;

/// Two-phase shape generator.
pub trait Primitive {
    /// Human-readable shape kind, e.g. "Cylinder".
    fn kind(&self) -> &'static str;

    /// Samples coordinates from the current configuration.
    fn create(&mut self) -> ShapeResult<()>;

    /// Returns true once `create` has succeeded for the current configuration.
    fn is_created(&self) -> bool;

    /// Triangulates the created coordinates into a named mesh.
    ///
    /// Fails with `ShapeError::NotCreated` before `create`.
    fn mesh(&self, name: &str) -> ShapeResult<Mesh>;

    /// Triangulates and writes the mesh to `path`.
    fn export(&self, path: &Path, name: &str) -> ShapeResult<()> {
        let mesh = self.mesh(name)?;
        write_mesh(path, &mesh)?;
        Ok(())
    }

    /// Writes `<dir>/<stem>.stl`, creating `dir` if needed. The solid is
    /// named after `stem`.
    fn export_to(&self, dir: &OutputDir, stem: &str) -> ShapeResult<PathBuf> {
        let mesh = self.mesh(stem)?;
        dir.ensure()?;
        let path = dir.file_path(stem);
        write_mesh(&path, &mesh)?;
        Ok(path)
    }
}
