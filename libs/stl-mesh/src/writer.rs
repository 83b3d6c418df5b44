//! # Mesh Writer
//!
//! Serializes facets into the line-oriented text mesh format:
//!
//! ```text
//! solid <name>
//! facet normal <nx> <ny> <nz>
//! outer loop
//! vertex <x> <y> <z>
//! vertex <x> <y> <z>
//! vertex <x> <y> <z>
//! endloop
//! endfacet
//! ...
//! endsolid
//! ```
//!
//! Numbers are written with `f64`'s shortest round-trip representation, so
//! reading a file back reproduces the exact coordinates.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;
use tracing::info;

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Mesh, Triangle};

/// Writes `triangles` and their `normals` to `path` under the solid name
/// `name`, creating or truncating the file.
///
/// # Errors
///
/// - [`MeshError::LengthMismatch`] if the lists differ in length (checked
///   before the file is touched)
/// - [`MeshError::WriteFailed`] if the file cannot be created or written
///
/// # Example
///
/// ```no_run
/// use glam::DVec3;
/// use stl_mesh::{write_stl, Triangle};
///
/// let tri = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
/// write_stl("tri.stl", "tri", &[tri], &[tri.normal()]).unwrap();
/// ```
pub fn write_stl(
    path: impl AsRef<Path>,
    name: &str,
    triangles: &[Triangle],
    normals: &[DVec3],
) -> MeshResult<()> {
    let path = path.as_ref();
    if triangles.len() != normals.len() {
        return Err(MeshError::LengthMismatch {
            triangles: triangles.len(),
            normals: normals.len(),
        });
    }

    let file = File::create(path).map_err(|e| MeshError::write_failed(path, e))?;
    let mut writer = BufWriter::new(file);
    write_facets(&mut writer, name, triangles, normals)
        .and_then(|()| writer.flush())
        .map_err(|e| MeshError::write_failed(path, e))?;

    info!(
        path = %path.display(),
        facets = triangles.len(),
        "Wrote mesh file"
    );
    Ok(())
}

/// Writes a [`Mesh`] to `path` using its own name.
pub fn write_mesh(path: impl AsRef<Path>, mesh: &Mesh) -> MeshResult<()> {
    write_stl(path, mesh.name(), mesh.triangles(), mesh.normals())
}

/// Streams the text format into any writer.
pub(crate) fn write_facets<W: Write>(
    writer: &mut W,
    name: &str,
    triangles: &[Triangle],
    normals: &[DVec3],
) -> std::io::Result<()> {
    writeln!(writer, "solid {name}")?;

    for (triangle, n) in triangles.iter().zip(normals) {
        writeln!(writer, "facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(writer, "outer loop")?;
        for v in triangle.points() {
            writeln!(writer, "vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "endloop")?;
        writeln!(writer, "endfacet")?;
    }

    writeln!(writer, "endsolid")
}
