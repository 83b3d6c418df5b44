//! # Serialized Mesh Array
//!
//! Flat row representation used as the interchange format for transforms:
//! an optional leading zero pad row, followed by `(normal, v0, v1, v2)`
//! groups, one group per facet.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Mesh, Triangle};
use crate::writer::write_mesh;

/// Rows per facet: one normal and three vertices.
pub const ROWS_PER_FACET: usize = 4;

/// A flat sequence of 3-vectors grouped as `(normal, v0, v1, v2)`.
///
/// Arrays produced by the reader start with a pad row;
/// [`MeshArray::strip_padding`] removes it before per-facet indexing.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use stl_mesh::{Mesh, MeshArray};
///
/// let mut mesh = Mesh::new("tri");
/// mesh.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
/// let array = MeshArray::from_mesh(&mesh);
/// assert_eq!(array.len(), 4);
/// assert_eq!(array.rows()[0], DVec3::Z);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshArray {
    rows: Vec<DVec3>,
}

impl MeshArray {
    /// Wraps raw rows.
    pub fn new(rows: Vec<DVec3>) -> Self {
        Self { rows }
    }

    /// Creates an array holding only the pad row, as the reader does before
    /// the first data row.
    pub fn padded() -> Self {
        Self {
            rows: vec![DVec3::ZERO],
        }
    }

    /// Flattens a mesh into unpadded `(normal, v0, v1, v2)` groups.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let mut rows = Vec::with_capacity(mesh.triangle_count() * ROWS_PER_FACET);
        for (triangle, normal) in mesh.facets() {
            rows.push(*normal);
            rows.extend_from_slice(triangle.points());
        }
        Self { rows }
    }

    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[DVec3] {
        &self.rows
    }

    /// Returns the number of rows, pad row included.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn push(&mut self, row: DVec3) {
        self.rows.push(row);
    }

    /// Returns true if the array carries a leading pad row.
    ///
    /// Facet data always comes in groups of four, so any other row count
    /// means the first row is padding.
    pub fn has_padding(&self) -> bool {
        self.rows.len() % ROWS_PER_FACET != 0
    }

    /// Drops the leading pad row if there is one.
    ///
    /// # Errors
    ///
    /// [`MeshError::NotFacetAligned`] when the remaining rows do not form
    /// whole `(normal, v0, v1, v2)` groups.
    pub fn strip_padding(mut self) -> MeshResult<Self> {
        if self.has_padding() {
            self.rows.remove(0);
        }
        if self.rows.len() % ROWS_PER_FACET != 0 {
            return Err(MeshError::NotFacetAligned {
                rows: self.rows.len(),
            });
        }
        Ok(self)
    }

    /// Number of whole facets in an unpadded array.
    pub fn facet_count(&self) -> usize {
        self.rows.len() / ROWS_PER_FACET
    }

    /// Iterates over `(normal, [v0, v1, v2])` groups of an unpadded array.
    pub fn facets(&self) -> impl Iterator<Item = (DVec3, [DVec3; 3])> + '_ {
        self.rows
            .chunks_exact(ROWS_PER_FACET)
            .map(|group| (group[0], [group[1], group[2], group[3]]))
    }

    /// Mutable access to the vertex rows of every facet (normals skipped).
    pub(crate) fn vertices_mut(&mut self) -> impl Iterator<Item = &mut DVec3> {
        self.rows
            .chunks_exact_mut(ROWS_PER_FACET)
            .flat_map(|group| group[1..].iter_mut())
    }

    /// Rebuilds a mesh from the stored normals and vertices, stripping the
    /// pad row first.
    pub fn to_mesh(&self, name: &str) -> MeshResult<Mesh> {
        let array = self.clone().strip_padding()?;
        let mut mesh = Mesh::with_capacity(name, array.facet_count());
        for (normal, [v0, v1, v2]) in array.facets() {
            mesh.push_facet(Triangle::new(v0, v1, v2), normal);
        }
        Ok(mesh)
    }

    /// Serializes the array to the text mesh format at `path`, keeping the
    /// stored normals.
    pub fn write_stl(&self, path: impl AsRef<Path>, name: &str) -> MeshResult<()> {
        write_mesh(path, &self.to_mesh(name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_facet() -> Vec<DVec3> {
        vec![DVec3::Z, DVec3::ZERO, DVec3::X, DVec3::Y]
    }

    #[test]
    fn test_padding_detection() {
        assert!(!MeshArray::new(one_facet()).has_padding());

        let mut rows = vec![DVec3::ZERO];
        rows.extend(one_facet());
        let padded = MeshArray::new(rows);
        assert!(padded.has_padding());

        let stripped = padded.strip_padding().unwrap();
        assert_eq!(stripped.len(), 4);
        assert_eq!(stripped.rows()[0], DVec3::Z);
    }

    #[test]
    fn test_strip_without_padding_is_noop() {
        let array = MeshArray::new(one_facet());
        assert_eq!(array.clone().strip_padding().unwrap(), array);
    }

    #[test]
    fn test_pad_only_array_is_empty_mesh() {
        let array = MeshArray::padded().strip_padding().unwrap();
        assert!(array.is_empty());
        assert_eq!(array.facet_count(), 0);
    }

    #[test]
    fn test_misaligned_array_is_rejected() {
        let array = MeshArray::new(vec![DVec3::ZERO; 6]);
        assert!(matches!(
            array.strip_padding(),
            Err(MeshError::NotFacetAligned { rows: 5 })
        ));
    }

    #[test]
    fn test_facets_iterates_groups() {
        let mut rows = one_facet();
        rows.extend(one_facet());
        let array = MeshArray::new(rows);
        let facets: Vec<_> = array.facets().collect();
        assert_eq!(facets.len(), 2);
        assert_eq!(facets[1].0, DVec3::Z);
        assert_eq!(facets[1].1, [DVec3::ZERO, DVec3::X, DVec3::Y]);
    }

    #[test]
    fn test_to_mesh_keeps_stored_normals() {
        // Deliberately wrong normal: the array is the source of truth.
        let rows = vec![DVec3::X, DVec3::ZERO, DVec3::X, DVec3::Y];
        let mesh = MeshArray::new(rows).to_mesh("kept").unwrap();
        assert_eq!(mesh.name(), "kept");
        assert_eq!(mesh.normals(), &[DVec3::X]);
    }

    #[test]
    fn test_from_mesh_round_trip() {
        let mut mesh = Mesh::new("pair");
        mesh.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
        mesh.add_triangle(DVec3::ZERO, DVec3::Y, DVec3::Z);
        let array = MeshArray::from_mesh(&mesh);
        assert_eq!(array.facet_count(), 2);
        assert_eq!(array.to_mesh("pair").unwrap(), mesh);
    }

    #[test]
    fn test_vertices_mut_skips_normals() {
        let mut array = MeshArray::new(one_facet());
        for v in array.vertices_mut() {
            *v += DVec3::ONE;
        }
        assert_eq!(array.rows()[0], DVec3::Z);
        assert_eq!(array.rows()[1], DVec3::ONE);
        assert_eq!(array.rows()[3], DVec3::new(1.0, 2.0, 1.0));
    }
}
