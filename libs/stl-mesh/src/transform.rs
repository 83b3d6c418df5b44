//! # Affine Transforms
//!
//! Translate and rotate serialized mesh arrays. Both operations accept a
//! padded or unpadded array; the pad row is stripped before any per-facet
//! indexing.

use std::path::Path;

use config::constants::DEFAULT_ROTATED_NAME;
use glam::{DMat3, DVec3};
use tracing::debug;

use crate::array::MeshArray;
use crate::error::MeshResult;
use crate::mesh::{Mesh, Triangle};
use crate::writer::write_mesh;

/// Moves every vertex row by `(dx, dy, dz)`. Normal rows are unchanged.
///
/// The array is consumed and returned without its pad row; clone it first
/// to keep the original.
///
/// # Errors
///
/// [`crate::MeshError::NotFacetAligned`] if the rows do not form whole
/// facets.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use stl_mesh::{translate, MeshArray};
///
/// let array = MeshArray::new(vec![DVec3::Z, DVec3::ZERO, DVec3::X, DVec3::Y]);
/// let moved = translate(array, 1.0, 2.0, 3.0).unwrap();
/// assert_eq!(moved.rows()[0], DVec3::Z);
/// assert_eq!(moved.rows()[1], DVec3::new(1.0, 2.0, 3.0));
/// ```
pub fn translate(array: MeshArray, dx: f64, dy: f64, dz: f64) -> MeshResult<MeshArray> {
    let mut array = array.strip_padding()?;
    let offset = DVec3::new(dx, dy, dz);
    for vertex in array.vertices_mut() {
        *vertex += offset;
    }
    debug!(facets = array.facet_count(), dx, dy, dz, "Translated mesh array");
    Ok(array)
}

/// Builds the rotation `Rx · (Ry · Rz)` from angles in degrees.
///
/// Each factor is a right-handed rotation about its axis, applied to
/// column vectors.
pub fn rotation_matrix(x_degrees: f64, y_degrees: f64, z_degrees: f64) -> DMat3 {
    let rx = DMat3::from_rotation_x(x_degrees.to_radians());
    let ry = DMat3::from_rotation_y(y_degrees.to_radians());
    let rz = DMat3::from_rotation_z(z_degrees.to_radians());
    rx * (ry * rz)
}

/// Rotates the array's vertices and returns a new mesh named `name`.
///
/// Normals are recomputed from the rotated triangles; the stored normals
/// are not reused.
pub fn rotated(
    array: &MeshArray,
    x_degrees: f64,
    y_degrees: f64,
    z_degrees: f64,
    name: &str,
) -> MeshResult<Mesh> {
    let array = array.clone().strip_padding()?;
    let rotation = rotation_matrix(x_degrees, y_degrees, z_degrees);

    let mut mesh = Mesh::with_capacity(name, array.facet_count());
    for (_, [v0, v1, v2]) in array.facets() {
        let triangle = Triangle::new(v0, v1, v2).map(|p| rotation * p);
        mesh.push_facet(triangle, triangle.normal());
    }

    debug!(
        facets = mesh.triangle_count(),
        x_degrees, y_degrees, z_degrees, "Rotated mesh array"
    );
    Ok(mesh)
}

/// Rotates the array and writes the result to `output_path`.
///
/// The solid is named after the output file stem. The input array is
/// never modified.
///
/// # Errors
///
/// - [`crate::MeshError::NotFacetAligned`] for malformed arrays
/// - [`crate::MeshError::WriteFailed`] if the output cannot be written
pub fn rotate(
    array: &MeshArray,
    x_degrees: f64,
    y_degrees: f64,
    z_degrees: f64,
    output_path: impl AsRef<Path>,
) -> MeshResult<()> {
    let output_path = output_path.as_ref();
    let name = output_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(DEFAULT_ROTATED_NAME);
    let mesh = rotated(array, x_degrees, y_degrees, z_degrees, name)?;
    write_mesh(output_path, &mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use approx::assert_relative_eq;

    fn square() -> MeshArray {
        let mut mesh = Mesh::new("square");
        mesh.add_triangle(DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0));
        mesh.add_triangle(DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0), DVec3::Y);
        MeshArray::from_mesh(&mesh)
    }

    fn assert_vec_eq(a: DVec3, b: DVec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
    }

    #[test]
    fn test_translate_moves_vertices_only() {
        let original = square();
        let moved = translate(original.clone(), 1.0, 2.0, 1.0).unwrap();
        for (i, (before, after)) in original.rows().iter().zip(moved.rows()).enumerate() {
            if i % 4 == 0 {
                assert_eq!(before, after);
            } else {
                assert_eq!(*after - *before, DVec3::new(1.0, 2.0, 1.0));
            }
        }
    }

    #[test]
    fn test_translate_strips_padding() {
        let mut rows = vec![DVec3::ZERO];
        rows.extend_from_slice(square().rows());
        let moved = translate(MeshArray::new(rows), 0.0, 0.0, 5.0).unwrap();
        assert_eq!(moved.len(), 8);
        assert_eq!(moved.rows()[1], DVec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_translate_rejects_misaligned() {
        let array = MeshArray::new(vec![DVec3::ZERO; 7]);
        assert!(matches!(
            translate(array, 1.0, 1.0, 1.0),
            Err(MeshError::NotFacetAligned { rows: 6 })
        ));
    }

    #[test]
    fn test_rotation_matrix_identity() {
        let m = rotation_matrix(0.0, 0.0, 0.0);
        assert_eq!(m, DMat3::IDENTITY);
    }

    #[test]
    fn test_rotation_about_z_is_right_handed() {
        let m = rotation_matrix(0.0, 0.0, 90.0);
        assert_vec_eq(m * DVec3::X, DVec3::Y);
    }

    #[test]
    fn test_rotation_about_x_is_right_handed() {
        let m = rotation_matrix(90.0, 0.0, 0.0);
        assert_vec_eq(m * DVec3::Y, DVec3::Z);
    }

    #[test]
    fn test_composition_order() {
        // Rz applies first: X -> Y under Rz(90), then Rx(90) sends Y -> Z.
        let m = rotation_matrix(90.0, 0.0, 90.0);
        assert_vec_eq(m * DVec3::X, DVec3::Z);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let array = square();
        let mesh = rotated(&array, 0.0, 0.0, 0.0, "same").unwrap();
        let back = MeshArray::from_mesh(&mesh);
        for (a, b) in array.rows().iter().zip(back.rows()) {
            assert_vec_eq(*a, *b);
        }
    }

    #[test]
    fn test_rotation_recomputes_normals() {
        let mesh = rotated(&square(), 90.0, 0.0, 0.0, "upright").unwrap();
        // The square lay in the XY plane facing +Z; Rx(90) turns +Z into -Y.
        for n in mesh.normals() {
            assert_vec_eq(*n, -DVec3::Y);
        }
    }

    #[test]
    fn test_rotate_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("turned.stl");
        rotate(&square(), 0.0, 45.0, 0.0, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("solid turned\n"));
        assert_eq!(text.matches("endfacet").count(), 2);
    }
}
