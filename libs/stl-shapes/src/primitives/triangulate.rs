//! Fan and strip triangulation shared by the primitives.

use glam::DVec3;
use stl_mesh::Mesh;

use super::ring::Ring;
use crate::error::{ShapeError, ShapeResult};

/// Connects `apex` to every consecutive pair of ring samples as
/// `(apex, p_i, p_{i+1})`.
pub fn fan(mesh: &mut Mesh, apex: DVec3, ring: &Ring) -> ShapeResult<()> {
    ring.validate()?;
    for i in 0..ring.len().saturating_sub(1) {
        mesh.add_triangle(apex, ring.point(i), ring.point(i + 1));
    }
    Ok(())
}

/// Like [`fan`] with the opposite winding, `(apex, p_{i+1}, p_i)`.
pub fn fan_reversed(mesh: &mut Mesh, apex: DVec3, ring: &Ring) -> ShapeResult<()> {
    ring.validate()?;
    for i in 0..ring.len().saturating_sub(1) {
        mesh.add_triangle(apex, ring.point(i + 1), ring.point(i));
    }
    Ok(())
}

/// Stitches the band between two rings, splitting each quad in two.
///
/// All `(l_i, u_{i+1}, u_i)` triangles come first, then all
/// `(l_i, l_{i+1}, u_{i+1})` triangles.
///
/// ```text
///  u_i ─── u_i+1
///   │ ╲     │
///   │   ╲   │
///  l_i ─── l_i+1
/// ```
pub fn strip(mesh: &mut Mesh, lower: &Ring, upper: &Ring) -> ShapeResult<()> {
    lower.validate()?;
    upper.validate()?;
    if lower.len() != upper.len() {
        return Err(ShapeError::RingMismatch {
            lower: lower.len(),
            upper: upper.len(),
        });
    }

    let segments = lower.len().saturating_sub(1);
    for i in 0..segments {
        mesh.add_triangle(lower.point(i), upper.point(i + 1), upper.point(i));
    }
    for i in 0..segments {
        mesh.add_triangle(lower.point(i), lower.point(i + 1), upper.point(i + 1));
    }
    Ok(())
}

/// Side band plus optional caps between a base and a top ring.
///
/// The top cap winds `(c, t_i, t_{i+1})` and the base cap the reverse, both
/// fanned from their ring's centre.
pub fn prism(name: &str, base: &Ring, top: &Ring, close: bool) -> ShapeResult<Mesh> {
    let segments = base.len().saturating_sub(1);
    let capacity = if close { 4 * segments } else { 2 * segments };
    let mut mesh = Mesh::with_capacity(name, capacity);

    strip(&mut mesh, base, top)?;
    if close {
        fan(&mut mesh, top.center(), top)?;
        fan_reversed(&mut mesh, base.center(), base)?;
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn ring(z: f64, resolution: u32) -> Ring {
        Ring::sample(1.0, DVec2::ZERO, z, resolution)
    }

    #[test]
    fn test_fan_counts() {
        let mut mesh = Mesh::new("fan");
        fan(&mut mesh, DVec3::ZERO, &ring(0.0, 7)).unwrap();
        assert_eq!(mesh.triangle_count(), 6);
    }

    #[test]
    fn test_fan_winding() {
        let mut up = Mesh::new("up");
        fan(&mut up, DVec3::ZERO, &ring(0.0, 5)).unwrap();
        assert!(up.normals().iter().all(|n| n.z > 0.99));

        let mut down = Mesh::new("down");
        fan_reversed(&mut down, DVec3::ZERO, &ring(0.0, 5)).unwrap();
        assert!(down.normals().iter().all(|n| n.z < -0.99));
    }

    #[test]
    fn test_strip_counts_and_order() {
        let lower = ring(0.0, 4);
        let upper = ring(1.0, 4);
        let mut mesh = Mesh::new("band");
        strip(&mut mesh, &lower, &upper).unwrap();
        assert_eq!(mesh.triangle_count(), 6);
        assert_eq!(mesh.triangles()[0].points()[1], upper.point(1));
        assert_eq!(mesh.triangles()[3].points()[1], lower.point(1));
    }

    #[test]
    fn test_strip_faces_outward() {
        let mut mesh = Mesh::new("band");
        strip(&mut mesh, &ring(0.0, 9), &ring(1.0, 9)).unwrap();
        for (triangle, normal) in mesh.facets() {
            let centroid: DVec3 = triangle.points().iter().copied().sum::<DVec3>() / 3.0;
            let radial = centroid.truncate().extend(0.0);
            assert!(normal.dot(radial) > 0.0);
        }
    }

    #[test]
    fn test_strip_rejects_mismatched_rings() {
        let mut mesh = Mesh::new("bad");
        let result = strip(&mut mesh, &ring(0.0, 4), &ring(1.0, 5));
        assert!(matches!(
            result,
            Err(ShapeError::RingMismatch { lower: 4, upper: 5 })
        ));
    }

    #[test]
    fn test_prism_counts() {
        let base = ring(0.0, 10);
        let top = ring(2.0, 10);
        assert_eq!(prism("open", &base, &top, false).unwrap().triangle_count(), 18);
        assert_eq!(prism("closed", &base, &top, true).unwrap().triangle_count(), 36);
    }
}
