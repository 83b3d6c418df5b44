//! # Facet Normals
//!
//! Right-hand-rule normals for triangles.

use glam::DVec3;

/// Computes the unit normal of the triangle `(p1, p2, p3)`.
///
/// The normal is `(p2 - p1) × (p3 - p1)` scaled to unit length, so the
/// winding order decides its sign. Degenerate triangles (collinear or
/// coincident points) yield [`DVec3::ZERO`] instead of an error; consumers
/// must tolerate zero normals.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use stl_mesh::facet_normal;
///
/// let n = facet_normal(
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(0.0, 4.0, 0.0),
///     DVec3::new(0.0, 2.0, 50.0),
/// );
/// assert!((n - DVec3::X).length() < 1e-12);
/// ```
pub fn facet_normal(p1: DVec3, p2: DVec3, p3: DVec3) -> DVec3 {
    (p2 - p1).cross(p3 - p1).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_right_hand_rule() {
        let n = facet_normal(
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 4.0, 0.0),
            DVec3::new(0.0, 2.0, 50.0),
        );
        assert_relative_eq!(n.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(n.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_winding_flips_sign() {
        let a = DVec3::ZERO;
        let b = DVec3::X;
        let c = DVec3::Y;
        assert_eq!(facet_normal(a, b, c), DVec3::Z);
        assert_eq!(facet_normal(a, c, b), -DVec3::Z);
    }

    #[test]
    fn test_unit_length() {
        let n = facet_normal(
            DVec3::new(3.0, -1.0, 2.0),
            DVec3::new(10.0, 4.0, -7.0),
            DVec3::new(-2.0, 8.0, 1.5),
        );
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_identical_points_give_zero() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(facet_normal(p, p, p), DVec3::ZERO);
    }

    #[test]
    fn test_collinear_points_give_zero() {
        let n = facet_normal(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(n, DVec3::ZERO);
    }
}
