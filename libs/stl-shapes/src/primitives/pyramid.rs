//! # Pyramid Primitive
//!
//! Four-sided version of the tetrahedron. The square base can be closed
//! with two triangles.

use config::constants::{DEFAULT_APEX_ELEVATION, DEFAULT_RADIUS, PYRAMID_RESOLUTION};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use stl_mesh::Mesh;
use tracing::debug;

use super::circle::validate_radius;
use super::ring::Ring;
use super::tetrahedron::apex_mesh;
use super::Primitive;
use crate::error::{ShapeError, ShapeResult};

/// Pyramid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PyramidConfig {
    /// Circumradius of the base square.
    pub radius: f64,
    /// Base centre in the XY plane.
    pub center: DVec2,
    /// Z coordinate of the base.
    pub elevation: f64,
    /// Adds the two base triangles.
    pub close: bool,
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            center: DVec2::ZERO,
            elevation: DEFAULT_APEX_ELEVATION,
            close: false,
        }
    }
}

impl PyramidConfig {
    /// Checks the radius.
    pub fn validate(&self) -> ShapeResult<()> {
        validate_radius(Pyramid::KIND, "radius", self.radius)
    }
}

/// A square pyramid generator.
#[derive(Debug, Clone, Default)]
pub struct Pyramid {
    config: PyramidConfig,
    ring: Option<Ring>,
}

impl Pyramid {
    pub(crate) const KIND: &'static str = "Pyramid";

    /// Creates a pyramid with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pyramid with the given parameters.
    pub fn with_config(config: PyramidConfig) -> Self {
        Self { config, ring: None }
    }

    /// Returns the parameters.
    pub fn config(&self) -> &PyramidConfig {
        &self.config
    }

    /// Mutable parameters. Discards generated coordinates.
    pub fn config_mut(&mut self) -> &mut PyramidConfig {
        self.ring = None;
        &mut self.config
    }
}

impl Primitive for Pyramid {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn create(&mut self) -> ShapeResult<()> {
        self.config.validate()?;
        let PyramidConfig {
            radius,
            center,
            elevation,
            ..
        } = self.config;
        self.ring = Some(Ring::sample(radius, center, elevation, PYRAMID_RESOLUTION));
        debug!(radius, elevation, close = self.config.close, "Created pyramid");
        Ok(())
    }

    fn is_created(&self) -> bool {
        self.ring.is_some()
    }

    fn mesh(&self, name: &str) -> ShapeResult<Mesh> {
        let ring = self
            .ring
            .as_ref()
            .ok_or(ShapeError::NotCreated { shape: Self::KIND })?;
        let extra = if self.config.close { 2 } else { 0 };
        let mut mesh = apex_mesh(name, ring, extra)?;

        if self.config.close {
            // Only valid for exactly four distinct corners. Both halves face
            // away from the apex at the origin.
            let [b0, b1, b2, b3] = [0, 1, 2, 3].map(|i| ring.point(i));
            if ring.elevation() > 0.0 {
                mesh.add_triangle(b0, b1, b2);
                mesh.add_triangle(b0, b2, b3);
            } else {
                mesh.add_triangle(b0, b2, b1);
                mesh.add_triangle(b0, b3, b2);
            }
        }
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::EPSILON_TOLERANCE;

    #[test]
    fn test_open_pyramid_has_four_faces() {
        let mut pyramid = Pyramid::new();
        pyramid.create().unwrap();
        assert_eq!(pyramid.mesh("p").unwrap().triangle_count(), 4);
    }

    #[test]
    fn test_closed_base() {
        let mut pyramid = Pyramid::with_config(PyramidConfig {
            close: true,
            ..Default::default()
        });
        pyramid.create().unwrap();
        let mesh = pyramid.mesh("p").unwrap();
        assert_eq!(mesh.triangle_count(), 6);

        // Base triangles are non-degenerate and cover the square (area 2r²)
        let base_area: f64 = mesh.triangles()[4..]
            .iter()
            .map(|t| {
                let [a, b, c] = *t.points();
                0.5 * (b - a).cross(c - a).length()
            })
            .sum();
        assert_relative_eq!(base_area, 2.0, epsilon = EPSILON_TOLERANCE);

        // Apex above the base, so the base faces down
        let base = &mesh.normals()[4..];
        assert!(base.iter().all(|n| n.z < -0.99), "{base:?}");
        assert!(base[0].dot(base[1]) > 0.0);
    }

    #[test]
    fn test_closed_base_above_apex_faces_up() {
        let mut pyramid = Pyramid::with_config(PyramidConfig {
            elevation: 2.0,
            close: true,
            ..Default::default()
        });
        pyramid.create().unwrap();
        let mesh = pyramid.mesh("p").unwrap();
        assert!(mesh.normals()[4..].iter().all(|n| n.z > 0.99));
    }

    #[test]
    fn test_sides_face_away_from_axis() {
        let mut pyramid = Pyramid::new();
        pyramid.create().unwrap();
        let mesh = pyramid.mesh("p").unwrap();
        for (triangle, normal) in mesh.facets() {
            let [_, a, b] = *triangle.points();
            let midpoint = ((a + b) / 2.0).truncate().extend(0.0);
            assert!(normal.dot(midpoint) > 0.0);
        }
    }

    #[test]
    fn test_config_change_requires_create() {
        let mut pyramid = Pyramid::new();
        pyramid.create().unwrap();
        pyramid.config_mut().close = true;
        assert!(matches!(
            pyramid.mesh("p"),
            Err(ShapeError::NotCreated { shape: "Pyramid" })
        ));
    }
}
