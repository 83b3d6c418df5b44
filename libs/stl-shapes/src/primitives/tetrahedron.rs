//! # Tetrahedron Primitive
//!
//! Three base points below the origin, each edge fanned up to the apex at
//! `(0, 0, 0)`. The base itself is left open.

use config::constants::{DEFAULT_APEX_ELEVATION, DEFAULT_RADIUS, TETRAHEDRON_RESOLUTION};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use stl_mesh::Mesh;
use tracing::debug;

use super::circle::validate_radius;
use super::ring::Ring;
use super::triangulate::fan;
use super::Primitive;
use crate::error::{ShapeError, ShapeResult};

/// Tetrahedron parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TetrahedronConfig {
    /// Circumradius of the base triangle.
    pub radius: f64,
    /// Base centre in the XY plane.
    pub center: DVec2,
    /// Z coordinate of the base.
    pub elevation: f64,
}

impl Default for TetrahedronConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            center: DVec2::ZERO,
            elevation: DEFAULT_APEX_ELEVATION,
        }
    }
}

impl TetrahedronConfig {
    /// Checks the radius.
    pub fn validate(&self) -> ShapeResult<()> {
        validate_radius(Tetrahedron::KIND, "radius", self.radius)
    }
}

/// Samples a base ring and fans it from the origin.
pub(crate) fn apex_mesh(name: &str, ring: &Ring, extra: usize) -> ShapeResult<Mesh> {
    let mut mesh = Mesh::with_capacity(name, ring.len().saturating_sub(1) + extra);
    fan(&mut mesh, DVec3::ZERO, ring)?;
    Ok(mesh)
}

/// A three-sided pyramid generator.
#[derive(Debug, Clone, Default)]
pub struct Tetrahedron {
    config: TetrahedronConfig,
    ring: Option<Ring>,
}

impl Tetrahedron {
    pub(crate) const KIND: &'static str = "Tetrahedron";

    /// Creates a tetrahedron with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tetrahedron with the given parameters.
    pub fn with_config(config: TetrahedronConfig) -> Self {
        Self { config, ring: None }
    }

    /// Returns the parameters.
    pub fn config(&self) -> &TetrahedronConfig {
        &self.config
    }

    /// Mutable parameters. Discards generated coordinates.
    pub fn config_mut(&mut self) -> &mut TetrahedronConfig {
        self.ring = None;
        &mut self.config
    }
}

impl Primitive for Tetrahedron {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn create(&mut self) -> ShapeResult<()> {
        self.config.validate()?;
        let TetrahedronConfig {
            radius,
            center,
            elevation,
        } = self.config;
        self.ring = Some(Ring::sample(radius, center, elevation, TETRAHEDRON_RESOLUTION));
        debug!(radius, elevation, "Created tetrahedron");
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
        apex_mesh(name, ring, 0)
    }
}
