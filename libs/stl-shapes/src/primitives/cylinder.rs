//! # Cylinder Primitive
//!
//! Base and top rings joined by a strip, with optional fan caps.
//! Different radii give a frustum.

use config::constants::{DEFAULT_CYLINDER_RESOLUTION, DEFAULT_HEIGHT, DEFAULT_RADIUS};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use stl_mesh::Mesh;
use tracing::debug;

use super::circle::{validate_radius, validate_resolution};
use super::ring::Ring;
use super::triangulate::prism;
use super::Primitive;
use crate::error::{ShapeError, ShapeResult};

/// Cylinder parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderConfig {
    /// Radius of the base ring.
    pub base_radius: f64,
    /// Radius of the top ring.
    pub top_radius: f64,
    /// Centre of the base ring.
    pub base_center: DVec3,
    /// Distance from base to top along +Z.
    pub height: f64,
    /// Samples per ring.
    pub resolution: u32,
    /// Adds top and bottom caps.
    pub close: bool,
}

impl Default for CylinderConfig {
    fn default() -> Self {
        Self {
            base_radius: DEFAULT_RADIUS,
            top_radius: DEFAULT_RADIUS,
            base_center: DVec3::ZERO,
            height: DEFAULT_HEIGHT,
            resolution: DEFAULT_CYLINDER_RESOLUTION,
            close: false,
        }
    }
}

impl CylinderConfig {
    /// Centre of the top ring.
    pub fn top_center(&self) -> DVec3 {
        self.base_center + DVec3::Z * self.height
    }

    /// Checks radii, height and resolution.
    pub fn validate(&self) -> ShapeResult<()> {
        validate_radius(Cylinder::KIND, "base_radius", self.base_radius)?;
        validate_radius(Cylinder::KIND, "top_radius", self.top_radius)?;
        if !self.height.is_finite() {
            return Err(ShapeError::invalid(
                Cylinder::KIND,
                format!("height must be finite: {}", self.height),
            ));
        }
        validate_resolution(Cylinder::KIND, self.resolution)
    }

    pub(crate) fn rings(&self) -> (Ring, Ring) {
        let center = self.base_center.truncate();
        let base = Ring::sample(self.base_radius, center, self.base_center.z, self.resolution);
        let top = Ring::sample(self.top_radius, center, self.top_center().z, self.resolution);
        (base, top)
    }
}

/// A cylinder or frustum generator.
#[derive(Debug, Clone, Default)]
pub struct Cylinder {
    config: CylinderConfig,
    rings: Option<(Ring, Ring)>,
}

impl Cylinder {
    pub(crate) const KIND: &'static str = "Cylinder";

    /// Creates a cylinder with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cylinder with the given parameters.
    pub fn with_config(config: CylinderConfig) -> Self {
        Self {
            config,
            rings: None,
        }
    }

    /// Returns the parameters.
    pub fn config(&self) -> &CylinderConfig {
        &self.config
    }

    /// Mutable parameters. Discards generated coordinates.
    pub fn config_mut(&mut self) -> &mut CylinderConfig {
        self.rings = None;
        &mut self.config
    }

    /// The base and top rings, once created.
    pub fn rings(&self) -> Option<(&Ring, &Ring)> {
        self.rings.as_ref().map(|(base, top)| (base, top))
    }
}

impl Primitive for Cylinder {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn create(&mut self) -> ShapeResult<()> {
        self.config.validate()?;
        self.rings = Some(self.config.rings());
        debug!(
            base_radius = self.config.base_radius,
            top_radius = self.config.top_radius,
            height = self.config.height,
            resolution = self.config.resolution,
            "Created cylinder"
        );
        Ok(())
    }

    fn is_created(&self) -> bool {
        self.rings.is_some()
    }

    fn mesh(&self, name: &str) -> ShapeResult<Mesh> {
        let (base, top) = self
            .rings
            .as_ref()
            .ok_or(ShapeError::NotCreated { shape: Self::KIND })?;
        prism(name, base, top, self.config.close)
    }
}
