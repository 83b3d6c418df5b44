//! # Cuboid Primitive
//!
//! A cylinder sampled at 5 points per ring, i.e. a square prism. The ring
//! radius is the square's circumradius, `side / √2`.

use std::f64::consts::SQRT_2;

use config::constants::{CUBOID_RESOLUTION, DEFAULT_HEIGHT, DEFAULT_SIDE_LENGTH};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use stl_mesh::Mesh;
use tracing::debug;

use super::circle::validate_radius;
use super::cylinder::CylinderConfig;
use super::ring::Ring;
use super::triangulate::prism;
use super::Primitive;
use crate::error::{ShapeError, ShapeResult};

/// Cuboid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuboidConfig {
    /// Edge length of the square cross-section.
    pub side_length: f64,
    /// Centre of the base square.
    pub base_center: DVec3,
    /// Extent along +Z.
    pub height: f64,
    /// Adds top and bottom faces.
    pub close: bool,
}

impl Default for CuboidConfig {
    fn default() -> Self {
        Self {
            side_length: DEFAULT_SIDE_LENGTH,
            base_center: DVec3::ZERO,
            height: DEFAULT_HEIGHT,
            close: false,
        }
    }
}

impl CuboidConfig {
    /// Radius of the circle through the square's corners.
    pub fn circumradius(&self) -> f64 {
        self.side_length / SQRT_2
    }

    /// The equivalent cylinder.
    pub fn as_cylinder(&self) -> CylinderConfig {
        let radius = self.circumradius();
        CylinderConfig {
            base_radius: radius,
            top_radius: radius,
            base_center: self.base_center,
            height: self.height,
            resolution: CUBOID_RESOLUTION,
            close: self.close,
        }
    }

    /// Checks side length and height.
    pub fn validate(&self) -> ShapeResult<()> {
        validate_radius(Cuboid::KIND, "side_length", self.side_length)?;
        if !self.height.is_finite() {
            return Err(ShapeError::invalid(
                Cuboid::KIND,
                format!("height must be finite: {}", self.height),
            ));
        }
        Ok(())
    }
}

/// A square prism generator.
#[derive(Debug, Clone, Default)]
pub struct Cuboid {
    config: CuboidConfig,
    rings: Option<(Ring, Ring)>,
}

impl Cuboid {
    pub(crate) const KIND: &'static str = "Cuboid";

    /// Creates a unit cuboid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cuboid with the given parameters.
    pub fn with_config(config: CuboidConfig) -> Self {
        Self {
            config,
            rings: None,
        }
    }

    /// Returns the parameters.
    pub fn config(&self) -> &CuboidConfig {
        &self.config
    }

    /// Mutable parameters. Discards generated coordinates.
    pub fn config_mut(&mut self) -> &mut CuboidConfig {
        self.rings = None;
        &mut self.config
    }
}

impl Primitive for Cuboid {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn create(&mut self) -> ShapeResult<()> {
        self.config.validate()?;
        self.rings = Some(self.config.as_cylinder().rings());
        debug!(
            side_length = self.config.side_length,
            height = self.config.height,
            "Created cuboid"
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
