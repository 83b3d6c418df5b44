//! # Circle Primitive
//!
//! Flat disc fanned from the z-axis point `(0, 0, elevation)`. Low
//! resolutions give regular polygons: 4 samples make a triangle, 5 a square.

use std::f64::consts::PI;

use config::constants::{DEFAULT_CIRCLE_RESOLUTION, DEFAULT_RADIUS, MIN_RING_RESOLUTION};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use stl_mesh::Mesh;
use tracing::debug;

use super::ring::Ring;
use super::triangulate::fan;
use super::Primitive;
use crate::error::{ShapeError, ShapeResult};

/// Circle parameters.
///
/// # Example
///
/// ```rust
/// use stl_shapes::primitives::circle::CircleConfig;
///
/// let config = CircleConfig { radius: 2.0, ..Default::default() };
/// assert!((config.area() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleConfig {
    /// Distance from centre to perimeter.
    pub radius: f64,
    /// Centre in the XY plane.
    pub center: DVec2,
    /// Z coordinate of the disc.
    pub elevation: f64,
    /// Number of perimeter samples (first and last coincide).
    pub resolution: u32,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            center: DVec2::ZERO,
            elevation: 0.0,
            resolution: DEFAULT_CIRCLE_RESOLUTION,
        }
    }
}

impl CircleConfig {
    /// Area of the ideal circle.
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Perimeter of the ideal circle.
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Checks radius and resolution.
    pub fn validate(&self) -> ShapeResult<()> {
        validate_radius(Circle::KIND, "radius", self.radius)?;
        validate_resolution(Circle::KIND, self.resolution)
    }
}

pub(crate) fn validate_radius(shape: &'static str, field: &str, value: f64) -> ShapeResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ShapeError::invalid(
            shape,
            format!("{field} must be a non-negative number: {value}"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_resolution(shape: &'static str, resolution: u32) -> ShapeResult<()> {
    if resolution < MIN_RING_RESOLUTION {
        return Err(ShapeError::invalid(
            shape,
            format!("resolution must be at least {MIN_RING_RESOLUTION}: {resolution}"),
        ));
    }
    Ok(())
}

/// A 2D circle generator.
///
/// # Example
///
/// ```rust
/// use stl_shapes::{Circle, Primitive};
///
/// let mut circle = Circle::new();
/// circle.config_mut().radius = 2.0;
/// circle.create().unwrap();
/// let mesh = circle.mesh("circle").unwrap();
/// assert_eq!(mesh.triangle_count(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Circle {
    config: CircleConfig,
    ring: Option<Ring>,
}

impl Circle {
    pub(crate) const KIND: &'static str = "Circle";

    /// Creates a circle with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a circle with the given parameters.
    pub fn with_config(config: CircleConfig) -> Self {
        Self { config, ring: None }
    }

    /// Returns the parameters.
    pub fn config(&self) -> &CircleConfig {
        &self.config
    }

    /// Mutable parameters. Discards generated coordinates, so `create` must
    /// run again before export.
    pub fn config_mut(&mut self) -> &mut CircleConfig {
        self.ring = None;
        &mut self.config
    }

    /// The sampled perimeter, once created.
    pub fn ring(&self) -> Option<&Ring> {
        self.ring.as_ref()
    }
}

impl Primitive for Circle {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn create(&mut self) -> ShapeResult<()> {
        self.config.validate()?;
        let CircleConfig {
            radius,
            center,
            elevation,
            resolution,
        } = self.config;
        self.ring = Some(Ring::sample(radius, center, elevation, resolution));
        debug!(radius, resolution, elevation, "Created circle");
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
        let mut mesh = Mesh::with_capacity(name, ring.len().saturating_sub(1));
        fan(&mut mesh, ring.axis_point(), ring)?;
        Ok(mesh)
    }
}
