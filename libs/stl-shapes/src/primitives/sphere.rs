//! # Sphere Primitive
//!
//! Stack of latitude rings from the south pole to the north pole, stitched
//! pairwise and capped with fans from the z-axis point at each end ring's
//! elevation.
//!
//! Ring radii follow `r = √(R² − l²)` where `l` runs from `R` down to
//! `min_radius` over the first half of the stack and back up to `R` over
//! the second half. Ring elevations are spaced evenly and independently
//! of that curve.

use config::constants::{DEFAULT_RADIUS, DEFAULT_SPHERE_MIN_RADIUS, DEFAULT_SPHERE_RESOLUTION};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use stl_mesh::Mesh;
use tracing::debug;

use super::circle::{validate_radius, validate_resolution};
use super::ring::{linspace, Ring};
use super::triangulate::{fan, strip};
use super::Primitive;
use crate::error::{ShapeError, ShapeResult};

/// Sphere parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereConfig {
    /// Sphere radius.
    pub radius: f64,
    /// Sphere centre.
    pub center: DVec3,
    /// Number of latitude rings.
    pub resolution_longitude: u32,
    /// Samples per latitude ring.
    pub resolution_latitude: u32,
    /// Floor of the radius variation curve, in `[0, radius]`.
    pub min_radius: f64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            center: DVec3::ZERO,
            resolution_longitude: DEFAULT_SPHERE_RESOLUTION,
            resolution_latitude: DEFAULT_SPHERE_RESOLUTION,
            min_radius: DEFAULT_SPHERE_MIN_RADIUS,
        }
    }
}

impl SphereConfig {
    /// Checks radius, floor and both resolutions.
    pub fn validate(&self) -> ShapeResult<()> {
        validate_radius(Sphere::KIND, "radius", self.radius)?;
        validate_radius(Sphere::KIND, "min_radius", self.min_radius)?;
        if self.min_radius > self.radius {
            return Err(ShapeError::invalid(
                Sphere::KIND,
                format!(
                    "min_radius {} exceeds radius {}",
                    self.min_radius, self.radius
                ),
            ));
        }
        validate_resolution(Sphere::KIND, self.resolution_longitude)?;
        validate_resolution(Sphere::KIND, self.resolution_latitude)
    }

    /// Elevations of the latitude rings relative to the centre.
    pub fn latitude_elevations(&self) -> Vec<f64> {
        linspace(
            -self.radius,
            self.radius,
            self.resolution_longitude as usize,
        )
    }

    /// Radii of the latitude rings, south to north.
    pub fn latitude_radii(&self) -> Vec<f64> {
        let n = self.resolution_longitude as usize;
        let half = n / 2;
        let r = self.radius;

        let mut levels = linspace(r, self.min_radius, half);
        levels.extend(linspace(self.min_radius, r, n - half));
        levels
            .into_iter()
            .map(|l| (r * r - l * l).max(0.0).sqrt())
            .collect()
    }

    fn rings(&self) -> Vec<Ring> {
        let center = self.center.truncate();
        self.latitude_elevations()
            .into_iter()
            .zip(self.latitude_radii())
            .map(|(z, r)| Ring::sample(r, center, self.center.z + z, self.resolution_latitude))
            .collect()
    }
}

/// A UV-style sphere generator.
#[derive(Debug, Clone, Default)]
pub struct Sphere {
    config: SphereConfig,
    rings: Option<Vec<Ring>>,
}

impl Sphere {
    pub(crate) const KIND: &'static str = "Sphere";

    /// Creates a unit sphere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sphere with the given parameters.
    pub fn with_config(config: SphereConfig) -> Self {
        Self {
            config,
            rings: None,
        }
    }

    /// Returns the parameters.
    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    /// Mutable parameters. Discards generated coordinates.
    pub fn config_mut(&mut self) -> &mut SphereConfig {
        self.rings = None;
        &mut self.config
    }

    /// Latitude rings, south to north, once created.
    pub fn rings(&self) -> Option<&[Ring]> {
        self.rings.as_deref()
    }
}

impl Primitive for Sphere {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn create(&mut self) -> ShapeResult<()> {
        self.config.validate()?;
        let rings = self.config.rings();
        debug!(
            radius = self.config.radius,
            rings = rings.len(),
            points_per_ring = self.config.resolution_latitude,
            "Created sphere"
        );
        self.rings = Some(rings);
        Ok(())
    }

    fn is_created(&self) -> bool {
        self.rings.is_some()
    }

    fn mesh(&self, name: &str) -> ShapeResult<Mesh> {
        let rings = self
            .rings
            .as_deref()
            .ok_or(ShapeError::NotCreated { shape: Self::KIND })?;

        let segments = self.config.resolution_latitude.saturating_sub(1) as usize;
        let bands = rings.len().saturating_sub(1);
        let mut mesh = Mesh::with_capacity(name, 2 * segments * bands + 2 * segments);

        for pair in rings.windows(2) {
            strip(&mut mesh, &pair[0], &pair[1])?;
        }
        if let (Some(south), Some(north)) = (rings.first(), rings.last()) {
            fan(&mut mesh, south.axis_point(), south)?;
            fan(&mut mesh, north.axis_point(), north)?;
        }
        Ok(mesh)
    }
}
