//! # Sampled Rings
//!
//! Horizontal rings of points at a fixed elevation. Every primitive is
//! built from one or more rings.

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};

use crate::error::{ShapeError, ShapeResult};

/// Returns `count` evenly spaced values from `start` to `end` inclusive.
///
/// A single sample is `start`; zero samples is empty.
///
/// # Examples
/// ```text
/// linspace(0.0, 1.0, 5) -> [0.0, 0.25, 0.5, 0.75, 1.0]
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Perimeter samples of a circle lying in the plane `z = elevation`.
///
/// Samples cover `[0, 2π]` inclusively, so the last point repeats the
/// first and a ring of `n` samples has `n - 1` segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    x: Vec<f64>,
    y: Vec<f64>,
    center: DVec2,
    elevation: f64,
}

impl Ring {
    /// Samples `resolution` points of a circle.
    pub fn sample(radius: f64, center: DVec2, elevation: f64, resolution: u32) -> Self {
        let theta = linspace(0.0, TAU, resolution as usize);
        let x = theta.iter().map(|t| radius * t.cos() + center.x).collect();
        let y = theta.iter().map(|t| radius * t.sin() + center.y).collect();
        Self {
            x,
            y,
            center,
            elevation,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_coordinates(x: Vec<f64>, y: Vec<f64>, center: DVec2, elevation: f64) -> Self {
        Self {
            x,
            y,
            center,
            elevation,
        }
    }

    /// Checks that the x and y arrays pair up.
    pub fn validate(&self) -> ShapeResult<()> {
        if self.x.len() != self.y.len() {
            return Err(ShapeError::CoordinateMismatch {
                x: self.x.len(),
                y: self.y.len(),
            });
        }
        Ok(())
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if the ring has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The x coordinates.
    #[inline]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The y coordinates.
    #[inline]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The shared z coordinate.
    #[inline]
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// The ring's centre lifted to its elevation.
    pub fn center(&self) -> DVec3 {
        self.center.extend(self.elevation)
    }

    /// The point on the z-axis at the ring's elevation.
    pub fn axis_point(&self) -> DVec3 {
        DVec3::new(0.0, 0.0, self.elevation)
    }

    /// Sample `i` as a 3D point.
    #[inline]
    pub fn point(&self, i: usize) -> DVec3 {
        DVec3::new(self.x[i], self.y[i], self.elevation)
    }
}
