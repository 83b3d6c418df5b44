//! # Configuration Constants
//!
//! Centralized constants for shape generation and mesh serialization.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Shape Defaults**: Radius, height, resolution and elevation defaults
//! - **Output**: Output directory and file naming

use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when comparing generated coordinates.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Default radius for circles, cylinders, tetrahedra, pyramids and spheres.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default cylinder and cuboid height along Z.
pub const DEFAULT_HEIGHT: f64 = 1.0;

/// Default cuboid side length.
///
/// The cuboid is sampled as a 4-sided prism whose circumradius is
/// `side / sqrt(2)`.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SIDE_LENGTH;
/// let circumradius = DEFAULT_SIDE_LENGTH / 2.0_f64.sqrt();
/// assert!(circumradius < DEFAULT_SIDE_LENGTH);
/// ```
pub const DEFAULT_SIDE_LENGTH: f64 = 1.0;

/// Default number of perimeter samples for a circle.
///
/// Samples span `[0, 2π]` inclusively, so a resolution of `n` yields
/// `n - 1` fan triangles.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CIRCLE_RESOLUTION;
/// let triangles = DEFAULT_CIRCLE_RESOLUTION - 1;
/// assert_eq!(triangles, 9);
/// ```
pub const DEFAULT_CIRCLE_RESOLUTION: u32 = 10;

/// Default number of perimeter samples for each cylinder ring.
pub const DEFAULT_CYLINDER_RESOLUTION: u32 = 10;

/// Fixed ring resolution for cuboids (4 distinct corners plus the repeated
/// closing sample).
pub const CUBOID_RESOLUTION: u32 = 5;

/// Fixed base resolution for tetrahedra (3 distinct base corners).
pub const TETRAHEDRON_RESOLUTION: u32 = 4;

/// Fixed base resolution for pyramids (4 distinct base corners).
pub const PYRAMID_RESOLUTION: u32 = 5;

/// Default base elevation of tetrahedra and pyramids. The apex sits at the
/// origin, so a negative elevation points the solid upwards.
pub const DEFAULT_APEX_ELEVATION: f64 = -2.0;

/// Default sphere resolution, used both for the number of latitude circles
/// and the number of samples on each circle.
pub const DEFAULT_SPHERE_RESOLUTION: u32 = 20;

/// Default floor of the sphere's radius variation curve.
pub const DEFAULT_SPHERE_MIN_RADIUS: f64 = 0.1;

/// Smallest ring resolution that still produces one segment.
///
/// # Examples
/// ```
/// use config::constants::MIN_RING_RESOLUTION;
/// assert_eq!(MIN_RING_RESOLUTION, 2);
/// ```
pub const MIN_RING_RESOLUTION: u32 = 2;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Directory used when the caller does not supply one.
pub const DEFAULT_OUTPUT_DIR: &str = "Results";

/// File extension of the text mesh format.
pub const MESH_FILE_EXTENSION: &str = "stl";

/// Solid name used for rotated meshes whose output path has no file stem.
pub const DEFAULT_ROTATED_NAME: &str = "rotated";

/// Immutable snapshot of the settings shared by the generator and I/O
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(!config.strict_parsing);
/// assert_eq!(config.output_dir.to_str(), Some("Results"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalConfig {
    /// Directory that generated meshes are written into.
    pub output_dir: PathBuf,
    /// Reject malformed numeric rows instead of zero-filling them.
    pub strict_parsing: bool,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting an empty output directory.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new("out", true).expect("valid config");
    /// assert!(cfg.strict_parsing);
    /// ```
    pub fn new(output_dir: impl AsRef<Path>, strict_parsing: bool) -> Result<Self, ConfigError> {
        let output_dir = output_dir.as_ref();
        if output_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            strict_parsing,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            strict_parsing: false,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the output directory path is empty.
    EmptyOutputDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyOutputDir => write!(f, "output directory must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
