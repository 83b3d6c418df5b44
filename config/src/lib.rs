//! # Config Crate
//!
//! Centralized configuration constants for the STL shape generators and the
//! mesh I/O layer. Shape defaults, tolerances and output locations are
//! defined here so the library crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CIRCLE_RESOLUTION, DEFAULT_RADIUS, EPSILON_TOLERANCE};
//!
//! // A freshly configured circle uses the shared defaults.
//! let resolution = DEFAULT_CIRCLE_RESOLUTION;
//! let radius = DEFAULT_RADIUS;
//! assert!(resolution >= 2);
//! assert!(radius > EPSILON_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Ambient State**: Output locations are values, never process globals
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
