//! # STL Shapes
//!
//! Parametric primitive generators that write text meshes.
//!
//! ## Architecture
//!
//! ```text
//! Config ──create()──▶ Rings ──fan/strip──▶ Mesh (stl-mesh) ──export──▶ text file
//! ```
//!
//! Every shape is a variant of the closed [`Shape`] set and shares the ring
//! sampling and triangulation helpers in [`primitives::ring`] and
//! [`primitives::triangulate`]:
//! - **Circle**: fan from the ring centre
//! - **Cylinder / Cuboid**: strip between two rings, optional cap fans
//! - **Tetrahedron / Pyramid**: fan from the origin, optional square base
//! - **Sphere**: strips between stacked latitude rings, fans at both poles
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stl_shapes::{Cylinder, CylinderConfig, OutputDir, Primitive};
//!
//! let mut cylinder = Cylinder::with_config(CylinderConfig {
//!     height: 2.0,
//!     close: true,
//!     ..Default::default()
//! });
//! cylinder.create()?;
//! cylinder.export_to(&OutputDir::default(), "cylinder")?;
//! # Ok::<(), stl_shapes::ShapeError>(())
//! ```

pub mod error;
pub mod output;
pub mod primitives;
pub mod shape;

pub use error::{ShapeError, ShapeResult};
pub use output::OutputDir;
pub use primitives::circle::{Circle, CircleConfig};
pub use primitives::cuboid::{Cuboid, CuboidConfig};
pub use primitives::cylinder::{Cylinder, CylinderConfig};
pub use primitives::pyramid::{Pyramid, PyramidConfig};
pub use primitives::sphere::{Sphere, SphereConfig};
pub use primitives::tetrahedron::{Tetrahedron, TetrahedronConfig};
pub use primitives::Primitive;
pub use shape::Shape;
