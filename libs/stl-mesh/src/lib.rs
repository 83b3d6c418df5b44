//! # STL Mesh
//!
//! Triangle meshes and the plain-text mesh interchange format.
//!
//! ## Architecture
//!
//! ```text
//! Mesh ──write_mesh──▶ text file ──read_stl──▶ MeshArray ──translate/rotate──▶ MeshArray / text file
//! ```
//!
//! - **Normals**: right-hand-rule unit normals, zero for degenerate facets
//! - **Writer**: exact `solid`/`facet`/`vertex` layout with full precision
//! - **Reader**: lenient (zero-fill) or strict parsing into a padded array
//! - **Transforms**: translation of vertex rows, rotation with recomputed
//!   normals
//!
//! ## Usage
//!
//! ```rust,no_run
//! use glam::DVec3;
//! use stl_mesh::{read_stl, rotate, translate, write_mesh, Mesh};
//!
//! let mut mesh = Mesh::new("tri");
//! mesh.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
//! write_mesh("tri.stl", &mesh)?;
//!
//! let array = read_stl("tri.stl")?;
//! let moved = translate(array, 1.0, 0.0, 0.0)?;
//! rotate(&moved, 0.0, 0.0, 90.0, "tri_rotated.stl")?;
//! # Ok::<(), stl_mesh::MeshError>(())
//! ```

pub mod array;
pub mod error;
pub mod mesh;
pub mod normal;
pub mod reader;
pub mod transform;
pub mod writer;

pub use array::{MeshArray, ROWS_PER_FACET};
pub use error::{MeshError, MeshResult};
pub use mesh::{Mesh, Triangle};
pub use normal::facet_normal;
pub use reader::{parse_stl, read_stl, read_stl_with, ParseMode};
pub use transform::{rotate, rotated, rotation_matrix, translate};
pub use writer::{write_mesh, write_stl};
