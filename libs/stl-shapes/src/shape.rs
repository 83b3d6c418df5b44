//! # Shape
//!
//! Closed set of all primitives behind one type, for callers that build
//! scenes from mixed shapes.

use stl_mesh::Mesh;

use crate::error::ShapeResult;
use crate::primitives::circle::{Circle, CircleConfig};
use crate::primitives::cuboid::{Cuboid, CuboidConfig};
use crate::primitives::cylinder::{Cylinder, CylinderConfig};
use crate::primitives::pyramid::{Pyramid, PyramidConfig};
use crate::primitives::sphere::{Sphere, SphereConfig};
use crate::primitives::tetrahedron::{Tetrahedron, TetrahedronConfig};
use crate::primitives::Primitive;

/// Any primitive shape.
///
/// # Example
///
/// ```rust,no_run
/// use stl_shapes::{OutputDir, Primitive, Shape, SphereConfig};
///
/// let mut shape = Shape::from(SphereConfig { radius: 2.0, ..Default::default() });
/// shape.create()?;
/// let path = shape.export_to(&OutputDir::new("Results"), "ball")?;
/// # Ok::<(), stl_shapes::ShapeError>(())
/// ```
#[derive(Debug, Clone)]
pub enum Shape {
    /// Flat disc.
    Circle(Circle),
    /// Cylinder or frustum.
    Cylinder(Cylinder),
    /// Square prism.
    Cuboid(Cuboid),
    /// Three-sided pyramid with its apex at the origin.
    Tetrahedron(Tetrahedron),
    /// Four-sided pyramid with its apex at the origin.
    Pyramid(Pyramid),
    /// Stacked latitude rings.
    Sphere(Sphere),
}

macro_rules! dispatch {
    ($self:expr, $shape:ident => $body:expr) => {
        match $self {
            Shape::Circle($shape) => $body,
            Shape::Cylinder($shape) => $body,
            Shape::Cuboid($shape) => $body,
            Shape::Tetrahedron($shape) => $body,
            Shape::Pyramid($shape) => $body,
            Shape::Sphere($shape) => $body,
        }
    };
}

impl Primitive for Shape {
    fn kind(&self) -> &'static str {
        dispatch!(self, s => s.kind())
    }

    fn create(&mut self) -> ShapeResult<()> {
        dispatch!(self, s => s.create())
    }

    fn is_created(&self) -> bool {
        dispatch!(self, s => s.is_created())
    }

    fn mesh(&self, name: &str) -> ShapeResult<Mesh> {
        dispatch!(self, s => s.mesh(name))
    }
}

macro_rules! impl_from {
    ($($variant:ident($shape:ty, $config:ty)),* $(,)?) => {
        $(
            impl From<$shape> for Shape {
                fn from(shape: $shape) -> Self {
                    Shape::$variant(shape)
                }
            }

            impl From<$config> for Shape {
                fn from(config: $config) -> Self {
                    Shape::$variant(<$shape>::with_config(config))
                }
            }
        )*
    };
}

impl_from! {
    Circle(Circle, CircleConfig),
    Cylinder(Cylinder, CylinderConfig),
    Cuboid(Cuboid, CuboidConfig),
    Tetrahedron(Tetrahedron, TetrahedronConfig),
    Pyramid(Pyramid, PyramidConfig),
    Sphere(Sphere, SphereConfig),
}
