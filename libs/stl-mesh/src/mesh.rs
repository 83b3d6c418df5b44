//! # Mesh Data Structure
//!
//! Named triangle soup with one facet normal per triangle.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::normal::facet_normal;

/// An ordered triple of points. The winding order decides the sign of the
/// normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    points: [DVec3; 3],
}

impl Triangle {
    /// Creates a triangle from its three corners.
    pub fn new(p1: DVec3, p2: DVec3, p3: DVec3) -> Self {
        Self {
            points: [p1, p2, p3],
        }
    }

    /// Creates a triangle from a point list, which must hold exactly 3
    /// points.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use stl_mesh::Triangle;
    ///
    /// assert!(Triangle::from_points(&[DVec3::ZERO, DVec3::X, DVec3::Y]).is_ok());
    /// assert!(Triangle::from_points(&[DVec3::ZERO, DVec3::X]).is_err());
    /// ```
    pub fn from_points(points: &[DVec3]) -> MeshResult<Self> {
        match points {
            [p1, p2, p3] => Ok(Self::new(*p1, *p2, *p3)),
            _ => Err(MeshError::TriangleArity { got: points.len() }),
        }
    }

    /// Returns the corners in winding order.
    #[inline]
    pub fn points(&self) -> &[DVec3; 3] {
        &self.points
    }

    /// Computes the unit normal (zero for degenerate triangles).
    pub fn normal(&self) -> DVec3 {
        let [p1, p2, p3] = self.points;
        facet_normal(p1, p2, p3)
    }

    /// Returns the triangle with every corner mapped through `f`.
    pub fn map(&self, f: impl Fn(DVec3) -> DVec3) -> Self {
        let [p1, p2, p3] = self.points;
        Self::new(f(p1), f(p2), f(p3))
    }
}

/// A named mesh of `(Triangle, normal)` facets.
///
/// Generators build a mesh incrementally with [`Mesh::add_triangle`], then
/// hand it to the writer. Triangles and normals always have the same length.
///
/// # Example
///
/// ```rust
/// use stl_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new("tri");
/// mesh.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(mesh.triangle_count(), 1);
/// assert_eq!(mesh.normals()[0], DVec3::Z);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeshParts")]
pub struct Mesh {
    name: String,
    triangles: Vec<Triangle>,
    normals: Vec<DVec3>,
}

/// Unchecked field layout of [`Mesh`], validated by [`Mesh::from_parts`]
/// on deserialization.
#[derive(Deserialize)]
struct MeshParts {
    name: String,
    triangles: Vec<Triangle>,
    normals: Vec<DVec3>,
}

impl TryFrom<MeshParts> for Mesh {
    type Error = MeshError;

    fn try_from(parts: MeshParts) -> MeshResult<Self> {
        Mesh::from_parts(parts.name, parts.triangles, parts.normals)
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            triangles: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Creates an empty mesh with room for `triangle_count` facets.
    pub fn with_capacity(name: impl Into<String>, triangle_count: usize) -> Self {
        Self {
            name: name.into(),
            triangles: Vec::with_capacity(triangle_count),
            normals: Vec::with_capacity(triangle_count),
        }
    }

    /// Builds a mesh from parallel triangle and normal lists.
    ///
    /// # Errors
    ///
    /// [`MeshError::LengthMismatch`] when the lists differ in length.
    pub fn from_parts(
        name: impl Into<String>,
        triangles: Vec<Triangle>,
        normals: Vec<DVec3>,
    ) -> MeshResult<Self> {
        if triangles.len() != normals.len() {
            return Err(MeshError::LengthMismatch {
                triangles: triangles.len(),
                normals: normals.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            triangles,
            normals,
        })
    }

    /// Returns the solid name written into the header.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no facets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a triangle and its computed normal.
    pub fn add_triangle(&mut self, p1: DVec3, p2: DVec3, p3: DVec3) {
        let triangle = Triangle::new(p1, p2, p3);
        self.normals.push(triangle.normal());
        self.triangles.push(triangle);
    }

    /// Adds a triangle with an externally supplied normal.
    pub fn push_facet(&mut self, triangle: Triangle, normal: DVec3) {
        self.triangles.push(triangle);
        self.normals.push(normal);
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the facet normals, one per triangle.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Iterates over `(triangle, normal)` pairs.
    pub fn facets(&self) -> impl Iterator<Item = (&Triangle, &DVec3)> {
        self.triangles.iter().zip(self.normals.iter())
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut points = self.triangles.iter().flat_map(|t| t.points().iter().copied());
        let Some(first) = points.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
    }
}
