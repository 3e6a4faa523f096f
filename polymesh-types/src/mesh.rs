//! Polygon mesh owning vertex, texture-coordinate, normal and face arrays.

use crate::{Aabb, Face, FaceCorner, TexCoord, Triangle, Vertex};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon mesh as described by the text interchange format.
///
/// Owns four append-only arrays whose insertion order is the file
/// order: vertices, texture coordinates, normals and polygonal faces.
/// Face corners reference the first three arrays by 1-based index
/// (`0` = absent); indices are not validated eagerly — lookups return
/// `Option` and consumers fail fast on the first bad reference.
///
/// A mesh is populated once by parsing, optionally mutated in place by
/// a transform, and read-only afterwards for queries and writing.
///
/// # Example
///
/// ```
/// use polymesh_types::{Face, PolygonMesh, Vertex};
///
/// let mut mesh = PolygonMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push(Face::from_vertices(&[1, 2, 3]));
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonMesh {
    /// Vertex positions with homogeneous coordinates.
    pub vertices: Vec<Vertex>,

    /// Texture coordinates.
    pub texcoords: Vec<TexCoord>,

    /// Normals; not guaranteed unit length by the parser.
    pub normals: Vec<Vector3<f64>>,

    /// Polygonal faces referencing the arrays above.
    pub faces: Vec<Face>,
}

impl PolygonMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            texcoords: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated vertex and face capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            texcoords: Vec::new(),
            normals: Vec::new(),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of texture coordinates.
    #[inline]
    #[must_use]
    pub fn texcoord_count(&self) -> usize {
        self.texcoords.len()
    }

    /// Number of normals.
    #[inline]
    #[must_use]
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// Number of polygonal faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of triangles produced by fan-decomposing every face.
    ///
    /// Equals `Σ (corner_count - 2)` over all faces, which is also the
    /// triangle count of the binary output.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(Face::triangle_count).sum()
    }

    /// Check if the mesh has no renderable content.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Look up a vertex by 1-based index.
    ///
    /// Returns `None` for `0` (absent) and for out-of-range indices.
    #[inline]
    #[must_use]
    pub fn vertex(&self, index: u32) -> Option<&Vertex> {
        self.vertices.get((index as usize).checked_sub(1)?)
    }

    /// Look up a texture coordinate by 1-based index.
    #[inline]
    #[must_use]
    pub fn texcoord(&self, index: u32) -> Option<&TexCoord> {
        self.texcoords.get((index as usize).checked_sub(1)?)
    }

    /// Look up a normal by 1-based index.
    #[inline]
    #[must_use]
    pub fn normal(&self, index: u32) -> Option<&Vector3<f64>> {
        self.normals.get((index as usize).checked_sub(1)?)
    }

    /// Resolve a fan-triangle corner triple to concrete positions.
    ///
    /// Returns `None` if any corner's vertex index is absent or out of
    /// range; callers surface that as their own index error.
    #[must_use]
    pub fn resolve_triangle(&self, corners: [FaceCorner; 3]) -> Option<Triangle> {
        Some(Triangle::new(
            self.vertex(corners[0].vertex)?.position,
            self.vertex(corners[1].vertex)?.position,
            self.vertex(corners[2].vertex)?.position,
        ))
    }

    /// Axis-aligned bounding box of the vertex positions.
    ///
    /// Returns the empty box for a mesh with no vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}

/// Helper function to create a unit cube mesh.
///
/// Creates a cube from (0,0,0) to (1,1,1) as six quadrilateral faces
/// with counter-clockwise winding viewed from outside, so the fan
/// decomposition yields 12 outward-facing triangles.
///
/// # Example
///
/// ```
/// use polymesh_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 6);
/// assert_eq!(cube.triangle_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> PolygonMesh {
    let mut mesh = PolygonMesh::with_capacity(8, 6);

    // 8 vertices of the cube
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0)); // 2
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0)); // 4
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 1.0)); // 6
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 1.0)); // 7
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 1.0)); // 8

    // 6 quads, CCW winding when viewed from outside

    // Bottom face (z=0) - normal points -Z
    mesh.faces.push(Face::from_vertices(&[1, 4, 3, 2]));

    // Top face (z=1) - normal points +Z
    mesh.faces.push(Face::from_vertices(&[5, 6, 7, 8]));

    // Front face (y=0) - normal points -Y
    mesh.faces.push(Face::from_vertices(&[1, 2, 6, 5]));

    // Back face (y=1) - normal points +Y
    mesh.faces.push(Face::from_vertices(&[4, 8, 7, 3]));

    // Left face (x=0) - normal points -X
    mesh.faces.push(Face::from_vertices(&[1, 5, 8, 4]));

    // Right face (x=1) - normal points +X
    mesh.faces.push(Face::from_vertices(&[2, 3, 7, 6]));

    mesh
}
