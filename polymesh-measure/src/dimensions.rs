//! Mesh dimension extraction.
//!
//! Axis-aligned bounding box dimensions and derived statistics.

use nalgebra::Point3;
use polymesh_types::PolygonMesh;

/// Result of dimension extraction.
///
/// Contains bounding box information and derived measurements.
///
/// # Example
///
/// ```
/// use polymesh_measure::dimensions;
/// use polymesh_types::unit_cube;
///
/// let dims = dimensions(&unit_cube());
/// assert!((dims.width - 1.0).abs() < 1e-10);
/// assert!((dims.height - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Dimensions {
    /// Bounding box minimum point.
    pub min: Point3<f64>,
    /// Bounding box maximum point.
    pub max: Point3<f64>,
    /// Width (X dimension).
    pub width: f64,
    /// Depth (Y dimension).
    pub depth: f64,
    /// Height (Z dimension).
    pub height: f64,
    /// Diagonal length of the bounding box.
    pub diagonal: f64,
    /// Volume of the bounding box.
    pub bounding_volume: f64,
    /// Center of the bounding box.
    pub center: Point3<f64>,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            min: Point3::origin(),
            max: Point3::origin(),
            width: 0.0,
            depth: 0.0,
            height: 0.0,
            diagonal: 0.0,
            bounding_volume: 0.0,
            center: Point3::origin(),
        }
    }
}

impl Dimensions {
    /// Get the shortest dimension.
    #[must_use]
    pub const fn min_extent(&self) -> f64 {
        self.width.min(self.depth).min(self.height)
    }

    /// Get the longest dimension.
    #[must_use]
    pub const fn max_extent(&self) -> f64 {
        self.width.max(self.depth).max(self.height)
    }
}

/// Extract dimensions of a mesh.
///
/// Computes the axis-aligned bounding box of the vertex positions and
/// derived measurements. Returns all-zero dimensions for a mesh with
/// no vertices.
///
/// # Example
///
/// ```
/// use polymesh_measure::dimensions;
/// use polymesh_types::{Face, PolygonMesh, Vertex};
///
/// let mut mesh = PolygonMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(10.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(5.0, 5.0, 0.0));
/// mesh.faces.push(Face::from_vertices(&[1, 2, 3]));
///
/// let dims = dimensions(&mesh);
/// assert!((dims.width - 10.0).abs() < 1e-10);
/// assert!((dims.depth - 5.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn dimensions(mesh: &PolygonMesh) -> Dimensions {
    let bounds = mesh.bounds();
    if bounds.is_empty() {
        return Dimensions::default();
    }

    let size = bounds.size();
    let (width, depth, height) = (size.x, size.y, size.z);

    Dimensions {
        min: bounds.min,
        max: bounds.max,
        width,
        depth,
        height,
        diagonal: height
            .mul_add(height, width.mul_add(width, depth * depth))
            .sqrt(),
        bounding_volume: width * depth * height,
        center: bounds.center(),
    }
}
