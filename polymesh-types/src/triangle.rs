//! Triangle type and the per-triangle geometry kernel.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle with concrete vertex positions.
///
/// This is the unit the geometry kernel operates on: face normals,
/// areas and signed tetrahedron volumes are all computed here, and the
/// STL writer and spatial queries consume fan-decomposed polygons as a
/// stream of these.
///
/// Winding is **counter-clockwise (CCW) when viewed from the front**
/// (normal points toward viewer).
///
/// # Example
///
/// ```
/// use polymesh_types::{Point3, Triangle};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// assert!((tri.area() - 0.5).abs() < 1e-10);
///
/// // Normal points in +Z direction
/// let normal = tri.normal().unwrap();
/// assert!((normal.z - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a triangle from coordinate arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh_types::Triangle;
    ///
    /// let tri = Triangle::from_arrays(
    ///     [0.0, 0.0, 0.0],
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    /// );
    /// assert!((tri.area() - 0.5).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(v0: [f64; 3], v1: [f64; 3], v2: [f64; 3]) -> Self {
        Self {
            v0: Point3::new(v0[0], v0[1], v0[2]),
            v1: Point3::new(v1[0], v1[1], v1[2]),
            v2: Point3::new(v2[0], v2[1], v2[2]),
        }
    }

    /// Compute the (unnormalized) face normal via cross product.
    ///
    /// The direction follows the right-hand rule with CCW winding.
    /// The magnitude equals twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Compute the unit face normal.
    ///
    /// Returns `None` for degenerate triangles (zero area); callers that
    /// need a value in that case use the zero vector, which the binary
    /// output format permits.
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh_types::{Point3, Triangle};
    ///
    /// // Collinear points: no defined normal
    /// let degen = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    /// );
    /// assert!(degen.normal().is_none());
    /// ```
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal_unnormalized();
        let len_sq = n.norm_squared();
        if len_sq > f64::EPSILON {
            Some(n / len_sq.sqrt())
        } else {
            None
        }
    }

    /// Compute the area of the triangle.
    ///
    /// Half the magnitude of the cross product of the two edge vectors
    /// from `v0`.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Signed volume of the tetrahedron formed with the origin.
    ///
    /// `dot(v0, cross(v1, v2)) / 6`. Summed over every triangle of a
    /// closed, consistently wound mesh this telescopes to the enclosed
    /// volume: positive for outward (CCW) winding, negative inside-out.
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh_types::{Point3, Triangle};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    ///     Point3::new(0.0, 0.0, 1.0),
    /// );
    /// assert!((tri.signed_origin_volume() - 1.0 / 6.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn signed_origin_volume(&self) -> f64 {
        // Using mul_add for better numerical accuracy and performance
        let cross = Vector3::new(
            self.v1.y.mul_add(self.v2.z, -(self.v1.z * self.v2.y)),
            self.v1.z.mul_add(self.v2.x, -(self.v1.x * self.v2.z)),
            self.v1.x.mul_add(self.v2.y, -(self.v1.y * self.v2.x)),
        );
        self.v0
            .z
            .mul_add(cross.z, self.v0.x.mul_add(cross.x, self.v0.y * cross.y))
            / 6.0
    }

    /// Get vertices as an array.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Create a new triangle with reversed winding (flipped normal).
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            v0: self.v0,
            v1: self.v2,
            v2: self.v1,
        }
    }

    /// Largest X coordinate among the three vertices.
    ///
    /// Used by the +X ray-cast containment query to skip triangles that
    /// lie entirely behind the ray origin.
    #[inline]
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.v0.x.max(self.v1.x).max(self.v2.x)
    }
}
