//! Vertex and texture-coordinate types.

use nalgebra::{Point3, Vector4};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertex in 3D space with a homogeneous coordinate.
///
/// The position is stored as a `Point3<f64>` for high precision. The
/// homogeneous `w` component defaults to 1.0 (a position); transform
/// application multiplies the full 4-vector, so `w` participates in
/// translation exactly as the source format specifies.
///
/// # Example
///
/// ```
/// use polymesh_types::{Point3, Vertex};
///
/// let v1 = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// let v2 = Vertex::from_coords(1.0, 2.0, 3.0);
///
/// assert_eq!(v1.position, v2.position);
/// assert!((v1.w - 1.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Homogeneous coordinate; 1.0 for positions, 0.0 for directions.
    pub w: f64,
}

impl Vertex {
    /// Create a new vertex with `w = 1.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh_types::{Point3, Vertex};
    ///
    /// let v = Vertex::new(Point3::new(1.0, 2.0, 3.0));
    /// assert_eq!(v.position.x, 1.0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self { position, w: 1.0 }
    }

    /// Create a vertex from raw coordinates with `w = 1.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert_eq!(v.position.y, 2.0);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex with an explicit homogeneous coordinate.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn with_w(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
            w,
        }
    }

    /// The full homogeneous 4-vector `(x, y, z, w)`.
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// let h = v.homogeneous();
    /// assert_eq!(h.w, 1.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn homogeneous(&self) -> Vector4<f64> {
        Vector4::new(self.position.x, self.position.y, self.position.z, self.w)
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vertex {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::from_coords(x, y, z)
    }
}

/// A texture coordinate.
///
/// `u` and `v` are required by the source format; the optional third
/// component `w` defaults to 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TexCoord {
    /// Horizontal texture direction.
    pub u: f64,
    /// Vertical texture direction.
    pub v: f64,
    /// Optional depth component, 0.0 when absent.
    pub w: f64,
}

impl TexCoord {
    /// Create a texture coordinate with `w = 0.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh_types::TexCoord;
    ///
    /// let tc = TexCoord::new(0.5, 0.25);
    /// assert_eq!(tc.w, 0.0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v, w: 0.0 }
    }

    /// Create a texture coordinate with an explicit third component.
    #[inline]
    #[must_use]
    pub const fn with_w(u: f64, v: f64, w: f64) -> Self {
        Self { u, v, w }
    }
}
