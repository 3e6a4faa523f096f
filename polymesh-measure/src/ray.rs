//! Möller–Trumbore ray/triangle intersection.

use nalgebra::{Point3, Vector3};
use polymesh_types::Triangle;

/// Single-precision machine epsilon widened to `f64`.
///
/// Every comparison in the intersection test uses this tolerance; the
/// test's behavior is defined in terms of single-precision resolution
/// even though positions are stored in `f64`.
#[allow(clippy::cast_lossless)]
// Cast: f64::from is not usable in a const item
pub(crate) const EPSILON: f64 = f32::EPSILON as f64;

/// Test whether a ray intersects a triangle's interior.
///
/// Closed-form barycentric test, no explicit plane equation. Returns
/// `false` when:
///
/// - the determinant is within epsilon of zero (ray parallel to the
///   triangle plane, or the triangle is degenerate),
/// - the barycentric coordinates fall outside the triangle,
/// - the hit distance `t` is at or behind the ray origin.
///
/// The direction does not need to be normalized; `t` is measured in
/// multiples of it.
///
/// # Example
///
/// ```
/// use nalgebra::{Point3, Vector3};
/// use polymesh_measure::ray_intersects_triangle;
/// use polymesh_types::Triangle;
///
/// let tri = Triangle::new(
///     Point3::new(1.0, -1.0, -1.0),
///     Point3::new(1.0, 1.0, -1.0),
///     Point3::new(1.0, 0.0, 1.0),
/// );
///
/// let origin = Point3::origin();
/// assert!(ray_intersects_triangle(&origin, &Vector3::x(), &tri));
/// assert!(!ray_intersects_triangle(&origin, &(-Vector3::x()), &tri));
/// ```
#[must_use]
pub fn ray_intersects_triangle(
    origin: &Point3<f64>,
    direction: &Vector3<f64>,
    triangle: &Triangle,
) -> bool {
    let edge1 = triangle.v1 - triangle.v0;
    let edge2 = triangle.v2 - triangle.v0;

    let h = direction.cross(&edge2);
    let det = edge1.dot(&h);

    // Parallel to the triangle plane (or degenerate triangle)
    if det > -EPSILON && det < EPSILON {
        return false;
    }

    let inv_det = 1.0 / det;
    let s = origin - triangle.v0;
    let u = inv_det * s.dot(&h);

    if u < 0.0 || u > 1.0 {
        return false;
    }

    let q = s.cross(&edge1);
    let v = inv_det * direction.dot(&q);

    if v < 0.0 || u + v > 1.0 {
        return false;
    }

    let t = inv_det * edge2.dot(&q);

    // Intersections at or behind the origin do not count
    t > EPSILON
}
