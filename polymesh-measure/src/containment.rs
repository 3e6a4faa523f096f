//! Point-in-polyhedron test via ray casting.

use nalgebra::{Point3, Vector3};
use polymesh_types::PolygonMesh;

use crate::error::{MeasureError, MeasureResult};
use crate::ray::ray_intersects_triangle;

/// Test whether a point lies inside a closed mesh.
///
/// Casts a ray in the fixed `+X` direction and counts triangle
/// intersections over the fan-triangulated mesh; the point is inside
/// iff the count is odd. Two pruning rules keep the scan cheap:
///
/// - a triangle whose maximum X coordinate is below the point's X
///   cannot be hit by a `+X` ray and is skipped;
/// - once any triangle of a face registers a hit, the rest of that
///   face is skipped — a convex planar face cannot contribute two
///   genuine crossings.
///
/// Points outside the mesh's bounding box short-circuit to `false`.
///
/// The result is undefined for points exactly on a boundary and for
/// meshes that are not closed. Note the even/odd rule's consequence
/// for nested shells: a point enclosed by two boundaries counts as
/// outside.
///
/// # Errors
///
/// Fails fast with an index error at the first face corner whose
/// vertex reference is absent or out of range.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use polymesh_measure::contains_point;
/// use polymesh_types::unit_cube;
///
/// let cube = unit_cube();
/// assert!(contains_point(&cube, &Point3::new(0.2, 0.3, 0.4)).unwrap());
/// assert!(!contains_point(&cube, &Point3::new(1.5, 1.5, 1.5)).unwrap());
/// ```
pub fn contains_point(mesh: &PolygonMesh, point: &Point3<f64>) -> MeasureResult<bool> {
    if !mesh.bounds().contains(point) {
        return Ok(false);
    }

    let direction = Vector3::x();
    let mut intersections = 0_u32;

    for face in &mesh.faces {
        for corners in face.fan_triangles() {
            let triangle = mesh
                .resolve_triangle(corners)
                .ok_or_else(|| MeasureError::bad_corner(mesh, corners))?;

            if triangle.max_x() < point.x {
                continue;
            }

            if ray_intersects_triangle(point, &direction, &triangle) {
                intersections += 1;
                // One crossing per face at most
                break;
            }
        }
    }

    Ok(intersections % 2 == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polymesh_types::{Face, unit_cube};

    fn cube_at(center: Point3<f64>, side: f64) -> PolygonMesh {
        let mut mesh = unit_cube();
        for v in &mut mesh.vertices {
            let offset = (v.position.coords - Vector3::repeat(0.5)) * side;
            v.position = center + offset;
        }
        mesh
    }

    fn merge(a: &mut PolygonMesh, b: &PolygonMesh) {
        #[allow(clippy::cast_possible_truncation)]
        let offset = a.vertex_count() as u32;
        a.vertices.extend_from_slice(&b.vertices);
        for face in &b.faces {
            let corners = face
                .corners
                .iter()
                .map(|c| {
                    let mut c = *c;
                    c.vertex += offset;
                    c
                })
                .collect();
            a.faces.push(Face::new(corners));
        }
    }

    fn nested_cubes() -> PolygonMesh {
        let mut mesh = cube_at(Point3::origin(), 2.0);
        let inner = cube_at(Point3::origin(), 1.0);
        merge(&mut mesh, &inner);
        mesh
    }

    #[test]
    fn interior_point_is_inside() {
        let cube = unit_cube();
        assert!(contains_point(&cube, &Point3::new(0.2, 0.3, 0.4)).unwrap());
    }

    #[test]
    fn exterior_point_is_outside() {
        let cube = unit_cube();
        assert!(!contains_point(&cube, &Point3::new(1.5, 1.5, 1.5)).unwrap());
    }

    #[test]
    fn point_outside_bounds_short_circuits() {
        // Behind the cube on X: rejected by the bounding-box check
        // before any triangle is resolved.
        let cube = unit_cube();
        assert!(!contains_point(&cube, &Point3::new(-0.7, 0.3, 0.4)).unwrap());
    }

    #[test]
    fn center_of_nested_shells_is_outside() {
        // The ray crosses the inner and the outer shell once each:
        // even count, so the shared center region counts as outside.
        let mesh = nested_cubes();
        assert!(!contains_point(&mesh, &Point3::new(0.0, 0.1, 0.2)).unwrap());
    }

    #[test]
    fn between_nested_shells_is_inside() {
        // Only the outer shell lies ahead of the ray: odd count.
        let mesh = nested_cubes();
        assert!(contains_point(&mesh, &Point3::new(0.75, 0.1, 0.2)).unwrap());
    }

    #[test]
    fn bad_index_is_an_error() {
        let mut mesh = unit_cube();
        mesh.faces.push(Face::from_vertices(&[1, 2, 99]));

        let err = contains_point(&mesh, &Point3::new(0.2, 0.3, 0.4));
        assert!(matches!(
            err,
            Err(MeasureError::IndexOutOfRange { index: 99, .. })
        ));
    }
}
