//! Surface area of a polygon mesh.

use polymesh_types::PolygonMesh;

use crate::error::{MeasureError, MeasureResult};

/// Compute the total surface area of a mesh.
///
/// Sums the area of every fan triangle of every face. The result is in
/// squared source units; open meshes and overlapping faces simply
/// contribute whatever their triangles measure.
///
/// # Errors
///
/// Fails fast with an index error at the first face corner whose
/// vertex reference is absent or out of range.
///
/// # Example
///
/// ```
/// use polymesh_measure::surface_area;
/// use polymesh_types::unit_cube;
///
/// let area = surface_area(&unit_cube()).unwrap();
/// assert!((area - 6.0).abs() < 1e-10);
/// ```
pub fn surface_area(mesh: &PolygonMesh) -> MeasureResult<f64> {
    let mut total = 0.0;

    for face in &mesh.faces {
        for corners in face.fan_triangles() {
            let triangle = mesh
                .resolve_triangle(corners)
                .ok_or_else(|| MeasureError::bad_corner(mesh, corners))?;
            total += triangle.area();
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};
    use polymesh_types::{Face, PolygonMesh, unit_cube};

    fn cube_at(center: Point3<f64>, side: f64) -> PolygonMesh {
        let mut mesh = unit_cube();
        for v in &mut mesh.vertices {
            let offset = (v.position.coords - Vector3::repeat(0.5)) * side;
            v.position = center + offset;
        }
        mesh
    }

    #[test]
    fn unit_cube_area_is_six() {
        let area = surface_area(&unit_cube()).unwrap();
        assert!((area - 6.0).abs() < 1e-10, "got {area}");
    }

    #[test]
    fn scaled_cube_area() {
        // 0.9^2 * 6 = 4.86
        let cube = cube_at(Point3::origin(), 0.9);
        let area = surface_area(&cube).unwrap();
        assert!((area - 4.86).abs() < 1e-10, "got {area}");
    }

    #[test]
    fn single_triangle_area() {
        let mut mesh = PolygonMesh::new();
        mesh.vertices.push((0.0, 0.0, 0.0).into());
        mesh.vertices.push((3.0, 0.0, 0.0).into());
        mesh.vertices.push((0.0, 4.0, 0.0).into());
        mesh.faces.push(Face::from_vertices(&[1, 2, 3]));

        let area = surface_area(&mesh).unwrap();
        assert!((area - 6.0).abs() < 1e-10);
    }

    #[test]
    fn empty_mesh_has_zero_area() {
        let area = surface_area(&PolygonMesh::new()).unwrap();
        assert!(area.abs() < f64::EPSILON);
    }

    #[test]
    fn bad_index_is_an_error() {
        let mut mesh = unit_cube();
        mesh.faces.push(Face::from_vertices(&[1, 2, 42]));

        let err = surface_area(&mesh);
        assert!(matches!(
            err,
            Err(MeasureError::IndexOutOfRange { index: 42, .. })
        ));
    }
}
