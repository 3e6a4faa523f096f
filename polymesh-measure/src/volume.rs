//! Enclosed volume via signed tetrahedra.

use polymesh_types::PolygonMesh;
use tracing::debug;

use crate::error::{MeasureError, MeasureResult};

/// Compute the signed volume of a mesh.
///
/// Sums the signed volume of the tetrahedron each fan triangle forms
/// with the origin. Over a closed, consistently wound mesh the sum
/// telescopes to the enclosed volume:
///
/// - Positive: winding is counter-clockwise viewed from outside
///   (normals point outward)
/// - Negative: the mesh is inside-out
/// - Near zero: the mesh is open or inconsistently wound, and the
///   result is not meaningful as a volume
///
/// # Errors
///
/// Fails fast with an index error at the first face corner whose
/// vertex reference is absent or out of range.
pub fn signed_volume(mesh: &PolygonMesh) -> MeasureResult<f64> {
    let mut total = 0.0;

    for face in &mesh.faces {
        for corners in face.fan_triangles() {
            let triangle = mesh
                .resolve_triangle(corners)
                .ok_or_else(|| MeasureError::bad_corner(mesh, corners))?;
            total += triangle.signed_origin_volume();
        }
    }

    debug!(signed_volume = total, "accumulated tetrahedron sum");
    Ok(total)
}

/// Compute the absolute enclosed volume of a closed mesh.
///
/// The absolute value of [`signed_volume`], so a consistently
/// inside-out mesh measures the same as its corrected counterpart.
/// Requires a closed, consistently wound mesh to be meaningful.
///
/// # Errors
///
/// Fails fast with an index error at the first face corner whose
/// vertex reference is absent or out of range.
///
/// # Example
///
/// ```
/// use polymesh_measure::volume;
/// use polymesh_types::unit_cube;
///
/// let v = volume(&unit_cube()).unwrap();
/// assert!((v - 1.0).abs() < 1e-10);
/// ```
pub fn volume(mesh: &PolygonMesh) -> MeasureResult<f64> {
    signed_volume(mesh).map(f64::abs)
}
