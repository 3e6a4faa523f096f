//! 3D transformation matrix operations.

use nalgebra::{Matrix4, Vector3};
use polymesh_types::{PolygonMesh, Vertex};

/// A 3D affine transformation represented as a 4x4 matrix.
///
/// Supports the builders the conversion tool exposes (translation,
/// scaling, axis rotations in degrees) and composition via
/// multiplication. Application order is right-to-left, matching
/// matrix-chain composition: `a * b` applies `b` first.
///
/// # Example
///
/// ```
/// use polymesh_transform::Transform3D;
///
/// let chain = Transform3D::translation(10.0, 5.0, 3.0)
///     * Transform3D::rotation_z(45.0)
///     * Transform3D::uniform_scale(2.0);
/// // Scales first, then rotates, then translates.
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transform3D {
    /// The 4x4 transformation matrix.
    matrix: Matrix4<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create a transformation from a 4x4 matrix.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Create the identity transformation (no change).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation.
    #[must_use]
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(tx, ty, tz)),
        }
    }

    /// Create a non-uniform scaling transformation.
    #[must_use]
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)),
        }
    }

    /// Create a uniform scaling transformation.
    #[must_use]
    pub fn uniform_scale(factor: f64) -> Self {
        Self::scale(factor, factor, factor)
    }

    /// Create a rotation around the X axis.
    ///
    /// # Arguments
    ///
    /// * `angle_deg` - Rotation angle in degrees
    #[must_use]
    pub fn rotation_x(angle_deg: f64) -> Self {
        let rad = angle_deg.to_radians();
        let cos_a = rad.cos();
        let sin_a = rad.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            1.0,   0.0,    0.0, 0.0,
            0.0, cos_a, -sin_a, 0.0,
            0.0, sin_a,  cos_a, 0.0,
            0.0,   0.0,    0.0, 1.0,
        );
        Self { matrix }
    }

    /// Create a rotation around the Y axis.
    ///
    /// # Arguments
    ///
    /// * `angle_deg` - Rotation angle in degrees
    #[must_use]
    pub fn rotation_y(angle_deg: f64) -> Self {
        let rad = angle_deg.to_radians();
        let cos_a = rad.cos();
        let sin_a = rad.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
             cos_a, 0.0, sin_a, 0.0,
               0.0, 1.0,   0.0, 0.0,
            -sin_a, 0.0, cos_a, 0.0,
               0.0, 0.0,   0.0, 1.0,
        );
        Self { matrix }
    }

    /// Create a rotation around the Z axis.
    ///
    /// # Arguments
    ///
    /// * `angle_deg` - Rotation angle in degrees
    #[must_use]
    pub fn rotation_z(angle_deg: f64) -> Self {
        let rad = angle_deg.to_radians();
        let cos_a = rad.cos();
        let sin_a = rad.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            cos_a, -sin_a, 0.0, 0.0,
            sin_a,  cos_a, 0.0, 0.0,
              0.0,    0.0, 1.0, 0.0,
              0.0,    0.0, 0.0, 1.0,
        );
        Self { matrix }
    }

    /// Get the underlying 4x4 matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Compose this transformation with another (self then other).
    ///
    /// The result applies `self` first, then `other`. Equivalent to
    /// `other * self`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Compute the inverse transformation.
    ///
    /// # Returns
    ///
    /// `Some(inverse)` if the matrix is invertible, `None` otherwise.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|m| Self { matrix: m })
    }

    /// Transform a vertex through the full 4x4 matrix.
    ///
    /// The homogeneous `w` row participates, so a vertex with `w = 0`
    /// behaves as a direction (translation has no effect on it) and the
    /// result carries the transformed `w`.
    #[must_use]
    pub fn transform_vertex(&self, vertex: &Vertex) -> Vertex {
        let h = self.matrix * vertex.homogeneous();
        Vertex::with_w(h.x, h.y, h.z, h.w)
    }

    /// Apply this transformation to every vertex of a mesh, in place.
    ///
    /// Rewrites vertex positions only; texture coordinates and stored
    /// normals are left untouched. Stored normals therefore go stale
    /// under rotation or non-uniform scaling; the binary writer
    /// recomputes normals for corners that lack an explicit one.
    pub fn apply_to_mesh(&self, mesh: &mut PolygonMesh) {
        for vertex in &mut mesh.vertices {
            *vertex = self.transform_vertex(vertex);
        }
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    /// Matrix-chain composition: `a * b` applies `b` first.
    fn mul(self, rhs: Self) -> Self {
        Self {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_leaves_vertices_unchanged() {
        let t = Transform3D::identity();
        let v = Vertex::from_coords(1.0, 2.0, 3.0);
        let result = t.transform_vertex(&v);

        assert_relative_eq!(result.position.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(result.position.y, 2.0, epsilon = 1e-10);
        assert_relative_eq!(result.position.z, 3.0, epsilon = 1e-10);
        assert_relative_eq!(result.w, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn translation() {
        let t = Transform3D::translation(10.0, 20.0, 30.0);
        let result = t.transform_vertex(&Vertex::from_coords(1.0, 2.0, 3.0));

        assert_relative_eq!(result.position.x, 11.0, epsilon = 1e-10);
        assert_relative_eq!(result.position.y, 22.0, epsilon = 1e-10);
        assert_relative_eq!(result.position.z, 33.0, epsilon = 1e-10);
    }

    #[test]
    fn translation_ignores_directions() {
        // w = 0 marks a homogeneous direction
        let t = Transform3D::translation(10.0, 20.0, 30.0);
        let result = t.transform_vertex(&Vertex::with_w(1.0, 0.0, 0.0, 0.0));

        assert_relative_eq!(result.position.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(result.position.y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(result.position.z, 0.0, epsilon = 1e-10);
        assert_relative_eq!(result.w, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn uniform_scale() {
        let t = Transform3D::uniform_scale(2.0);
        let result = t.transform_vertex(&Vertex::from_coords(1.0, 2.0, 3.0));

        assert_relative_eq!(result.position.x, 2.0, epsilon = 1e-10);
        assert_relative_eq!(result.position.y, 4.0, epsilon = 1e-10);
        assert_relative_eq!(result.position.z, 6.0, epsilon = 1e-10);
    }

    #[test]
    fn rotation_z_90_degrees() {
        let t = Transform3D::rotation_z(90.0);
        let result = t.transform_vertex(&Vertex::from_coords(1.0, 0.0, 0.0));

        assert_relative_eq!(result.position.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(result.position.y, 1.0, epsilon = 1e-10);
        assert_relative_eq!(result.position.z, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn rotation_x_full_turn_is_identity() {
        let t = Transform3D::rotation_x(360.0);
        let result = t.transform_vertex(&Vertex::from_coords(0.0, 1.0, 0.0));

        assert_relative_eq!(result.position.y, 1.0, epsilon = 1e-10);
        assert_relative_eq!(result.position.z, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn mul_applies_right_operand_first() {
        let translate = Transform3D::translation(1.0, 0.0, 0.0);
        let scale = Transform3D::uniform_scale(2.0);

        // scale first, then translate
        let chain = translate * scale;
        let result = chain.transform_vertex(&Vertex::from_coords(1.0, 0.0, 0.0));
        assert_relative_eq!(result.position.x, 3.0, epsilon = 1e-10);

        // translate first, then scale
        let chain = scale * translate;
        let result = chain.transform_vertex(&Vertex::from_coords(1.0, 0.0, 0.0));
        assert_relative_eq!(result.position.x, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn then_matches_reversed_mul() {
        let a = Transform3D::translation(1.0, 2.0, 3.0);
        let b = Transform3D::uniform_scale(2.0);

        let v = Vertex::from_coords(1.0, 1.0, 1.0);
        let via_then = a.then(&b).transform_vertex(&v);
        let via_mul = (b * a).transform_vertex(&v);

        assert_relative_eq!(via_then.position.x, via_mul.position.x, epsilon = 1e-12);
        assert_relative_eq!(via_then.position.y, via_mul.position.y, epsilon = 1e-12);
        assert_relative_eq!(via_then.position.z, via_mul.position.z, epsilon = 1e-12);
    }

    #[test]
    fn inverse_round_trips() {
        let t = Transform3D::translation(10.0, 20.0, 30.0) * Transform3D::rotation_y(30.0);
        let inv = t.inverse();
        assert!(inv.is_some());

        let inv = inv.unwrap_or_default();
        let v = Vertex::from_coords(4.0, 5.0, 6.0);
        let back = inv.transform_vertex(&t.transform_vertex(&v));

        assert_relative_eq!(back.position.x, 4.0, epsilon = 1e-10);
        assert_relative_eq!(back.position.y, 5.0, epsilon = 1e-10);
        assert_relative_eq!(back.position.z, 6.0, epsilon = 1e-10);
    }

    #[test]
    fn apply_identity_to_mesh_is_noop() {
        let mut mesh = polymesh_types::unit_cube();
        let before: Vec<_> = mesh.vertices.clone();

        Transform3D::identity().apply_to_mesh(&mut mesh);

        for (a, b) in before.iter().zip(&mesh.vertices) {
            assert_relative_eq!(a.position.x, b.position.x, epsilon = 1e-15);
            assert_relative_eq!(a.position.y, b.position.y, epsilon = 1e-15);
            assert_relative_eq!(a.position.z, b.position.z, epsilon = 1e-15);
            assert_relative_eq!(a.w, b.w, epsilon = 1e-15);
        }
    }

    #[test]
    fn apply_to_mesh_leaves_topology_and_normals() {
        let mut mesh = polymesh_types::unit_cube();
        mesh.normals.push(nalgebra::Vector3::z());
        let faces_before = mesh.faces.len();

        Transform3D::rotation_z(90.0).apply_to_mesh(&mut mesh);

        assert_eq!(mesh.faces.len(), faces_before);
        // Stored normals are deliberately untouched
        assert_relative_eq!(mesh.normals[0].z, 1.0, epsilon = 1e-15);
    }
}
