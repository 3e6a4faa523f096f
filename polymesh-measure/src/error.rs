//! Error types for measurement operations.

use polymesh_types::{FaceCorner, PolygonMesh};
use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur during measurement operations.
#[derive(Debug, Error)]
pub enum MeasureError {
    /// A face corner referenced a vertex beyond the array bounds.
    ///
    /// Indices are not validated at parse time; queries fail fast at
    /// the first dereference instead.
    #[error("{element} index {index} out of range (mesh has {count})")]
    IndexOutOfRange {
        /// Which array was indexed.
        element: &'static str,
        /// The 1-based index that failed to resolve.
        index: u32,
        /// Number of elements actually present.
        count: usize,
    },
}

impl MeasureError {
    /// Build the index error for the first unresolvable corner of a
    /// fan triangle.
    pub(crate) fn bad_corner(mesh: &PolygonMesh, corners: [FaceCorner; 3]) -> Self {
        let bad = corners
            .iter()
            .find(|c| mesh.vertex(c.vertex).is_none())
            .map_or(0, |c| c.vertex);
        Self::IndexOutOfRange {
            element: "vertex",
            index: bad,
            count: mesh.vertex_count(),
        }
    }
}
