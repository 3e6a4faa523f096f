//! Polygonal faces and their per-corner index triplets.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One corner of a polygonal face.
///
/// Carries independent 1-based indices into the mesh's vertex, texture
/// coordinate and normal arrays. A value of `0` means the index is
/// absent; the texture and normal indices are optional in the source
/// format and default to absent.
///
/// Negative back-references in the source text are resolved to positive
/// 1-based values at parse time, so a stored corner never holds a
/// relative index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceCorner {
    /// 1-based vertex index; `0` is invalid and rejected at use time.
    pub vertex: u32,
    /// 1-based texture-coordinate index, `0` when absent.
    pub texcoord: u32,
    /// 1-based normal index, `0` when absent.
    pub normal: u32,
}

impl FaceCorner {
    /// Create a corner referencing only a vertex.
    #[inline]
    #[must_use]
    pub const fn vertex_only(vertex: u32) -> Self {
        Self {
            vertex,
            texcoord: 0,
            normal: 0,
        }
    }

    /// Create a corner with all three indices.
    #[inline]
    #[must_use]
    pub const fn new(vertex: u32, texcoord: u32, normal: u32) -> Self {
        Self {
            vertex,
            texcoord,
            normal,
        }
    }
}

/// A polygonal face: an ordered ring of at least three corners.
///
/// Corners are stored in winding order; counter-clockwise winding viewed
/// from outside puts the face normal toward the viewer by the right-hand
/// rule. The polygon is assumed planar and convex for triangulation
/// purposes.
///
/// # Example
///
/// ```
/// use polymesh_types::{Face, FaceCorner};
///
/// let quad = Face::from_vertices(&[1, 2, 3, 4]);
/// assert_eq!(quad.corner_count(), 4);
/// assert_eq!(quad.triangle_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Corners in winding order.
    pub corners: Vec<FaceCorner>,
}

impl Face {
    /// Create a face from its corners.
    #[inline]
    #[must_use]
    pub const fn new(corners: Vec<FaceCorner>) -> Self {
        Self { corners }
    }

    /// Create a face from bare 1-based vertex indices.
    #[must_use]
    pub fn from_vertices(vertices: &[u32]) -> Self {
        Self {
            corners: vertices.iter().map(|&v| FaceCorner::vertex_only(v)).collect(),
        }
    }

    /// Number of corners.
    #[inline]
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    /// Number of triangles the fan decomposition of this face produces.
    ///
    /// A face with `n` corners fans into `n - 2` triangles; degenerate
    /// faces with fewer than three corners produce none.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.corners.len().saturating_sub(2)
    }

    /// Fan decomposition anchored at the first corner.
    ///
    /// Yields corner triples `(c0, ci, ci+1)` for `i = 1..n-2`. Only
    /// geometrically correct for convex planar polygons; non-convex
    /// faces triangulate incorrectly, which is a documented limitation
    /// of the fan scheme.
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh_types::Face;
    ///
    /// let pentagon = Face::from_vertices(&[1, 2, 3, 4, 5]);
    /// let fans: Vec<_> = pentagon.fan_triangles().collect();
    /// assert_eq!(fans.len(), 3);
    /// assert_eq!(fans[0].map(|c| c.vertex), [1, 2, 3]);
    /// assert_eq!(fans[2].map(|c| c.vertex), [1, 4, 5]);
    /// ```
    pub fn fan_triangles(&self) -> impl Iterator<Item = [FaceCorner; 3]> + '_ {
        (1..self.corners.len().saturating_sub(1))
            .map(move |i| [self.corners[0], self.corners[i], self.corners[i + 1]])
    }
}
