//! Polygon-mesh conversion toolkit.
//!
//! This umbrella crate re-exports the polymesh-* crates, providing a
//! unified API for converting text-format polygon meshes to binary
//! triangulated output and querying them geometrically.
//!
//! # Quick Start
//!
//! ```no_run
//! use polymesh::prelude::*;
//!
//! // Load a polygonal mesh from OBJ text
//! let mut mesh = polymesh::io::load_obj("model.obj").unwrap();
//!
//! // Move it into place
//! let transform = Transform3D::translation(10.0, 5.0, 3.0)
//!     * Transform3D::rotation_z(45.0)
//!     * Transform3D::uniform_scale(2.0);
//! transform.apply_to_mesh(&mut mesh);
//!
//! // Query it
//! let area = polymesh::measure::surface_area(&mesh).unwrap();
//! let volume = polymesh::measure::volume(&mesh).unwrap();
//!
//! // Write fan-triangulated binary STL
//! polymesh::io::save_stl(&mesh, "model.stl").unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `PolygonMesh`, `Vertex`, `Face`,
//!   `Triangle`, `Aabb`
//! - [`io`] - OBJ parsing, binary STL writing, the conversion table
//! - [`transform`] - 4x4 affine transforms
//! - [`measure`] - Surface area, volume, point containment, dimensions

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `PolygonMesh`, `Vertex`, `Face`, `Triangle`, `Aabb`.
pub use polymesh_types as types;

/// OBJ parsing, binary STL writing, format detection and conversion.
pub use polymesh_io as io;

/// 4x4 affine transforms.
pub use polymesh_transform as transform;

/// Surface area, volume, point containment, dimensions.
pub use polymesh_measure as measure;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for mesh conversion.
///
/// # Usage
///
/// ```
/// use polymesh::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use polymesh_types::{Aabb, Face, FaceCorner, PolygonMesh, TexCoord, Triangle, Vertex};

    // I/O
    pub use polymesh_io::{MeshFormat, convert, load_obj, save_stl};

    // Transform
    pub use polymesh_transform::Transform3D;

    // Queries
    pub use polymesh_measure::{contains_point, surface_area, volume};
}

// =============================================================================
// Tests
// =============================================================================
