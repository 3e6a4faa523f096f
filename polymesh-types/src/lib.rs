//! Core polygon-mesh types for the polymesh crate family.
//!
//! This crate provides the foundational types for converting polygonal
//! text-format meshes to triangulated binary output and querying them:
//!
//! - [`Vertex`] - A point in 3D space with a homogeneous coordinate
//! - [`TexCoord`] - A texture coordinate
//! - [`FaceCorner`] / [`Face`] - Polygonal faces with per-corner index triplets
//! - [`PolygonMesh`] - The mesh model owning all four element arrays
//! - [`Triangle`] - A concrete triangle with the per-triangle geometry kernel
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`; derived
//! quantities (area, volume) are in whatever units the source vertices use.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**. Face winding is
//! **counter-clockwise (CCW) when viewed from outside**; normals point
//! outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use polymesh_types::{Face, PolygonMesh, Vertex};
//!
//! // Create a simple triangle mesh
//! let mut mesh = PolygonMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
//! mesh.faces.push(Face::from_vertices(&[1, 2, 3]));
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod face;
mod mesh;
mod triangle;
mod vertex;

// Re-export core types
pub use bounds::Aabb;
pub use face::{Face, FaceCorner};
pub use mesh::{PolygonMesh, unit_cube};
pub use triangle::Triangle;
pub use vertex::{TexCoord, Vertex};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
