//! Affine transforms for polygon meshes.
//!
//! This crate provides [`Transform3D`], a 4x4 homogeneous transformation
//! with builders for the operations the conversion tool exposes:
//! identity, translation, scaling, and axis rotations (in degrees).
//! Transforms compose via multiplication and apply right-to-left.
//!
//! # Example
//!
//! ```
//! use polymesh_transform::Transform3D;
//! use polymesh_types::unit_cube;
//!
//! let mut mesh = unit_cube();
//!
//! let transform = Transform3D::translation(10.0, 5.0, 3.0)
//!     * Transform3D::rotation_z(45.0)
//!     * Transform3D::rotation_y(45.0)
//!     * Transform3D::rotation_x(45.0)
//!     * Transform3D::uniform_scale(2.0);
//!
//! transform.apply_to_mesh(&mut mesh);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod transform;

pub use transform::Transform3D;
