//! Geometric queries over polygon meshes.
//!
//! This crate provides the spatial queries of the conversion tool:
//!
//! - **Surface area**: sum over the fan-triangulated faces
//! - **Volume**: signed-tetrahedron accumulation over a closed mesh
//! - **Point containment**: `+X` ray casting with the even/odd rule
//! - **Ray/triangle intersection**: the Möller–Trumbore closed form
//! - **Dimensions**: bounding-box statistics
//!
//! # Example
//!
//! ```
//! use nalgebra::Point3;
//! use polymesh_measure::{contains_point, surface_area, volume};
//! use polymesh_types::unit_cube;
//!
//! let cube = unit_cube();
//!
//! assert!((surface_area(&cube).unwrap() - 6.0).abs() < 1e-10);
//! assert!((volume(&cube).unwrap() - 1.0).abs() < 1e-10);
//! assert!(contains_point(&cube, &Point3::new(0.2, 0.3, 0.4)).unwrap());
//! ```
//!
//! # Preconditions
//!
//! Volume and containment assume a closed, consistently wound mesh;
//! both are well defined only away from boundaries. Face-corner
//! indices are validated lazily: the first out-of-range reference a
//! query dereferences fails it with an index error.

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod area;
mod containment;
mod dimensions;
mod error;
mod ray;
mod volume;

pub use area::surface_area;
pub use containment::contains_point;
pub use dimensions::{Dimensions, dimensions};
pub use error::{MeasureError, MeasureResult};
pub use ray::ray_intersects_triangle;
pub use volume::{signed_volume, volume};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
