//! Binary STL (Stereolithography) output.
//!
//! Every polygonal face is fan-decomposed into triangles anchored at
//! its first corner and written in the fixed binary layout consumed by
//! external tooling:
//!
//! ```text
//! UINT8[80]    – Header, zero-filled
//! UINT32       – Number of triangles, little-endian
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count, always 0
//! end
//! ```
//!
//! Byte order and field sizes are exact; the layout must match
//! byte-for-byte.
//!
//! # Normals
//!
//! If a face's first corner carries a normal index, that stored normal
//! is written as-is (unnormalized, exactly as parsed). Otherwise the
//! unit normal is computed from the triangle's vertices; a degenerate
//! triangle gets the zero vector.
//!
//! Fan decomposition is only geometrically correct for convex planar
//! polygons. Non-convex faces triangulate incorrectly; this is a
//! documented limitation of the scheme, not something the writer
//! detects or repairs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use polymesh_types::{PolygonMesh, Triangle};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Save a mesh as binary STL.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an error if the file cannot be written, or if a face corner
/// references a vertex or normal index outside the mesh's arrays (the
/// first bad reference fails the whole write).
///
/// # Example
///
/// ```no_run
/// use polymesh_io::{load_obj, save_stl};
///
/// let mesh = load_obj("model.obj").unwrap();
/// save_stl(&mesh, "model.stl").unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(mesh: &PolygonMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    write_stl_binary(mesh, writer)?;

    debug!(
        path = %path.display(),
        triangles = mesh.triangle_count(),
        "wrote binary STL"
    );
    Ok(())
}

/// Write the binary STL byte stream.
pub(crate) fn write_stl_binary<W: Write>(mesh: &PolygonMesh, mut writer: W) -> IoResult<()> {
    // Zero-filled 80-byte header
    let header = [0_u8; HEADER_SIZE];
    writer.write_all(&header)?;

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: meshes with more than u32::MAX triangles are unsupported
    let triangle_count = mesh.triangle_count() as u32;
    writer.write_all(&triangle_count.to_le_bytes())?;

    for face in &mesh.faces {
        for corners in face.fan_triangles() {
            let triangle = mesh.resolve_triangle(corners).ok_or_else(|| {
                // Report the first unresolvable corner of this triangle
                let bad = corners
                    .iter()
                    .find(|c| mesh.vertex(c.vertex).is_none())
                    .map_or(0, |c| c.vertex);
                IoError::IndexOutOfRange {
                    element: "vertex",
                    index: bad,
                    count: mesh.vertex_count(),
                }
            })?;

            let normal = triangle_normal(mesh, corners[0].normal, &triangle)?;
            write_vector_binary(&mut writer, normal)?;

            for point in triangle.vertices() {
                write_vector_binary(&mut writer, [point.x, point.y, point.z])?;
            }

            // Attribute byte count, fixed at zero
            writer.write_all(&0_u16.to_le_bytes())?;
        }
    }

    Ok(())
}

/// Pick the normal for one output triangle.
///
/// The stored normal wins when the anchor corner references one; it is
/// written unnormalized, exactly as parsed. Without a reference the
/// normal is computed, and a degenerate triangle yields zero.
fn triangle_normal(
    mesh: &PolygonMesh,
    normal_index: u32,
    triangle: &Triangle,
) -> IoResult<[f64; 3]> {
    if normal_index > 0 {
        let n = mesh
            .normal(normal_index)
            .ok_or_else(|| IoError::IndexOutOfRange {
                element: "normal",
                index: normal_index,
                count: mesh.normal_count(),
            })?;
        Ok([n.x, n.y, n.z])
    } else {
        Ok(triangle
            .normal()
            .map_or([0.0, 0.0, 0.0], |n| [n.x, n.y, n.z]))
    }
}

/// Write three coordinates as little-endian f32.
fn write_vector_binary<W: Write>(writer: &mut W, v: [f64; 3]) -> IoResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: f64 to f32 is intentional, the format stores f32
    {
        writer.write_all(&(v[0] as f32).to_le_bytes())?;
        writer.write_all(&(v[1] as f32).to_le_bytes())?;
        writer.write_all(&(v[2] as f32).to_le_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polymesh_types::{Face, Vertex, unit_cube};

    fn single_triangle() -> PolygonMesh {
        let mut mesh = PolygonMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.faces.push(Face::from_vertices(&[1, 2, 3]));
        mesh
    }

    fn f32_at(bytes: &[u8], offset: usize) -> f32 {
        f32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    #[test]
    fn header_is_zero_filled() {
        let mut out = Vec::new();
        write_stl_binary(&single_triangle(), &mut out).unwrap();
        assert!(out[..HEADER_SIZE].iter().all(|&b| b == 0));
    }

    #[test]
    fn triangle_count_and_record_size() {
        let mut out = Vec::new();
        write_stl_binary(&unit_cube(), &mut out).unwrap();

        let count = u32::from_le_bytes([out[80], out[81], out[82], out[83]]);
        assert_eq!(count, 12);
        // 80 header + 4 count + 12 * 50-byte records
        assert_eq!(out.len(), 84 + 12 * 50);
    }

    #[test]
    fn computed_normal_is_unit_length() {
        let mut out = Vec::new();
        write_stl_binary(&single_triangle(), &mut out).unwrap();

        let nx = f32_at(&out, 84);
        let ny = f32_at(&out, 88);
        let nz = f32_at(&out, 92);
        assert!(nx.abs() < 1e-6);
        assert!(ny.abs() < 1e-6);
        assert!((nz - 1.0).abs() < 1e-6);
    }

    #[test]
    fn stored_normal_written_unnormalized() {
        let mut mesh = single_triangle();
        mesh.normals.push(nalgebra::Vector3::new(0.0, 0.0, 5.0));
        mesh.faces[0].corners[0].normal = 1;

        let mut out = Vec::new();
        write_stl_binary(&mesh, &mut out).unwrap();

        assert!((f32_at(&out, 92) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_triangle_gets_zero_normal() {
        let mut mesh = PolygonMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(2.0, 0.0, 0.0));
        mesh.faces.push(Face::from_vertices(&[1, 2, 3]));

        let mut out = Vec::new();
        write_stl_binary(&mesh, &mut out).unwrap();

        assert!(f32_at(&out, 84).abs() < 1e-12);
        assert!(f32_at(&out, 88).abs() < 1e-12);
        assert!(f32_at(&out, 92).abs() < 1e-12);
    }

    #[test]
    fn vertices_written_in_fan_order() {
        let mut out = Vec::new();
        write_stl_binary(&single_triangle(), &mut out).unwrap();

        // v0 at 96, v1 at 108, v2 at 120
        assert!((f32_at(&out, 96)).abs() < 1e-12);
        assert!((f32_at(&out, 108) - 1.0).abs() < 1e-12);
        assert!((f32_at(&out, 124) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_vertex_fails_fast() {
        let mut mesh = single_triangle();
        mesh.faces.push(Face::from_vertices(&[1, 2, 9]));

        let mut out = Vec::new();
        let err = write_stl_binary(&mesh, &mut out);
        assert!(matches!(
            err,
            Err(IoError::IndexOutOfRange {
                element: "vertex",
                index: 9,
                count: 3,
            })
        ));
    }

    #[test]
    fn out_of_range_normal_fails_fast() {
        let mut mesh = single_triangle();
        mesh.faces[0].corners[0].normal = 4;

        let mut out = Vec::new();
        let err = write_stl_binary(&mesh, &mut out);
        assert!(matches!(
            err,
            Err(IoError::IndexOutOfRange {
                element: "normal",
                index: 4,
                ..
            })
        ));
    }

    #[test]
    fn attribute_trailer_is_zero() {
        let mut out = Vec::new();
        write_stl_binary(&single_triangle(), &mut out).unwrap();
        assert_eq!(&out[132..134], &[0, 0]);
    }
}
