//! Mesh file I/O for the polymesh crate family.
//!
//! This crate converts polygon meshes between a text interchange format
//! and a binary triangulated-surface format:
//!
//! - **OBJ** (Wavefront-style text) - input: vertices, texture
//!   coordinates, normals, polygonal faces with per-corner index triplets
//! - **STL** (binary) - output: fan-triangulated, fixed 50-byte records
//!
//! # Example
//!
//! ```no_run
//! use polymesh_io::{load_obj, save_stl};
//!
//! let mesh = load_obj("model.obj").unwrap();
//! save_stl(&mesh, "model.stl").unwrap();
//! ```
//!
//! # Conversion capability
//!
//! Supported conversions are declared in a capability table checked at
//! the call boundary, so adding a format is additive: new load/save
//! functions plus new table entries, with the geometry kernel untouched.
//!
//! ```no_run
//! use polymesh_io::convert;
//!
//! // Formats detected from extensions, pair checked against the table
//! convert("model.obj", "model.stl").unwrap();
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod obj;
mod stl;

pub use error::{IoError, IoResult};
pub use obj::{ObjOptions, ObjParse, load_obj, load_obj_with};
pub use stl::save_stl;

use std::path::Path;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// OBJ (Wavefront-style) text format. Input only.
    Obj,
    /// Binary STL (Stereolithography). Output only.
    Stl,
}

/// The (input, output) pairs the crate can convert between.
///
/// Checked once at the call boundary; formats not paired here are
/// rejected before any file is touched.
const SUPPORTED_CONVERSIONS: &[(MeshFormat, MeshFormat)] = &[(MeshFormat::Obj, MeshFormat::Stl)];

impl MeshFormat {
    /// Detect format from file extension.
    ///
    /// # Returns
    ///
    /// The detected format, or `None` if the extension is not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "obj" => Some(Self::Obj),
            "stl" => Some(Self::Stl),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Obj => "obj",
            Self::Stl => "stl",
        }
    }

    /// Check whether a conversion pair is in the capability table.
    #[must_use]
    pub fn can_convert(input: Self, output: Self) -> bool {
        SUPPORTED_CONVERSIONS.contains(&(input, output))
    }
}

impl std::fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Convert a mesh file, detecting both formats from extensions.
///
/// # Errors
///
/// Returns an error if:
/// - Either format cannot be determined from its extension
/// - The (input, output) pair is not in the capability table
/// - Reading or writing fails
///
/// # Example
///
/// ```no_run
/// use polymesh_io::convert;
///
/// convert("model.obj", "model.stl").unwrap();
/// ```
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> IoResult<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let input_format = MeshFormat::from_path(input).ok_or_else(|| unknown_format(input))?;
    let output_format = MeshFormat::from_path(output).ok_or_else(|| unknown_format(output))?;

    if !MeshFormat::can_convert(input_format, output_format) {
        return Err(IoError::UnsupportedConversion {
            input: input_format,
            output: output_format,
        });
    }

    match (input_format, output_format) {
        (MeshFormat::Obj, MeshFormat::Stl) => {
            let mesh = load_obj(input)?;
            save_stl(&mesh, output)
        }
        // Pairs outside the capability table were rejected above
        _ => Err(IoError::UnsupportedConversion {
            input: input_format,
            output: output_format,
        }),
    }
}

fn unknown_format(path: &Path) -> IoError {
    IoError::UnknownFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    }
}
