//! Error types for mesh I/O operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::MeshFormat;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during mesh I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Unknown file format (unrecognized extension).
    #[error("unknown file format: .{extension}")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// The requested input/output format pair is not in the
    /// conversion-capability table.
    #[error("unsupported conversion: .{input} to .{output}")]
    UnsupportedConversion {
        /// Input format.
        input: MeshFormat,
        /// Output format.
        output: MeshFormat,
    },

    /// A numeric field failed to parse (strict mode only; the lenient
    /// parser coerces such fields to zero instead).
    #[error("malformed {kind} value {token:?} at line {line}")]
    MalformedField {
        /// 1-based source line.
        line: usize,
        /// Which field kind failed (e.g. "vertex", "face index").
        kind: &'static str,
        /// The offending token.
        token: String,
    },

    /// A face line carried fewer than three corner tokens (strict mode
    /// only; the lenient parser drops such lines).
    #[error("face with {corners} corner(s) at line {line}, need at least 3")]
    FaceTooShort {
        /// 1-based source line.
        line: usize,
        /// Number of corner tokens present.
        corners: usize,
    },

    /// A face corner referenced an element beyond the array bounds.
    #[error("{element} index {index} out of range (mesh has {count})")]
    IndexOutOfRange {
        /// Which array was indexed ("vertex" or "normal").
        element: &'static str,
        /// The 1-based index that failed to resolve.
        index: u32,
        /// Number of elements actually present.
        count: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_context() {
        let err = IoError::MalformedField {
            line: 12,
            kind: "vertex",
            token: "abc".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("line 12"));
        assert!(msg.contains("abc"));

        let err = IoError::IndexOutOfRange {
            element: "vertex",
            index: 9,
            count: 4,
        };
        assert!(format!("{err}").contains("index 9"));

        let err = IoError::UnsupportedConversion {
            input: MeshFormat::Stl,
            output: MeshFormat::Obj,
        };
        assert!(format!("{err}").contains(".stl to .obj"));
    }
}
