//! Error types for FBX-JSON loading.

use thiserror::Error;

/// Errors that can occur while loading an FBX-JSON document.
#[derive(Debug, Error)]
pub enum FbxJsonError {
    /// The document is not valid JSON or does not match the expected schema.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A polygon corner references a control point the mesh does not have.
    #[error(
        "mesh \"{mesh}\": polygon {polygon} corner {corner} references \
         control point {index}, but the mesh has {count}"
    )]
    PolygonIndexOutOfRange {
        /// Mesh name (or `<unnamed>`).
        mesh: String,
        /// Polygon position in the mesh.
        polygon: usize,
        /// Corner position within the polygon.
        corner: usize,
        /// The out-of-range control point index.
        index: usize,
        /// Number of control points on the mesh.
        count: usize,
    },
    /// A UV channel's index array does not cover the corners one-to-one.
    #[error(
        "mesh \"{mesh}\": UV channel {channel} has {actual} index entries, \
         expected {expected} (one per polygon corner)"
    )]
    ChannelLengthMismatch {
        /// Mesh name (or `<unnamed>`).
        mesh: String,
        /// Channel position in the mesh's UV list.
        channel: usize,
        /// Index array length found in the document.
        actual: usize,
        /// Total corner count across all polygons.
        expected: usize,
    },
    /// A UV index points past the end of the channel's direct array.
    #[error(
        "mesh \"{mesh}\": UV channel {channel} entry {index} out of range \
         for direct array of length {len}"
    )]
    UvIndexOutOfRange {
        /// Mesh name (or `<unnamed>`).
        mesh: String,
        /// Channel position in the mesh's UV list.
        channel: usize,
        /// The out-of-range direct array index.
        index: usize,
        /// Direct array length.
        len: usize,
    },
}
