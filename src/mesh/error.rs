//! Error types for mesh UV queries.

use thiserror::Error;

/// Errors that can occur when querying mesh UV data.
///
/// None of these are transient: they stem from an out-of-range request or
/// from structurally inconsistent channel data, so callers should surface
/// them rather than retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// The requested UV channel does not exist on the mesh.
    #[error("UV channel {index} out of range (mesh has {count} channels)")]
    InvalidChannelIndex {
        /// Requested channel index.
        index: usize,
        /// Number of UV channels on the mesh.
        count: usize,
    },
    /// The requested control point does not exist on the mesh.
    #[error("control point {index} out of range (mesh has {count} points)")]
    InvalidPointIndex {
        /// Requested control point index.
        index: usize,
        /// Number of control points on the mesh.
        count: usize,
    },
    /// A corner position or dereferenced UV index fell outside its array.
    ///
    /// Raised when a corner position exceeds the channel's index array, or
    /// when an index array entry points past the end of the direct array
    /// (inconsistent channel data).
    #[error("UV lookup index {index} out of range (array length {len})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the array it was used against.
        len: usize,
    },
}
