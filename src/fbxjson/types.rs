//! Raw document types matching the converter's JSON schema.
//!
//! These deserialize the document as-is; validation and conversion into
//! [`Scene`](crate::scene::Scene) values happen in the loader.

use serde::Deserialize;

/// Top-level document: a single root node.
#[derive(Debug, Deserialize)]
pub struct FbxJsonDocument {
    /// The scene's root node.
    #[serde(rename = "RootNode")]
    pub root_node: FbxJsonNode,
}

/// A node in the exported tree.
#[derive(Debug, Deserialize)]
pub struct FbxJsonNode {
    /// Node name.
    #[serde(default)]
    pub name: Option<String>,
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<FbxJsonNode>,
    /// Mesh payload, if the node carries geometry.
    #[serde(default)]
    pub mesh: Option<FbxJsonMesh>,
}

/// Mesh payload: geometry, topology, and UV channels as flat arrays.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FbxJsonMesh {
    /// Mesh name.
    #[serde(default)]
    pub name: Option<String>,
    /// Unique 3D vertex positions.
    pub control_points: Vec<[f64; 3]>,
    /// Per-polygon lists of control point indices, in winding order.
    pub polygons: Vec<Vec<usize>>,
    /// UV sets, in channel order.
    #[serde(default)]
    pub uv: Vec<FbxJsonUvChannel>,
}

/// One UV set: per-corner indices into a deduplicated UV pool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FbxJsonUvChannel {
    /// UV set name.
    #[serde(default)]
    pub name: Option<String>,
    /// One entry per flattened polygon corner, addressing `direct_array`.
    pub index_array: Vec<usize>,
    /// The deduplicated pool of distinct UV values.
    pub direct_array: Vec<[f64; 2]>,
}
