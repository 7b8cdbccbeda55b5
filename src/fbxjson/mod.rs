//! Loader for JSON scene documents produced by the FBX-to-JSON converter.
//!
//! The converter flattens each FBX mesh into four arrays: control points
//! (unique 3D positions), polygons (per-face lists of control point
//! indices), and per UV set an index array (one entry per flattened polygon
//! corner) plus a direct array (the deduplicated UV pool).
//!
//! # Validation
//!
//! The JSON format offers no structural guarantee that these arrays are
//! consistent with each other, so the loader checks lengths and indices once
//! at the boundary where external data enters: polygon indices must address
//! existing control points, each UV channel's index array must have exactly
//! one entry per polygon corner, and every entry must address the channel's
//! direct array.
//!
//! # Example
//!
//! ```ignore
//! use fbxscene::fbxjson::load_fbx_json;
//!
//! let json = std::fs::read_to_string("mayaexport.json").unwrap();
//! let scene = load_fbx_json(&json).unwrap();
//!
//! let node = scene.root.child(1).unwrap();
//! let mesh = scene.node_mesh(node).unwrap();
//! for point in 0..mesh.point_count() {
//!     println!("{:?}", mesh.point_uvs(0, point).unwrap());
//! }
//! ```

mod error;
mod loader;
pub mod types;

pub use error::FbxJsonError;

use crate::scene::Scene;

/// Load a scene from an FBX-JSON document string.
///
/// Parses the document, validates every mesh's arrays, and flattens embedded
/// meshes into [`Scene::meshes`] with nodes holding indices into that array.
pub fn load_fbx_json(json: &str) -> Result<Scene, FbxJsonError> {
    let doc: types::FbxJsonDocument = serde_json::from_str(json)?;
    loader::build_scene(doc)
}
