//! Internal conversion from raw document types to scene values.
//!
//! All boundary validation lives here: the index arrays in the document
//! carry no static guarantee of consistency with the polygon topology, so
//! lengths and indices are checked once while building each mesh.

use crate::mesh::{Mesh, UvChannel};
use crate::scene::{Scene, SceneNode};

use super::error::FbxJsonError;
use super::types::{FbxJsonDocument, FbxJsonMesh, FbxJsonNode};

/// Convert a parsed document into a [`Scene`].
///
/// Meshes embedded in nodes are flattened into the scene's mesh array;
/// nodes keep indices into it.
pub(crate) fn build_scene(doc: FbxJsonDocument) -> Result<Scene, FbxJsonError> {
    let mut meshes = Vec::new();
    let root = build_node(doc.root_node, &mut meshes)?;
    Ok(Scene::new().with_root(root).with_meshes(meshes))
}

fn build_node(raw: FbxJsonNode, meshes: &mut Vec<Mesh>) -> Result<SceneNode, FbxJsonError> {
    let mesh_index = match raw.mesh {
        Some(raw_mesh) => {
            meshes.push(build_mesh(raw_mesh)?);
            Some(meshes.len() - 1)
        }
        None => None,
    };

    let mut children = Vec::with_capacity(raw.children.len());
    for child in raw.children {
        children.push(build_node(child, meshes)?);
    }

    let mut node = SceneNode::new().with_children(children);
    if let Some(name) = raw.name {
        node = node.with_name(name);
    }
    if let Some(index) = mesh_index {
        node = node.with_mesh(index);
    }
    Ok(node)
}

fn build_mesh(raw: FbxJsonMesh) -> Result<Mesh, FbxJsonError> {
    let label = raw.name.clone().unwrap_or_else(|| "<unnamed>".to_string());
    let point_count = raw.control_points.len();

    for (pi, polygon) in raw.polygons.iter().enumerate() {
        for (ci, &index) in polygon.iter().enumerate() {
            if index >= point_count {
                return Err(FbxJsonError::PolygonIndexOutOfRange {
                    mesh: label,
                    polygon: pi,
                    corner: ci,
                    index,
                    count: point_count,
                });
            }
        }
    }

    let corner_count: usize = raw.polygons.iter().map(Vec::len).sum();

    let mut channels = Vec::with_capacity(raw.uv.len());
    for (chi, raw_channel) in raw.uv.into_iter().enumerate() {
        if raw_channel.index_array.len() != corner_count {
            return Err(FbxJsonError::ChannelLengthMismatch {
                mesh: label,
                channel: chi,
                actual: raw_channel.index_array.len(),
                expected: corner_count,
            });
        }
        let direct_len = raw_channel.direct_array.len();
        if let Some(&bad) = raw_channel.index_array.iter().find(|&&i| i >= direct_len) {
            return Err(FbxJsonError::UvIndexOutOfRange {
                mesh: label,
                channel: chi,
                index: bad,
                len: direct_len,
            });
        }

        let mut channel = UvChannel::new(raw_channel.index_array, raw_channel.direct_array);
        if let Some(name) = raw_channel.name {
            channel = channel.with_name(name);
        }
        channels.push(channel);
    }

    log::debug!(
        "Loaded mesh \"{}\": {} points, {} polygons, {} UV channels",
        label,
        point_count,
        raw.polygons.len(),
        channels.len(),
    );

    let mut mesh = Mesh::new()
        .with_control_points(raw.control_points)
        .with_polygons(raw.polygons)
        .with_uv_channels(channels);
    if let Some(name) = raw.name {
        mesh = mesh.with_name(name);
    }
    Ok(mesh)
}
