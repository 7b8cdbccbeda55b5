//! CPU-side mesh data structures and UV resolution.
//!
//! This module provides:
//! - [`UvChannel`] - One UV set: per-corner indices into a deduplicated UV pool
//! - [`Mesh`] - Control points, polygon topology, and UV channels
//!
//! UV data is stored per polygon *corner*, not per control point: the same
//! point can legitimately carry different UVs on different faces (UV-seam
//! splitting). [`Mesh::point_uvs`] reconstructs that point-to-UV multiplicity
//! explicitly instead of assuming a 1:1 point-to-UV mapping.

use super::error::MeshError;

/// A single UV set on a mesh.
///
/// Pairs an index array (one entry per flattened polygon corner) with a
/// direct array (the deduplicated pool of distinct UV values). A corner's UV
/// is `direct_array[index_array[corner]]`, where `corner` is the corner's
/// absolute position in the flattened per-polygon-vertex sequence.
#[derive(Debug, Clone, Default)]
pub struct UvChannel {
    name: Option<String>,
    index_array: Vec<usize>,
    direct_array: Vec<[f64; 2]>,
}

impl UvChannel {
    /// Create a channel from its index and direct arrays.
    pub fn new(index_array: Vec<usize>, direct_array: Vec<[f64; 2]>) -> Self {
        Self {
            name: None,
            index_array,
            direct_array,
        }
    }

    /// Set the channel name (e.g. `"map1"` for Maya's default UV set).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the channel name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of index array entries (one per flattened polygon corner).
    pub fn corner_count(&self) -> usize {
        self.index_array.len()
    }

    /// Number of distinct UV values in the direct array.
    pub fn direct_count(&self) -> usize {
        self.direct_array.len()
    }

    /// Resolve the UV value referenced by a flattened corner position.
    ///
    /// Both lookups are bounds-checked: a corner past the end of the index
    /// array, or an index array entry pointing past the end of the direct
    /// array, yields [`MeshError::IndexOutOfRange`].
    pub fn corner_uv(&self, corner: usize) -> Result<[f64; 2], MeshError> {
        let uv_index = *self
            .index_array
            .get(corner)
            .ok_or(MeshError::IndexOutOfRange {
                index: corner,
                len: self.index_array.len(),
            })?;
        self.direct_array
            .get(uv_index)
            .copied()
            .ok_or(MeshError::IndexOutOfRange {
                index: uv_index,
                len: self.direct_array.len(),
            })
    }
}

/// A polygonal mesh with indirectly-indexed UV channels.
///
/// Control points are the unique 3D vertex positions; polygons reference
/// them by index, in winding order. UV channels address corners through
/// [`UvChannel`] indirection. The mesh is immutable after construction:
/// all queries take `&self` and share no mutable state, so the same mesh
/// may be queried concurrently.
#[derive(Debug, Clone)]
pub struct Mesh {
    name: Option<String>,
    control_points: Vec<[f64; 3]>,
    polygons: Vec<Vec<usize>>,
    uv_channels: Vec<UvChannel>,
}

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            name: None,
            control_points: Vec::new(),
            polygons: Vec::new(),
            uv_channels: Vec::new(),
        }
    }

    /// Set the mesh name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the control points.
    #[must_use]
    pub fn with_control_points(mut self, control_points: Vec<[f64; 3]>) -> Self {
        self.control_points = control_points;
        self
    }

    /// Set the polygons (each a list of control point indices).
    #[must_use]
    pub fn with_polygons(mut self, polygons: Vec<Vec<usize>>) -> Self {
        self.polygons = polygons;
        self
    }

    /// Set the UV channels.
    #[must_use]
    pub fn with_uv_channels(mut self, uv_channels: Vec<UvChannel>) -> Self {
        self.uv_channels = uv_channels;
        self
    }

    /// Get the mesh name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get all control points.
    pub fn control_points(&self) -> &[[f64; 3]] {
        &self.control_points
    }

    /// Get all polygons.
    pub fn polygons(&self) -> &[Vec<usize>] {
        &self.polygons
    }

    /// Get a control point position, or `None` if out of range.
    pub fn point(&self, index: usize) -> Option<[f64; 3]> {
        self.control_points.get(index).copied()
    }

    /// Number of control points.
    pub fn point_count(&self) -> usize {
        self.control_points.len()
    }

    /// Number of polygons.
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Total corner count across all polygons (sum of polygon lengths).
    ///
    /// A consistent UV channel has exactly this many index array entries.
    pub fn corner_count(&self) -> usize {
        self.polygons.iter().map(Vec::len).sum()
    }

    /// Get a UV channel, or `None` if out of range.
    pub fn uv_channel(&self, index: usize) -> Option<&UvChannel> {
        self.uv_channels.get(index)
    }

    /// Number of UV channels.
    pub fn uv_channel_count(&self) -> usize {
        self.uv_channels.len()
    }

    /// Collect every UV value associated with one control point.
    ///
    /// Walks polygons in stored order (corners in order within each polygon)
    /// and resolves the channel's UV for every corner that references
    /// `point_index`. The result holds one entry per occurrence of the point
    /// in the polygon list, in scan order; a point referenced by no polygon
    /// yields an empty `Vec`, not an error.
    ///
    /// Each call rescans the topology from scratch; no state persists
    /// between calls. No partial results are returned: inconsistent channel
    /// data aborts the whole query with [`MeshError::IndexOutOfRange`].
    pub fn point_uvs(
        &self,
        channel_index: usize,
        point_index: usize,
    ) -> Result<Vec<[f64; 2]>, MeshError> {
        let channel =
            self.uv_channels
                .get(channel_index)
                .ok_or(MeshError::InvalidChannelIndex {
                    index: channel_index,
                    count: self.uv_channels.len(),
                })?;
        if point_index >= self.control_points.len() {
            return Err(MeshError::InvalidPointIndex {
                index: point_index,
                count: self.control_points.len(),
            });
        }

        let mut uvs = Vec::new();
        // Absolute position in the flattened corner stream. The counter
        // advances for every corner, matching or not: it is the only valid
        // addressing scheme into the channel's index array.
        let mut corner = 0usize;
        for polygon in &self.polygons {
            for &vertex_index in polygon {
                if vertex_index == point_index {
                    uvs.push(channel.corner_uv(corner)?);
                }
                corner += 1;
            }
        }
        Ok(uvs)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit quad split into two triangles sharing the 0-2 diagonal, with two
    /// independent UV sets over the same topology.
    fn quad_mesh() -> Mesh {
        Mesh::new()
            .with_name("quad")
            .with_control_points(vec![
                [-0.5, 0.0, 0.5],
                [0.5, 0.0, 0.5],
                [0.5, 0.0, -0.5],
                [-0.5, 0.0, -0.5],
            ])
            .with_polygons(vec![vec![0, 1, 2], vec![0, 2, 3]])
            .with_uv_channels(vec![
                UvChannel::new(
                    vec![0, 1, 2, 0, 2, 3],
                    vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
                )
                .with_name("map1"),
                UvChannel::new(
                    vec![3, 2, 1, 3, 1, 0],
                    vec![[0.0, 0.0], [0.5, 0.0], [0.5, 0.5], [0.0, 0.5]],
                )
                .with_name("uvSet1"),
            ])
    }

    #[test]
    fn shared_point_collects_one_uv_per_corner() {
        let mesh = quad_mesh();
        // Point 0 appears at flattened corners 0 and 3.
        let uvs = mesh.point_uvs(0, 0).unwrap();
        assert_eq!(uvs, vec![[0.0, 0.0], [0.0, 0.0]]);
    }

    #[test]
    fn single_corner_point_yields_one_uv() {
        let mesh = quad_mesh();
        // Point 3 appears only at flattened corner 5 (index array entry 3).
        let uvs = mesh.point_uvs(0, 3).unwrap();
        assert_eq!(uvs, vec![[0.0, 1.0]]);

        let channel = mesh.uv_channel(0).unwrap();
        assert_eq!(uvs[0], channel.corner_uv(5).unwrap());
    }

    #[test]
    fn every_corner_attributed_to_exactly_one_point() {
        let mesh = quad_mesh();
        for channel_index in 0..mesh.uv_channel_count() {
            let total: usize = (0..mesh.point_count())
                .map(|point| mesh.point_uvs(channel_index, point).unwrap().len())
                .sum();
            assert_eq!(total, mesh.corner_count());
            assert_eq!(total, mesh.uv_channel(channel_index).unwrap().corner_count());
        }
    }

    #[test]
    fn unreferenced_point_yields_empty() {
        let mesh = Mesh::new()
            .with_control_points(vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [5.0; 3]])
            .with_polygons(vec![vec![0, 1, 2]])
            .with_uv_channels(vec![UvChannel::new(
                vec![0, 1, 2],
                vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            )]);
        // Point 3 exists but no polygon references it.
        assert_eq!(mesh.point_uvs(0, 3).unwrap(), Vec::<[f64; 2]>::new());
    }

    #[test]
    fn invalid_channel_index_is_rejected() {
        let mesh = quad_mesh();
        assert_eq!(
            mesh.point_uvs(2, 0),
            Err(MeshError::InvalidChannelIndex { index: 2, count: 2 })
        );
    }

    #[test]
    fn invalid_point_index_is_rejected() {
        let mesh = quad_mesh();
        assert_eq!(
            mesh.point_uvs(0, 4),
            Err(MeshError::InvalidPointIndex { index: 4, count: 4 })
        );
    }

    #[test]
    fn corner_uv_rejects_out_of_range_corner() {
        let mesh = quad_mesh();
        let channel = mesh.uv_channel(0).unwrap();
        assert_eq!(
            channel.corner_uv(channel.corner_count()),
            Err(MeshError::IndexOutOfRange { index: 6, len: 6 })
        );
    }

    #[test]
    fn corrupt_direct_index_propagates() {
        // Index array entry 9 points past the 4-entry direct array.
        let mesh = Mesh::new()
            .with_control_points(vec![
                [-0.5, 0.0, 0.5],
                [0.5, 0.0, 0.5],
                [0.5, 0.0, -0.5],
                [-0.5, 0.0, -0.5],
            ])
            .with_polygons(vec![vec![0, 1, 2], vec![0, 2, 3]])
            .with_uv_channels(vec![UvChannel::new(
                vec![0, 1, 2, 9, 2, 3],
                vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
            )]);
        assert_eq!(
            mesh.point_uvs(0, 0),
            Err(MeshError::IndexOutOfRange { index: 9, len: 4 })
        );
    }

    #[test]
    fn channels_resolve_independently() {
        let mesh = quad_mesh();
        // Channel 1 shares the topology but has its own arrays.
        assert_eq!(mesh.point_uvs(1, 0).unwrap(), vec![[0.0, 0.5], [0.0, 0.5]]);
        assert_eq!(mesh.point_uvs(1, 3).unwrap(), vec![[0.0, 0.0]]);

        // Dropping channel 0 does not change channel 1's results when it
        // becomes channel 0.
        let single = Mesh::new()
            .with_control_points(mesh.control_points().to_vec())
            .with_polygons(mesh.polygons().to_vec())
            .with_uv_channels(vec![mesh.uv_channel(1).unwrap().clone()]);
        assert_eq!(single.point_uvs(0, 0).unwrap(), mesh.point_uvs(1, 0).unwrap());
        assert_eq!(single.point_uvs(0, 3).unwrap(), mesh.point_uvs(1, 3).unwrap());
    }

    #[test]
    fn accessors_report_counts() {
        let mesh = quad_mesh();
        assert_eq!(mesh.name(), Some("quad"));
        assert_eq!(mesh.point_count(), 4);
        assert_eq!(mesh.polygon_count(), 2);
        assert_eq!(mesh.corner_count(), 6);
        assert_eq!(mesh.uv_channel_count(), 2);
        assert_eq!(mesh.point(1), Some([0.5, 0.0, 0.5]));
        assert_eq!(mesh.point(4), None);
        assert_eq!(mesh.uv_channel(0).unwrap().name(), Some("map1"));
        assert_eq!(mesh.uv_channel(0).unwrap().direct_count(), 4);
        assert!(mesh.uv_channel(2).is_none());
    }
}
