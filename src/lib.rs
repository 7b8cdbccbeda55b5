//! # fbxscene
//!
//! Reader for hierarchical scene documents exported from FBX to JSON.
//!
//! The converter flattens each mesh into separate indirectly-indexed arrays:
//! control points hold unique 3D positions, polygons reference them by index,
//! and each UV channel pairs a per-corner index array with a deduplicated
//! pool of UV values. Because the same control point can carry different UVs
//! on different faces (UV seams), UV data is addressed per polygon *corner*;
//! [`mesh::Mesh::point_uvs`] reconstructs the full set of UV values for one
//! control point across all its polygon occurrences.
//!
//! - [`fbxjson`] — document parsing and boundary validation
//! - [`scene`] — scene tree ([`scene::Scene`], [`scene::SceneNode`])
//! - [`mesh`] — mesh data and UV resolution ([`mesh::Mesh`], [`mesh::UvChannel`])

pub mod fbxjson;
pub mod mesh;
pub mod scene;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
