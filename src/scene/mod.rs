//! Scene graph types for loaded documents.
//!
//! These types are format-agnostic and can be produced by any loader or
//! built programmatically.
//!
//! - [`Scene`] — The root node tree plus the meshes nodes reference
//! - [`SceneNode`] — A node in the scene tree

mod types;

pub use types::{Scene, SceneNode};
