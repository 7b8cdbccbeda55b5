//! Mesh data and per-corner UV resolution.
//!
//! This module provides the format-agnostic mesh types:
//!
//! - [`Mesh`] - Control points, polygon topology, and UV channels
//! - [`UvChannel`] - One UV set (per-corner index array + deduplicated UV pool)
//! - [`MeshError`] - Errors raised by UV queries
//!
//! These types are produced by the [`fbxjson`](crate::fbxjson) loader but can
//! also be built directly via the builder methods.

mod data;
mod error;

pub use data::{Mesh, UvChannel};
pub use error::MeshError;
