//! Spatial data structures and bitmap geometry
//!
//! This module contains the geometric core:
//! - Pure bitmap transforms shared by tiles and the stitched image
//! - The immutable tile value type with edge extraction and orbits

/// Immutable square tile values with edges, orbits, and trimming
pub mod tile;
/// Pure rotation and reflection transforms over boolean bitmaps
pub mod transform;

pub use tile::{Edge, Tile};
pub use transform::Pixels;
