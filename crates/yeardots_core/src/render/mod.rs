//! Rendering policy and rasterization for the dot grid.
//!
//! # Responsibility
//! - Map day states to colors and shapes.
//! - Produce the wallpaper bitmap and the text overlay description.
//!
//! # Invariants
//! - Shape and size never influence grid layout, only painting.

pub mod overlay;
pub mod palette;
pub mod raster;
