//! Tile image resolution, caching, and island snapshot rendering
//!
//! This module contains rendering functionality:
//! - Candidate path resolution with primary/secondary format fallback
//! - A load cache keyed by resolved path
//! - Composition of island snapshots onto a pixel canvas

/// Island snapshot composition and PNG export
pub mod canvas;
/// Image loading with format fallback and caching
pub mod loader;

pub use canvas::export_island_png;
pub use loader::ImageLoader;
