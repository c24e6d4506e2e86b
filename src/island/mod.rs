//! Island grid model
//!
//! This module contains the core grid functionality:
//! - Coordinate range computation and enumeration
//! - Tile layout under level-derived and responsive scaling
//! - Hydration, expansion, and the staggered reveal schedule

/// Tile layout scaling and positioning
pub mod layout;
/// Island state, hydration, and expansion
pub mod model;
/// Coordinate ranges and enumeration
pub mod range;
/// Staggered reveal scheduling for newly added tiles
pub mod reveal;

pub use model::{Island, IslandConfig, Tile};
pub use range::Coord;
pub use reveal::RevealBatch;
