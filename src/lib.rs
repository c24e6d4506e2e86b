//! Expandable island grid engine with persistent tiles and staggered reveal
//!
//! The engine models a square grid of tiles centred near the origin, persists
//! each cell's type together with the grid size and level in a namespaced
//! key-value store, and grows the grid through catalog upgrades that reveal
//! newly added tiles on a staggered schedule.

#![forbid(unsafe_code)]

/// Session wiring of wallet, upgrade catalog, and island
pub mod app;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Island grid model including coordinate ranges, layout, and expansion
pub mod island;
/// Tile image resolution, caching, and island snapshot rendering
pub mod render;
/// Namespaced key-value storage with JSON encoding and pluggable backends
pub mod store;

pub use io::error::{IsletError, Result};
