//! Tile layout under level-derived and responsive scaling
//!
//! Tile positions are a pure function of coordinate, grid size, level, and a
//! responsive factor fixed when the layout is created. Each completed
//! expansion shrinks tiles by a constant ratio so the whole island keeps
//! roughly the same footprint as it grows.

use crate::io::configuration::{SCALE_DECAY, TARGET_VISIBLE_CELLS};
use crate::island::range::Coord;

/// Display viewport dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width
    pub width: f64,
    /// Viewport height
    pub height: f64,
}

impl Viewport {
    /// Create a viewport from its dimensions
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The smaller of the two viewport dimensions
    pub const fn limiting_dimension(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Per-level shrink factor: `SCALE_DECAY` raised to the level
///
/// Approaches zero asymptotically but never reaches it, so arbitrarily high
/// levels stay arithmetically valid even when tiles become imperceptible.
pub fn scale_for_level(level: u32) -> f64 {
    SCALE_DECAY.powi(level as i32)
}

/// Responsive shrink factor computed once from viewport dimensions
///
/// On viewports too small to show the target cell count at full tile size
/// along their limiting axis, tiles shrink proportionally; larger viewports
/// get factor 1.0. The factor is fixed for the layout's lifetime and is not
/// recomputed on resize.
pub const fn responsive_factor(viewport: Viewport, base_tile_size: f64) -> f64 {
    let limit = viewport.limiting_dimension();
    let needed = base_tile_size * TARGET_VISIBLE_CELLS;
    if limit < needed { limit / needed } else { 1.0 }
}

/// Centring correction applied when the grid side length is even
///
/// The integer coordinate range has one more negative than positive value for
/// even sizes; shifting by half a tile keeps the visual centre aligned.
pub const fn centering_offset(size: u32) -> f64 {
    if size % 2 == 0 { 0.5 } else { 0.0 }
}

/// Position calculator binding base tile size and the responsive factor
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    base_tile_size: f64,
    responsive: f64,
}

impl Layout {
    /// Create a layout for the given base tile size and viewport
    pub const fn new(base_tile_size: f64, viewport: Viewport) -> Self {
        Self {
            base_tile_size,
            responsive: responsive_factor(viewport, base_tile_size),
        }
    }

    /// Effective tile edge length in pixels at the given level
    pub fn tile_scale(&self, level: u32) -> f64 {
        self.base_tile_size * scale_for_level(level) * self.responsive
    }

    /// Screen position of a tile: `(coordinate + centering offset) * scale`
    pub fn position(&self, coord: Coord, size: u32, level: u32) -> [f64; 2] {
        let scale = self.tile_scale(level);
        let offset = centering_offset(size);
        [
            (f64::from(coord.x) + offset) * scale,
            (f64::from(coord.y) + offset) * scale,
        ]
    }

    /// The responsive factor fixed at construction
    pub const fn responsive(&self) -> f64 {
        self.responsive
    }
}
