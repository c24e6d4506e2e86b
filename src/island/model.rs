//! Island state, hydration, and expansion
//!
//! The island owns the grid size/level pair and the map of materialized
//! tiles. Hydration rebuilds the full tile set for the persisted size;
//! expansion grows the grid, persists types for the newly covered cells,
//! and hands back a reveal schedule for them. Persisted cell types follow
//! first write wins: once a coordinate has a type it is never overwritten.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::io::configuration::{
    BASE_SIZE, BASE_TILE_SIZE, CELL_KEY_PREFIX, DEFAULT_TILE_TYPE, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH, LEVEL_KEY, REVEAL_TOTAL_MS, SIZE_KEY,
};
use crate::island::layout::{Layout, Viewport};
use crate::island::range::{Coord, coords_for_size};
use crate::island::reveal::RevealBatch;
use crate::store::Storage;

/// Persisted record for a single cell
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CellRecord {
    #[serde(rename = "type")]
    kind: String,
}

/// Storage key for a cell record
fn cell_key(coord: Coord) -> String {
    format!("{CELL_KEY_PREFIX}{coord}")
}

/// Resolve a cell's persisted type, assigning `fallback` on first sight
///
/// First write wins: a coordinate that already carries a type keeps it,
/// regardless of the fallback offered.
fn ensure_cell_type(store: &mut Storage, coord: Coord, fallback: &str) -> String {
    let key = cell_key(coord);
    let stored: Option<CellRecord> = store.get_json(&key, None);
    stored.map_or_else(
        || {
            let record = CellRecord {
                kind: fallback.to_string(),
            };
            store.set_json(&key, &record);
            record.kind
        },
        |record| record.kind,
    )
}

/// In-memory view of a persisted cell
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Grid coordinate of the underlying cell
    pub coord: Coord,
    /// Tile-type identifier resolved from storage
    pub kind: String,
    /// Screen position under the current size/level scale
    pub position: [f64; 2],
    /// Whether the tile is still hidden pending its scheduled reveal
    pub entering: bool,
}

/// Sizing and hydration configuration for an island
#[derive(Debug, Clone)]
pub struct IslandConfig {
    /// Grid side length used when no size has been persisted
    pub base_size: u32,
    /// Tile edge length in pixels at level 0
    pub base_tile_size: f64,
    /// Tile type assigned to cells first seen during hydration
    pub default_tile_type: String,
    /// Display viewport, sampled once for the responsive factor
    pub viewport: Viewport,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            base_size: BASE_SIZE,
            base_tile_size: BASE_TILE_SIZE,
            default_tile_type: DEFAULT_TILE_TYPE.to_string(),
            viewport: Viewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
        }
    }
}

/// Expandable square grid of tiles with persisted cell types
#[derive(Debug)]
pub struct Island {
    size: u32,
    level: u32,
    layout: Layout,
    default_tile_type: String,
    tiles: HashMap<Coord, Tile>,
}

impl Island {
    /// Load persisted state and hydrate the full tile set
    ///
    /// Reads level and size from storage (config defaults when absent or
    /// malformed) and materializes one positioned tile per coordinate in
    /// range, persisting the default type for any coordinate seen for the
    /// first time. Re-initializing against the same persisted state
    /// reproduces the same tile set.
    pub fn new(config: &IslandConfig, store: &mut Storage) -> Self {
        let level = store.get_json(LEVEL_KEY, 0u32);
        let size = store.get_json(SIZE_KEY, config.base_size);

        let mut island = Self {
            size,
            level,
            layout: Layout::new(config.base_tile_size, config.viewport),
            default_tile_type: config.default_tile_type.clone(),
            tiles: HashMap::new(),
        };
        island.hydrate(store);
        island
    }

    /// Number of completed expansions
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Current grid side length
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Effective tile edge length in pixels at the current level
    pub fn tile_scale(&self) -> f64 {
        self.layout.tile_scale(self.level)
    }

    /// The tile materialized at a coordinate, if any
    pub fn tile(&self, coord: Coord) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    /// All materialized tiles in unspecified order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Number of materialized tiles, always the square of the size
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Rebuild the full tile set for the current size
    ///
    /// Clears all tiles, then materializes one positioned tile per
    /// coordinate in range, resolving each type through storage.
    pub fn hydrate(&mut self, store: &mut Storage) {
        self.tiles.clear();
        for coord in coords_for_size(self.size) {
            let kind = ensure_cell_type(store, coord, &self.default_tile_type);
            let position = self.layout.position(coord, self.size, self.level);
            self.tiles.insert(
                coord,
                Tile {
                    coord,
                    kind,
                    position,
                    entering: false,
                },
            );
        }
    }

    /// Grow the grid and schedule reveals for the newly covered cells
    ///
    /// Increases size by `size_increase` and level by 1, persists a type for
    /// every coordinate not already materialized (first write wins, with
    /// `tile_type` as the fallback), persists the new size/level, repositions
    /// every tile under the new scale, and returns the reveal schedule for
    /// the added tiles. State mutation completes before the batch is
    /// returned; the batch itself only clears entering flags.
    pub fn expand(
        &mut self,
        store: &mut Storage,
        size_increase: u32,
        tile_type: &str,
    ) -> RevealBatch {
        let next_size = self.size + size_increase;
        let mut added = Vec::new();

        for coord in coords_for_size(next_size) {
            if self.tiles.contains_key(&coord) {
                continue;
            }
            let kind = ensure_cell_type(store, coord, tile_type);
            self.tiles.insert(
                coord,
                Tile {
                    coord,
                    kind,
                    position: [0.0, 0.0],
                    entering: true,
                },
            );
            added.push(coord);
        }

        self.size = next_size;
        self.level += 1;
        store.set_json(SIZE_KEY, &self.size);
        store.set_json(LEVEL_KEY, &self.level);

        self.refresh_layout();

        RevealBatch::new(added, REVEAL_TOTAL_MS)
    }

    /// Recompute every tile's position without changing model state
    pub fn refresh_layout(&mut self) {
        for tile in self.tiles.values_mut() {
            tile.position = self.layout.position(tile.coord, self.size, self.level);
        }
    }

    /// Clear a tile's entering flag once its scheduled reveal fires
    pub fn reveal(&mut self, coord: Coord) {
        if let Some(tile) = self.tiles.get_mut(&coord) {
            tile.entering = false;
        }
    }
}
