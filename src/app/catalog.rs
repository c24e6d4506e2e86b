//! Upgrade catalog loading and level gating
//!
//! The catalog is an ordered sequence of upgrades read from a JSON file at
//! startup. A load failure is fatal: the shell has nothing to sell without
//! it. Only the upgrade targeting the level after the island's current one
//! is purchasable at any time.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::io::error::{IsletError, Result};

/// One purchasable grid expansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upgrade {
    /// Display name shown to the player
    pub label: String,
    /// Currency cost
    pub cost: i64,
    /// The level this upgrade unlocks; purchasable only at `level - 1`
    pub level: u32,
    /// Amount added to the grid side length
    pub size_increase: u32,
    /// Tile type assigned to the cells the expansion adds
    pub tile_type: String,
}

/// Ordered collection of upgrades
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    upgrades: Vec<Upgrade>,
}

impl Catalog {
    /// Build a catalog from upgrades already in hand
    pub const fn from_upgrades(upgrades: Vec<Upgrade>) -> Self {
        Self { upgrades }
    }

    /// Load the catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`IsletError::CatalogRead`] when the file cannot be read and
    /// [`IsletError::CatalogParse`] when its contents are not a valid
    /// upgrade array.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| IsletError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let upgrades =
            serde_json::from_str(&text).map_err(|source| IsletError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { upgrades })
    }

    /// All upgrades in catalog order
    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    /// The single upgrade purchasable at the given current level, if any
    pub fn next_for_level(&self, current_level: u32) -> Option<&Upgrade> {
        self.upgrades
            .iter()
            .find(|upgrade| upgrade.level == current_level + 1)
    }

    /// Tile type of the first catalog entry, used as the hydration default
    pub fn default_tile_type(&self) -> Option<&str> {
        self.upgrades
            .first()
            .map(|upgrade| upgrade.tile_type.as_str())
    }
}
