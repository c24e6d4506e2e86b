//! Session state and the purchase flow
//!
//! The session owns the store, the island, and the catalog, and serializes
//! purchases through its `&mut` receiver: expansion is not reentrant-safe,
//! and a second purchase cannot begin until the caller has finished driving
//! the previous reveal batch.

use crate::app::catalog::{Catalog, Upgrade};
use crate::io::configuration::{BASE_MONEY, MONEY_KEY};
use crate::io::error::{IsletError, Result};
use crate::island::model::{Island, IslandConfig};
use crate::island::reveal::RevealBatch;
use crate::store::Storage;

/// Running game session binding storage, island, and catalog
#[derive(Debug)]
pub struct Session {
    storage: Storage,
    island: Island,
    catalog: Catalog,
}

impl Session {
    /// Hydrate a session from storage
    ///
    /// The first catalog entry's tile type overrides the configured default
    /// for hydration, so a fresh island matches the first purchasable look.
    pub fn new(mut storage: Storage, catalog: Catalog, config: IslandConfig) -> Self {
        let hydration_default = catalog
            .default_tile_type()
            .map_or_else(|| config.default_tile_type.clone(), str::to_string);
        let config = IslandConfig {
            default_tile_type: hydration_default,
            ..config
        };
        let island = Island::new(&config, &mut storage);
        Self {
            storage,
            island,
            catalog,
        }
    }

    /// The island model
    pub const fn island(&self) -> &Island {
        &self.island
    }

    /// Mutable access to the island, for driving reveals and layout
    pub const fn island_mut(&mut self) -> &mut Island {
        &mut self.island
    }

    /// The upgrade catalog
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current currency balance
    pub fn money(&self) -> i64 {
        self.storage.get_json(MONEY_KEY, BASE_MONEY)
    }

    /// Persist a new currency balance
    pub fn set_money(&mut self, balance: i64) {
        self.storage.set_json(MONEY_KEY, &balance);
    }

    /// The single upgrade currently purchasable, if any
    pub fn next_upgrade(&self) -> Option<&Upgrade> {
        self.catalog.next_for_level(self.island.level())
    }

    /// Purchase the next upgrade: debit currency and expand the island
    ///
    /// The debit and all model mutation complete before the batch is
    /// returned; the caller then drives the batch to reveal the new tiles.
    ///
    /// # Errors
    ///
    /// Returns [`IsletError::UpgradeUnavailable`] when no catalog entry
    /// targets the next level, and [`IsletError::InsufficientFunds`] when
    /// the balance does not cover the cost. Neither error changes state.
    pub fn purchase_next(&mut self) -> Result<RevealBatch> {
        let current_level = self.island.level();
        let upgrade = self
            .catalog
            .next_for_level(current_level)
            .cloned()
            .ok_or_else(|| IsletError::UpgradeUnavailable { current_level })?;

        let balance = self.money();
        if balance < upgrade.cost {
            return Err(IsletError::InsufficientFunds {
                cost: upgrade.cost,
                balance,
            });
        }

        self.set_money(balance - upgrade.cost);
        Ok(self
            .island
            .expand(&mut self.storage, upgrade.size_increase, &upgrade.tile_type))
    }
}
