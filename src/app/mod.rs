//! Session wiring of wallet, upgrade catalog, and island
//!
//! This module contains the application layer:
//! - The upgrade catalog and its level gating
//! - The session owning storage, island, and the purchase flow

/// Upgrade catalog loading and level gating
pub mod catalog;
/// Session state and the purchase flow
pub mod session;

pub use catalog::{Catalog, Upgrade};
pub use session::Session;
