//! # Inventory Model
//!
//! Leaf-first: [`host::HostFact`] is the raw input, [`zone::ZoneClassifier`] tags
//! each address, [`entry::InventoryEntry`] is the per-host classified record and
//! [`roster::Inventory`] rolls every entry up into per-zone address lists.

pub mod entry;
pub mod host;
pub mod roster;
pub mod zone;

pub use entry::InventoryEntry;
pub use host::HostFact;
pub use roster::Inventory;
pub use zone::{Zone, ZoneClassifier, ZoneRule};
