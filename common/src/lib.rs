//! # Invmap Common
//!
//! Data model shared by every `invmap` crate: host facts, the zone taxonomy and
//! its classifier, per-host inventory entries and the run-wide [`inventory::Inventory`].
//!
//! Nothing in here touches the filesystem. Disk access lives in `invmap-core`.

pub mod config;
pub mod error;
pub mod inventory;
pub mod macros;

#[doc(hidden)]
pub use tracing as __tracing;
