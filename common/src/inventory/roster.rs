//! # Inventory Aggregator
//!
//! Accumulates every [`InventoryEntry`] of a run and rebuilds the per-zone
//! address rosters from each entry's full address list.
//!
//! The rosters are exhaustive: unlike [`InventoryEntry::zone_address`] they keep
//! every address of every host. Duplicates across hosts are preserved.

use std::collections::BTreeMap;

use crate::inventory::entry::InventoryEntry;
use crate::inventory::zone::{Zone, ZoneClassifier};

#[derive(Debug, Clone)]
pub struct Inventory {
    classifier: ZoneClassifier,
    entries: Vec<InventoryEntry>,
    zones: BTreeMap<Zone, Vec<String>>,
}

impl Inventory {
    pub fn new(classifier: ZoneClassifier) -> Self {
        Self {
            classifier,
            entries: Vec::new(),
            zones: BTreeMap::new(),
        }
    }

    /// Appends `entry` and files each of its addresses under its zone.
    pub fn add(&mut self, entry: InventoryEntry) {
        for address in entry.ip_list() {
            let zone = self.classifier.classify(address);
            self.zones.entry(zone).or_default().push(address.clone());
        }
        self.entries.push(entry);
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    /// Addresses of `zone` in the order their hosts were added.
    pub fn addresses(&self, zone: Zone) -> &[String] {
        self.zones.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn zone_counts(&self) -> BTreeMap<Zone, usize> {
        Zone::ALL
            .into_iter()
            .map(|zone| (zone, self.addresses(zone).len()))
            .collect()
    }

    pub fn total_addresses(&self) -> usize {
        self.zones.values().map(Vec::len).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<InventoryEntry> for Inventory {
    fn extend<I: IntoIterator<Item = InventoryEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
