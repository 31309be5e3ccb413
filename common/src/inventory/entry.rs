use std::collections::BTreeMap;

use crate::inventory::host::HostFact;
use crate::inventory::zone::{Zone, ZoneClassifier};

/// Per-host classified record.
///
/// `zone_address` keeps one representative address per zone. When a host has
/// several addresses in the same zone the last one seen wins. `ip_list` still
/// holds every address, so nothing is lost at this stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    hostname: String,
    distro: String,
    release: String,
    ip_list: Vec<String>,
    zone_address: BTreeMap<Zone, String>,
}

impl InventoryEntry {
    /// Classifies every address of `fact`.
    pub fn build(fact: &HostFact, classifier: &ZoneClassifier) -> Self {
        let mut zone_address: BTreeMap<Zone, String> = BTreeMap::new();
        for address in fact.addresses() {
            zone_address.insert(classifier.classify(address), address.clone());
        }

        Self {
            hostname: fact.name().to_owned(),
            distro: fact.distro().to_owned(),
            release: fact.release().to_owned(),
            ip_list: fact.addresses().to_vec(),
            zone_address,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn distro(&self) -> &str {
        &self.distro
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    pub fn ip_list(&self) -> &[String] {
        &self.ip_list
    }

    pub fn zone_address(&self, zone: Zone) -> Option<&str> {
        self.zone_address.get(&zone).map(String::as_str)
    }

    /// The address written to the distro/release tree, if any.
    pub fn standalone_address(&self) -> Option<&str> {
        self.zone_address(Zone::Standalone)
    }

    /// Zones this host has at least one address in, in [`Zone`] order.
    pub fn zones(&self) -> impl Iterator<Item = (Zone, &str)> {
        self.zone_address
            .iter()
            .map(|(zone, address)| (*zone, address.as_str()))
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
