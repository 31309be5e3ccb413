//! # Top-level Writer
//!
//! Renders the consolidated inventory: one `[zone]` section per non-empty zone,
//! one address per line, in a fixed zone order.

use std::fs;
use std::path::Path;

use invmap_common::error::{IoResultExt, Result};
use invmap_common::inventory::{Inventory, Zone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelWriter {
    order: Vec<Zone>,
}

impl Default for TopLevelWriter {
    fn default() -> Self {
        Self::new(Zone::CANONICAL_ORDER.to_vec())
    }
}

impl TopLevelWriter {
    /// Repeated zones keep their first position. [`Zone::OldStandalone`] is dropped.
    pub fn new(order: Vec<Zone>) -> Self {
        let mut deduped: Vec<Zone> = Vec::with_capacity(order.len());
        for zone in order {
            if !zone.is_deprecated() && !deduped.contains(&zone) {
                deduped.push(zone);
            }
        }
        Self { order: deduped }
    }

    pub fn order(&self) -> &[Zone] {
        &self.order
    }

    pub fn render(&self, inventory: &Inventory) -> String {
        let mut out = String::new();
        for zone in &self.order {
            let addresses = inventory.addresses(*zone);
            if addresses.is_empty() {
                continue;
            }
            out.push_str(&format!("[{zone}]\n"));
            for address in addresses {
                out.push_str(address);
                out.push('\n');
            }
        }
        out
    }

    /// Creates or truncates `file`.
    pub fn write(&self, inventory: &Inventory, file: &Path) -> Result<()> {
        fs::write(file, self.render(inventory)).at_path(file)
    }
}

/// Writes `inventory` to `file` in canonical zone order.
pub fn write_inventory(inventory: &Inventory, file: &Path) -> Result<()> {
    TopLevelWriter::default().write(inventory, file)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use invmap_common::inventory::{HostFact, InventoryEntry, ZoneClassifier};
    use tempfile::TempDir;

    fn inventory(hosts: &[&[&str]]) -> Inventory {
        let classifier = ZoneClassifier::default();
        let mut inventory = Inventory::new(classifier.clone());
        for (idx, addrs) in hosts.iter().enumerate() {
            let addrs = addrs.iter().map(|a| a.to_string()).collect();
            let fact = HostFact::new(format!("h{idx}"), addrs, "Fedora", "39");
            inventory.add(InventoryEntry::build(&fact, &classifier));
        }
        inventory
    }

    #[test]
    fn test_canonical_order_without_standalone() {
        let inv = inventory(&[&["203.0.113.4", "192.168.0.1"], &["131.1.1.1"]]);
        assert_eq!(
            TopLevelWriter::default().render(&inv),
            "[nipr]\n131.1.1.1\n[dev]\n192.168.0.1\n[unknown]\n203.0.113.4\n"
        );
    }

    #[test]
    fn test_deprecated_zone_never_rendered() {
        let inv = inventory(&[&["137.0.0.1", "10.0.0.1"]]);
        let writer =
            TopLevelWriter::new(vec![Zone::OldStandalone, Zone::Standalone, Zone::Standalone]);

        assert_eq!(writer.order(), [Zone::Standalone]);
        assert_eq!(writer.render(&inv), "[standalone]\n10.0.0.1\n");
        assert_eq!(TopLevelWriter::default().render(&inv), "[standalone]\n10.0.0.1\n");
    }

    #[test]
    fn test_custom_order() {
        let inv = inventory(&[&["10.0.0.1", "131.0.0.1"]]);
        let writer = TopLevelWriter::new(vec![Zone::Standalone, Zone::Nipr]);
        assert_eq!(writer.render(&inv), "[standalone]\n10.0.0.1\n[nipr]\n131.0.0.1\n");
    }

    #[test]
    fn test_empty_inventory_renders_nothing() {
        assert_eq!(TopLevelWriter::default().render(&inventory(&[])), "");
    }

    #[test]
    fn test_write_truncates() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("inventory");
        fs::write(&file, "stale content\n").unwrap();

        write_inventory(&inventory(&[&["10.0.0.1"]]), &file).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "[standalone]\n10.0.0.1\n");
    }
}
