use colored::*;

use invmap_common::inventory::{InventoryEntry, Zone};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// One detail per zone the host has a representative address in.
pub fn zones_to_detail(entry: &InventoryEntry) -> Vec<Detail> {
    entry
        .zones()
        .map(|(zone, address)| (zone_key(zone), address.color(colors::IPV4_ADDR)))
        .collect()
}

pub fn os_to_detail(entry: &InventoryEntry) -> Detail {
    let os: String = format!("{} {}", entry.distro(), entry.release());
    ("OS".to_string(), os.color(colors::TEXT_DEFAULT))
}

/// Extra addresses that are not any zone's representative.
pub fn shadowed_to_detail(entry: &InventoryEntry) -> Option<Detail> {
    let shadowed: Vec<&str> = entry
        .ip_list()
        .iter()
        .map(String::as_str)
        .filter(|ip| !entry.zones().any(|(_, rep)| rep == *ip))
        .collect();

    if shadowed.is_empty() {
        return None;
    }

    Some(("Other".to_string(), shadowed.join(", ").dimmed()))
}

pub fn zone_key(zone: Zone) -> String {
    zone.label().to_uppercase()
}

pub fn zone_label(zone: Zone) -> ColoredString {
    zone.label().color(colors::zone(zone)).bold()
}
