use std::fs;
use std::path::Path;

use invmap_common::inventory::HostFact;

pub fn fact(name: &str, addrs: &[&str], distro: &str, release: &str) -> HostFact {
    HostFact::new(name, addrs.iter().map(|a| a.to_string()).collect(), distro, release)
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path.as_ref())
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.as_ref().display()))
}
