//! # Hierarchy Materializer
//!
//! Lays out `<root>/<distro>/<release>/inventory` for every entry.
//!
//! Only the first host of a `(distro, release)` pair creates the release
//! directory and its empty `inventory` file. Later hosts append to it. Hosts
//! are represented in the tree only by their standalone address.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use invmap_common::error::{IoResultExt, Result};
use invmap_common::inventory::InventoryEntry;
use tracing::debug;

/// File name used for both per-release and top-level inventories.
pub const INVENTORY_FILE: &str = "inventory";

pub struct Materializer {
    root: PathBuf,
}

impl Materializer {
    /// Creates `root` if it is absent.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).at_path(&root)?;
        Ok(Self { root })
    }

    /// Ensures the entry's release directory exists and appends its stanza.
    ///
    /// Returns the path of the per-release inventory file.
    pub fn materialize(&self, entry: &InventoryEntry) -> Result<PathBuf> {
        let os_path = self.root.join(entry.distro());
        if !os_path.exists() {
            fs::create_dir(&os_path).at_path(&os_path)?;
        }

        let release_path = os_path.join(entry.release());
        let inventory_path = release_path.join(INVENTORY_FILE);
        if !release_path.exists() {
            fs::create_dir(&release_path).at_path(&release_path)?;
            File::create(&inventory_path).at_path(&inventory_path)?;
            debug!("Created {}", inventory_path.display());
        }

        if let Some(address) = entry.standalone_address() {
            let mut file = OpenOptions::new()
                .append(true)
                .open(&inventory_path)
                .at_path(&inventory_path)?;
            file.write_all(stanza(entry.hostname(), address).as_bytes())
                .at_path(&inventory_path)?;
        }

        Ok(inventory_path)
    }
}

/// Two-line per-host block: `[hostname]` then the address.
pub fn stanza(hostname: &str, address: &str) -> String {
    format!("[{hostname}]\n{address}\n")
}

/// `true` if `s` fits on one stanza line without being read as a header.
pub fn is_stanza_text(s: &str) -> bool {
    !s.contains(['[', ']']) && !s.chars().any(char::is_control)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
