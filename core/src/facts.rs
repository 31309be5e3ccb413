//! # Host Fact Loader
//!
//! Turns a directory of gathered fact files (one host per file) into
//! [`HostFact`] records.
//!
//! Malformed files are skipped and reported. Any other I/O failure is fatal.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use invmap_common::error::{FactError, InventoryError, IoResultExt, Result};
use invmap_common::inventory::HostFact;
use tracing::{debug, warn};

pub mod parser;

pub use parser::parse_fact;

/// Result of loading a fact directory.
#[derive(Debug, Default)]
pub struct LoadedFacts {
    pub facts: Vec<HostFact>,
    /// Files that could not be parsed, with the reason.
    pub skipped: Vec<InventoryError>,
}

/// Reads and parses a single host-fact file.
pub fn load_host(path: &Path) -> Result<HostFact> {
    let file = File::open(path).at_path(path)?;
    let mut line = String::new();

    match BufReader::new(file).read_line(&mut line) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(malformed(path, FactError::NotUtf8));
        }
        Err(e) => return Err(InventoryError::filesystem(path, e)),
    }

    parse_fact(&line).map_err(|reason| malformed(path, reason))
}

/// Loads every regular file of `dir`, sorted by file name.
pub fn load_hosts(dir: &Path) -> Result<LoadedFacts> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).at_path(dir)? {
        let path = entry.at_path(dir)?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut loaded = LoadedFacts::default();
    for path in paths {
        match load_host(&path) {
            Ok(fact) => {
                debug!("Loaded {} from {}", fact.name(), path.display());
                loaded.facts.push(fact);
            }
            Err(e) if e.is_malformed_fact() => {
                warn!("Skipping {e}");
                loaded.skipped.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(loaded)
}

fn malformed(path: &Path, reason: FactError) -> InventoryError {
    InventoryError::MalformedFact {
        path: path.to_path_buf(),
        reason,
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
