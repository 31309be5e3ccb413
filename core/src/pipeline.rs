//! # Inventory Pipeline
//!
//! One full rebuild per run, no retries, no resumption:
//!
//! 1. **Classify**: every fact becomes an [`InventoryEntry`] (in parallel, input order kept).
//! 2. **Aggregate**: entries are rolled up into an [`Inventory`].
//! 3. **Materialize**: each entry lands in `<root>/<distro>/<release>/inventory`.
//! 4. **Write**: the consolidated `<root>/inventory` is written last.
//!
//! A filesystem error in any phase aborts before the top-level write.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use invmap_common::error::Result;
use invmap_common::inventory::{HostFact, Inventory, InventoryEntry, Zone, ZoneClassifier};
use rayon::prelude::*;
use tracing::{debug, debug_span};

use crate::materialize::{INVENTORY_FILE, Materializer};
use crate::writer::TopLevelWriter;

pub struct Pipeline {
    classifier: ZoneClassifier,
    root: PathBuf,
    writer: TopLevelWriter,
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunReport {
    pub inventory: Inventory,
    /// Per-release inventory files, in the order they were first touched.
    pub release_files: Vec<PathBuf>,
    pub top_level: PathBuf,
}

impl RunReport {
    pub fn hosts(&self) -> usize {
        self.inventory.len()
    }

    pub fn zone_counts(&self) -> BTreeMap<Zone, usize> {
        self.inventory.zone_counts()
    }
}

impl Pipeline {
    pub fn new(classifier: ZoneClassifier, root: impl Into<PathBuf>) -> Self {
        Self {
            classifier,
            root: root.into(),
            writer: TopLevelWriter::default(),
        }
    }

    pub fn writer(mut self, writer: TopLevelWriter) -> Self {
        self.writer = writer;
        self
    }

    pub fn classify_all(&self, facts: &[HostFact]) -> Vec<InventoryEntry> {
        facts
            .par_iter()
            .map(|fact| InventoryEntry::build(fact, &self.classifier))
            .collect()
    }

    pub fn aggregate_all(&self, entries: Vec<InventoryEntry>) -> Inventory {
        let mut inventory = Inventory::new(self.classifier.clone());
        inventory.extend(entries);
        inventory
    }

    pub fn run(&self, facts: &[HostFact]) -> Result<RunReport> {
        let span = debug_span!("pipeline", root = %self.root.display());
        let _guard = span.enter();

        let entries = self.classify_all(facts);
        debug!("Classified {} hosts", entries.len());

        let inventory = self.aggregate_all(entries);
        debug!("Aggregated {} addresses", inventory.total_addresses());

        let materializer = Materializer::new(&self.root)?;
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut release_files: Vec<PathBuf> = Vec::new();
        for entry in inventory.entries() {
            let path = materializer.materialize(entry)?;
            if seen.insert(path.clone()) {
                release_files.push(path);
            }
        }
        debug!("Materialized {} release inventories", release_files.len());

        let top_level = self.root.join(INVENTORY_FILE);
        self.writer.write(&inventory, &top_level)?;

        Ok(RunReport {
            inventory,
            release_files,
            top_level,
        })
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
