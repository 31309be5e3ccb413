//! # Zone Taxonomy
//!
//! Maps an IPv4 address to a network zone by inspecting its first segment.
//!
//! Rules are evaluated top-to-bottom and the first match wins. Anything that
//! matches no rule lands in [`Zone::Unknown`], so classification is total.

use std::fmt;
use std::str::FromStr;

/// Network-segment label assigned to an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Zone {
    Nipr,
    Dev,
    Standalone,
    /// Deprecated segment. Classified and counted, never written to the top-level file.
    OldStandalone,
    Unknown,
}

impl Zone {
    pub const ALL: [Zone; 5] = [
        Zone::Nipr,
        Zone::Dev,
        Zone::Standalone,
        Zone::OldStandalone,
        Zone::Unknown,
    ];

    /// Section order of the top-level inventory file.
    pub const CANONICAL_ORDER: [Zone; 4] = [Zone::Nipr, Zone::Dev, Zone::Standalone, Zone::Unknown];

    /// Lowercase label used for section headers.
    pub fn label(self) -> &'static str {
        match self {
            Zone::Nipr => "nipr",
            Zone::Dev => "dev",
            Zone::Standalone => "standalone",
            Zone::OldStandalone => "old_standalone",
            Zone::Unknown => "unknown",
        }
    }

    pub fn is_deprecated(self) -> bool {
        self == Zone::OldStandalone
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nipr" => Ok(Zone::Nipr),
            "dev" => Ok(Zone::Dev),
            "standalone" => Ok(Zone::Standalone),
            "old_standalone" | "old-standalone" => Ok(Zone::OldStandalone),
            "unknown" => Ok(Zone::Unknown),
            _ => Err(format!("invalid zone: {s}")),
        }
    }
}

/// A single `(first segment, zone)` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRule {
    prefix: String,
    zone: Zone,
}

impl ZoneRule {
    pub fn new(prefix: impl Into<String>, zone: Zone) -> Self {
        Self {
            prefix: prefix.into(),
            zone,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Compares the first dot-separated segment of `address` with the rule prefix.
    pub fn matches(&self, address: &str) -> bool {
        address.split('.').next() == Some(self.prefix.as_str())
    }
}

impl FromStr for ZoneRule {
    type Err = String;

    /// Parses `PREFIX=ZONE`, e.g. `172=dev`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((prefix, zone)) = s.split_once('=') else {
            return Err(format!("invalid rule '{s}', expected PREFIX=ZONE"));
        };

        let prefix = prefix.trim();
        let octet = prefix
            .parse::<u8>()
            .map_err(|e| format!("invalid prefix '{prefix}' in rule '{s}': {e}"))?;

        // canonical decimal, the form an address segment takes
        Ok(ZoneRule::new(octet.to_string(), zone.parse::<Zone>()?))
    }
}

/// Ordered prefix rules with an implicit catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneClassifier {
    rules: Vec<ZoneRule>,
}

impl Default for ZoneClassifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl ZoneClassifier {
    pub fn new(rules: Vec<ZoneRule>) -> Self {
        Self { rules }
    }

    /// Evaluates `overrides` first, then the built-in rules.
    pub fn with_overrides(overrides: Vec<ZoneRule>) -> Self {
        let mut rules = overrides;
        rules.extend(default_rules());
        Self { rules }
    }

    pub fn rules(&self) -> &[ZoneRule] {
        &self.rules
    }

    /// Returns the zone of the first matching rule, [`Zone::Unknown`] otherwise.
    ///
    /// Performs no validation: callers hand in well-formed dotted quads.
    pub fn classify(&self, address: &str) -> Zone {
        self.rules
            .iter()
            .find(|rule| rule.matches(address))
            .map(ZoneRule::zone)
            .unwrap_or(Zone::Unknown)
    }
}

fn default_rules() -> Vec<ZoneRule> {
    vec![
        ZoneRule::new("192", Zone::Dev),
        ZoneRule::new("10", Zone::Standalone),
        ZoneRule::new("131", Zone::Nipr),
        ZoneRule::new("137", Zone::OldStandalone),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
