//! # Dynamic Inventory Converter
//!
//! Flattens an Ansible dynamic-inventory JSON document into stanza form.
//!
//! Every `_meta.hostvars` record whose `ip` differs from its `name` becomes a
//! `[name]` / `ip` stanza. A trailing `[devices]` section lists the `ip` of
//! every record, in document order. Groups and other host variables are
//! ignored.

use std::fs;
use std::path::Path;

use invmap_common::error::{InventoryError, IoResultExt, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::materialize::{is_stanza_text, stanza};
use crate::stanza::Stanza;

pub const DEVICES_SECTION: &str = "devices";

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(rename = "_meta", default)]
    meta: Meta,
}

#[derive(Debug, Default, Deserialize)]
struct Meta {
    // keeps document order
    #[serde(default)]
    hostvars: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct HostVars {
    name: String,
    ip: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Hosts whose address differs from their name.
    pub devices: Vec<Stanza>,
    /// Every host's `ip`.
    pub roster: Vec<String>,
}

impl Conversion {
    pub fn render(&self) -> String {
        let mut out: String = self
            .devices
            .iter()
            .map(|device| stanza(&device.hostname, &device.address))
            .collect();

        out.push_str(&format!("[{DEVICES_SECTION}]\n"));
        for ip in &self.roster {
            out.push_str(ip);
            out.push('\n');
        }
        out
    }
}

/// Parses a dynamic-inventory document. `path` is only used in errors.
pub fn parse_dynamic(path: &Path, text: &str) -> Result<Conversion> {
    let malformed = |reason: String| InventoryError::MalformedDynamic {
        path: path.to_path_buf(),
        reason,
    };

    let document: Document = serde_json::from_str(text).map_err(|e| malformed(e.to_string()))?;

    let mut conversion = Conversion::default();
    for (key, value) in document.meta.hostvars {
        let host = HostVars::deserialize(value)
            .map_err(|e| malformed(format!("hostvars.{key}: {e}")))?;

        if host.ip.is_empty() {
            return Err(malformed(format!("hostvars.{key}: empty ip")));
        }
        for field in [&host.name, &host.ip] {
            if !is_stanza_text(field) {
                return Err(malformed(format!(
                    "hostvars.{key}: {field:?} cannot be written as a stanza line"
                )));
            }
        }

        if host.ip != host.name {
            conversion.devices.push(Stanza {
                hostname: host.name,
                address: host.ip.clone(),
            });
        }
        conversion.roster.push(host.ip);
    }

    Ok(conversion)
}

/// Converts `source` and writes the result to `target`, replacing it.
pub fn convert(source: &Path, target: &Path) -> Result<Conversion> {
    let text = fs::read_to_string(source).at_path(source)?;
    let conversion = parse_dynamic(source, &text)?;

    fs::write(target, conversion.render()).at_path(target)?;
    debug!(
        "Wrote {} devices and {} roster lines to {}",
        conversion.devices.len(),
        conversion.roster.len(),
        target.display()
    );
    Ok(conversion)
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
    use tempfile::TempDir;

    const DOCUMENT: &str = r#"{
        "_meta": {
            "hostvars": {
                "zeta": { "name": "zeta.lan", "ip": "10.0.0.9", "ansible_user": "root" },
                "printer": { "name": "172.16.0.4", "ip": "172.16.0.4" },
                "alpha": { "name": "alpha.lan", "ip": "131.1.0.2" }
            }
        },
        "all": { "children": ["ungrouped"] }
    }"#;

    fn parse(text: &str) -> Result<Conversion> {
        parse_dynamic(Path::new("hosts.json"), text)
    }

    #[test]
    fn test_devices_and_roster_in_document_order() {
        let conversion = parse(DOCUMENT).unwrap();

        let names: Vec<&str> = conversion.devices.iter().map(|d| d.hostname.as_str()).collect();
        assert_eq!(names, vec!["zeta.lan", "alpha.lan"]);
        assert_eq!(conversion.roster, vec!["10.0.0.9", "172.16.0.4", "131.1.0.2"]);
        assert_eq!(
            conversion.render(),
            "[zeta.lan]\n10.0.0.9\n[alpha.lan]\n131.1.0.2\n\
             [devices]\n10.0.0.9\n172.16.0.4\n131.1.0.2\n"
        );
    }

    #[test]
    fn test_missing_meta_gives_empty_roster() {
        let conversion = parse(r#"{ "all": { "hosts": [] } }"#).unwrap();
        assert_eq!(conversion, Conversion::default());
        assert_eq!(conversion.render(), "[devices]\n");
    }

    #[test]
    fn test_rejects_bad_documents() {
        let cases = [
            "not json",
            r#"{ "_meta": { "hostvars": { "a": { "name": "a" } } } }"#,
            r#"{ "_meta": { "hostvars": { "a": { "name": "a", "ip": 10 } } } }"#,
            r#"{ "_meta": { "hostvars": { "a": { "name": "a]b", "ip": "10.0.0.1" } } } }"#,
            r#"{ "_meta": { "hostvars": { "a": { "name": "a", "ip": "10.0.0.1\n[x]" } } } }"#,
            r#"{ "_meta": { "hostvars": { "a": { "name": "a", "ip": "" } } } }"#,
        ];

        for text in cases {
            assert!(
                matches!(parse(text), Err(InventoryError::MalformedDynamic { .. })),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_convert_replaces_target() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("hosts.json");
        let target = tmp.path().join("inventory");
        fs::write(&source, DOCUMENT).unwrap();
        fs::write(&target, "[stale]\n10.9.9.9\n").unwrap();

        let conversion = convert(&source, &target).unwrap();

        assert_eq!(conversion.devices.len(), 2);
        assert_eq!(fs::read_to_string(&target).unwrap(), conversion.render());
    }

    #[test]
    fn test_missing_source_is_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.json");
        let err = convert(&missing, &tmp.path().join("inventory")).unwrap_err();
        assert!(matches!(err, InventoryError::Filesystem { .. }));
    }
}
