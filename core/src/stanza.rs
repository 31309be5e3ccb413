//! Reads a per-release inventory file back into `(hostname, address)` pairs.

use std::fs;
use std::path::Path;

use invmap_common::error::{InventoryError, IoResultExt, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stanza {
    pub hostname: String,
    pub address: String,
}

pub fn read_stanzas(path: &Path) -> Result<Vec<Stanza>> {
    let text = fs::read_to_string(path).at_path(path)?;
    parse_stanzas(path, &text)
}

fn parse_stanzas(path: &Path, text: &str) -> Result<Vec<Stanza>> {
    let malformed = |line: usize, reason: String| InventoryError::MalformedInventory {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut stanzas = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            if let Some((at, hostname)) = pending.take() {
                return Err(malformed(at, format!("host [{hostname}] has no address")));
            }
            pending = Some((line_no, header.to_owned()));
            continue;
        }

        match pending.take() {
            Some((_, hostname)) => stanzas.push(Stanza {
                hostname,
                address: line.to_owned(),
            }),
            None => {
                return Err(malformed(line_no, format!("address '{line}' outside a host block")));
            }
        }
    }

    if let Some((at, hostname)) = pending {
        return Err(malformed(at, format!("host [{hostname}] has no address")));
    }

    Ok(stanzas)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
