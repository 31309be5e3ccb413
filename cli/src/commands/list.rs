use std::path::Path;

use anyhow::Context;

use crate::{mprint, terminal::print};
use invmap_common::{config::Config, success};
use invmap_core::stanza;

pub fn list(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let stanzas = stanza::read_stanzas(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    if stanzas.is_empty() {
        print::nothing_found("standalone hosts");
        return Ok(());
    }

    if cfg.quiet < 2 {
        for stanza in &stanzas {
            print::stanza(&stanza.hostname, &stanza.address);
        }
        mprint!();
    }

    success!("{} host(s) in {}", stanzas.len(), file.display());
    Ok(())
}
