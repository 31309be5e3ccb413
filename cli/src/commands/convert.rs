use std::path::Path;

use anyhow::Context;

use crate::{mprint, terminal::print};
use invmap_common::{config::Config, success};
use invmap_core::convert;

pub fn convert(source: &Path, target: &Path, cfg: &Config) -> anyhow::Result<()> {
    let conversion = convert::convert(source, target)
        .with_context(|| format!("failed to convert {}", source.display()))?;

    if cfg.quiet < 2 {
        for device in &conversion.devices {
            print::stanza(&device.hostname, &device.address);
        }
        if !conversion.devices.is_empty() {
            mprint!();
        }
    }

    success!(
        "{} device(s), {} roster address(es) written to {}",
        conversion.devices.len(),
        conversion.roster.len(),
        target.display()
    );
    Ok(())
}
