use std::net::Ipv4Addr;

use tracing::{debug, warn};

use crate::terminal::{format, print};
use invmap_common::config::Config;

pub fn classify(addresses: &[String], cfg: &Config) -> anyhow::Result<()> {
    let classifier = cfg.classifier();
    for rule in classifier.rules() {
        debug!("Rule {}.* -> {}", rule.prefix(), rule.zone());
    }

    let valid: Vec<&str> = addresses
        .iter()
        .map(String::as_str)
        .filter(|address| {
            let ok = address.parse::<Ipv4Addr>().is_ok();
            if !ok {
                warn!("'{address}' is not a dotted-quad IPv4 address, skipping");
            }
            ok
        })
        .collect();

    if valid.is_empty() {
        anyhow::bail!("no valid IPv4 addresses given");
    }

    let width = print::key_width(valid.iter().copied());
    for address in valid {
        let zone = classifier.classify(address);
        print::field(address, width, &format::zone_label(zone));
    }

    Ok(())
}
