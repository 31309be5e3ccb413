use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use colored::*;
use tracing::{info, info_span, warn};

use crate::{mprint, terminal::{colors, format, print, spinner}};
use invmap_common::{config::Config, inventory::{InventoryEntry, Zone}, success};
use invmap_core::{Pipeline, RunReport, facts};

pub fn build(facts_dir: &Path, output_dir: &Path, clean: bool, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("build", indicatif.pb_show = true);
    spinner::attach(&span, "Loading host facts...");
    let guard = span.enter();

    let start_time: Instant = Instant::now();
    let loaded = facts::load_hosts(facts_dir)
        .with_context(|| format!("failed to load host facts from {}", facts_dir.display()))?;
    success!("Loaded {} host facts from {}", loaded.facts.len(), facts_dir.display());

    if clean {
        clean_output(facts_dir, output_dir)?;
    }

    spinner::report_progress(&span, "Materializing inventories...");
    let report: RunReport = Pipeline::new(cfg.classifier(), output_dir)
        .run(&loaded.facts)
        .context("inventory build aborted; rerun after fixing the cause")?;

    drop(guard);

    build_ends(&report, loaded.skipped.len(), start_time.elapsed(), cfg);
    Ok(())
}

/// Removes `output_dir` unless that would also remove the facts being read.
fn clean_output(facts_dir: &Path, output_dir: &Path) -> anyhow::Result<()> {
    if !output_dir.exists() {
        return Ok(());
    }

    let output = output_dir
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", output_dir.display()))?;
    let facts = facts_dir
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", facts_dir.display()))?;

    if facts.starts_with(&output) {
        bail!(
            "refusing to clean {}: it contains the host facts in {}",
            output.display(),
            facts.display()
        );
    }

    fs::remove_dir_all(&output).with_context(|| format!("failed to remove {}", output.display()))?;
    info!("Removed previous output at {}", output.display());
    Ok(())
}

fn build_ends(report: &RunReport, skipped: usize, total_time: Duration, cfg: &Config) {
    if skipped > 0 {
        warn!("{skipped} host fact file(s) were skipped");
    }

    if report.hosts() == 0 {
        no_hosts_found(cfg);
        return;
    }

    if cfg.quiet > 0 {
        mprint!();
    }

    print::section("inventory", cfg.quiet);
    if cfg.quiet < 2 {
        print_hosts(report.inventory.entries());
        mprint!();
    }
    print_zone_counts(report, cfg);
    print_summary(report, total_time, cfg);
}

fn no_hosts_found(cfg: &Config) {
    print::section("build", cfg.quiet);
    print::nothing_found("host facts");
}

fn print_hosts(entries: &[InventoryEntry]) {
    for (idx, entry) in entries.iter().enumerate() {
        print_host_tree(entry, idx);
        if idx + 1 != entries.len() {
            mprint!();
        }
    }
}

fn print_host_tree(entry: &InventoryEntry, idx: usize) {
    let hostname = if entry.hostname().is_empty() { "No hostname" } else { entry.hostname() };
    let mut details = format::zones_to_detail(entry);
    if let Some(shadowed) = format::shadowed_to_detail(entry) {
        details.push(shadowed);
    }
    details.push(format::os_to_detail(entry));

    print::host_tree(idx, hostname, &details);
}

fn print_zone_counts(report: &RunReport, cfg: &Config) {
    print::section("zones", cfg.quiet);
    let counts = report.zone_counts();

    for zone in Zone::ALL {
        let count = counts.get(&zone).copied().unwrap_or(0);
        if count == 0 && zone.is_deprecated() {
            continue;
        }
        let value: ColoredString = format!("{count} address(es)").color(colors::zone(zone));
        print::zone_line(zone, &value);
    }
}

fn print_summary(report: &RunReport, total_time: Duration, cfg: &Config) {
    let hosts: ColoredString = format!("{} hosts", report.hosts()).bold().green();
    let releases: ColoredString =
        format!("{} release inventories", report.release_files.len()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!("Build Complete: {hosts} in {releases} after {total_time}")
        .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::rule();
            print::centered(&output);
            print::rule();
        }
        _ => {
            mprint!();
            success!("{}", output);
        }
    }
    info!("Consolidated inventory written to {}", report.top_level.display());
}
