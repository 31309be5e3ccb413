use std::fs;

use invmap_common::error::{FactError, InventoryError};
use invmap_common::inventory::{Zone, ZoneClassifier, ZoneRule};
use invmap_core::{Pipeline, facts, stanza};
use tempfile::TempDir;

use crate::utils::read;

/// Facts on disk through to the output tree, with one broken file in the mix.
#[test]
fn loads_directory_and_builds() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let hosts = tmp.path().join("hosts");
    let root = tmp.path().join("inventories");
    fs::create_dir(&hosts)?;

    fs::write(
        hosts.join("web01"),
        "('web01.lan', ['10.1.0.5', '192.168.10.5'], ['Fedora', '39'])\n",
    )?;
    fs::write(hosts.join("db01"), "(\"db01.lan\", [\"131.20.0.9\"], [\"RedHat\", \"8\"])")?;
    fs::write(hosts.join("broken"), "('oops', ['10.0.0.1'], ['Fedora'])")?;

    let loaded = facts::load_hosts(&hosts)?;
    assert_eq!(loaded.facts.len(), 2);
    assert_eq!(loaded.skipped.len(), 1);

    let report = Pipeline::new(ZoneClassifier::default(), &root).run(&loaded.facts)?;

    assert_eq!(report.hosts(), 2);
    assert_eq!(read(root.join("Fedora/39/inventory")), "[web01.lan]\n10.1.0.5\n");
    assert_eq!(read(root.join("RedHat/8/inventory")), "");
    assert_eq!(
        read(root.join("inventory")),
        "[nipr]\n131.20.0.9\n[dev]\n192.168.10.5\n[standalone]\n10.1.0.5\n"
    );
    Ok(())
}

#[test]
fn override_rules_change_the_tree() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let root = tmp.path();
    let facts = vec![crate::utils::fact("lab", &["172.16.0.4"], "Debian", "12")];

    let rule = "172=standalone".parse::<ZoneRule>().map_err(anyhow::Error::msg)?;
    let classifier = ZoneClassifier::with_overrides(vec![rule]);
    let report = Pipeline::new(classifier, root).run(&facts)?;

    assert_eq!(report.zone_counts()[&Zone::Standalone], 1);
    assert_eq!(read(root.join("Debian/12/inventory")), "[lab]\n172.16.0.4\n");
    Ok(())
}

/// Running twice over the same tree keeps the first run's stanzas.
#[test]
fn rerun_appends_to_existing_release_files() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let root = tmp.path();
    let facts = vec![crate::utils::fact("a", &["10.0.0.1"], "Debian", "12")];
    let pipeline = Pipeline::new(ZoneClassifier::default(), root);

    pipeline.run(&facts)?;
    pipeline.run(&facts)?;

    assert_eq!(read(root.join("Debian/12/inventory")), "[a]\n10.0.0.1\n[a]\n10.0.0.1\n");
    // top-level file is always a full rewrite
    assert_eq!(read(root.join("inventory")), "[standalone]\n10.0.0.1\n");
    Ok(())
}

/// A host name that would forge extra stanza lines never reaches the tree.
#[test]
fn header_breaking_names_are_skipped() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let hosts = tmp.path().join("hosts");
    let root = tmp.path().join("inventories");
    fs::create_dir(&hosts)?;

    fs::write(
        hosts.join("evil"),
        r"('evil\n10.9.9.9\n[x', ['10.0.0.1'], ['Debian', '12'])",
    )?;
    fs::write(hosts.join("bracket"), "('a]b', ['10.0.0.2'], ['Debian', '12'])")?;
    fs::write(hosts.join("good"), "('good', ['10.0.0.3'], ['Debian', '12'])")?;

    let loaded = facts::load_hosts(&hosts)?;
    assert_eq!(loaded.facts.len(), 1);
    assert!(loaded.skipped.iter().all(|err| matches!(
        err,
        InventoryError::MalformedFact { reason: FactError::InvalidHostName(_), .. }
    )));

    let report = Pipeline::new(ZoneClassifier::default(), &root).run(&loaded.facts)?;
    let stanzas = stanza::read_stanzas(&report.release_files[0])?;

    assert_eq!(stanzas.len(), 1);
    assert_eq!(stanzas[0].hostname, "good");
    assert_eq!(read(root.join("Debian/12/inventory")), "[good]\n10.0.0.3\n");
    Ok(())
}
