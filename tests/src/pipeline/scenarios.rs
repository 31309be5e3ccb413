use invmap_common::inventory::ZoneClassifier;
use invmap_core::Pipeline;
use invmap_core::stanza::{self, Stanza};
use tempfile::TempDir;

use crate::utils::{fact, read};

/// A DEV-only host gets an empty release file and shows up under `[dev]`.
#[test]
fn dev_host_has_no_release_stanza() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("inventories");
    let facts = vec![fact("a.local", &["192.168.1.5"], "Fedora", "39")];

    Pipeline::new(ZoneClassifier::default(), &root).run(&facts).unwrap();

    assert_eq!(read(root.join("Fedora/39/inventory")), "");
    assert_eq!(read(root.join("inventory")), "[dev]\n192.168.1.5\n");
}

#[test]
fn standalone_host_gets_release_stanza() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let facts = vec![fact("b.local", &["10.0.0.9"], "Debian", "12")];

    Pipeline::new(ZoneClassifier::default(), root).run(&facts).unwrap();

    assert_eq!(read(root.join("Debian/12/inventory")), "[b.local]\n10.0.0.9\n");
    assert_eq!(read(root.join("inventory")), "[standalone]\n10.0.0.9\n");
}

#[test]
fn shared_release_holds_both_hosts_in_input_order() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let facts = vec![
        fact("second.local", &["10.0.0.2"], "Rocky", "9"),
        fact("first.local", &["10.0.0.1"], "Rocky", "9"),
    ];

    let report = Pipeline::new(ZoneClassifier::default(), root).run(&facts).unwrap();

    assert_eq!(report.release_files.len(), 1);
    assert_eq!(
        stanza::read_stanzas(&report.release_files[0]).unwrap(),
        vec![
            Stanza {
                hostname: "second.local".into(),
                address: "10.0.0.2".into(),
            },
            Stanza {
                hostname: "first.local".into(),
                address: "10.0.0.1".into(),
            },
        ]
    );
    assert_eq!(read(root.join("inventory")), "[standalone]\n10.0.0.2\n10.0.0.1\n");
}

#[test]
fn unmatched_address_is_unknown() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let facts = vec![fact("c.local", &["203.0.113.4"], "Alpine", "3")];

    Pipeline::new(ZoneClassifier::default(), root).run(&facts).unwrap();

    assert_eq!(read(root.join("Alpine/3/inventory")), "");
    assert_eq!(read(root.join("inventory")), "[unknown]\n203.0.113.4\n");
}

#[test]
fn sections_follow_canonical_order() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let facts = vec![
        fact("u", &["203.0.113.4"], "Fedora", "39"),
        fact("d", &["192.168.0.7"], "Fedora", "39"),
        fact("n", &["131.4.4.4"], "Fedora", "40"),
        fact("legacy", &["137.1.1.1"], "Fedora", "40"),
    ];

    let report = Pipeline::new(ZoneClassifier::default(), root).run(&facts).unwrap();

    let top = read(root.join("inventory"));
    assert_eq!(top, "[nipr]\n131.4.4.4\n[dev]\n192.168.0.7\n[unknown]\n203.0.113.4\n");
    assert!(!top.contains("[standalone]"));
    // deprecated zone is counted but never written
    assert_eq!(report.inventory.total_addresses(), 4);
}

#[test]
fn dual_homed_host_is_represented_by_last_standalone_address() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let facts = vec![fact(
        "dual.local",
        &["10.0.0.1", "131.9.9.9", "10.0.0.2"],
        "Debian",
        "12",
    )];

    Pipeline::new(ZoneClassifier::default(), root).run(&facts).unwrap();

    assert_eq!(read(root.join("Debian/12/inventory")), "[dual.local]\n10.0.0.2\n");
    assert_eq!(
        read(root.join("inventory")),
        "[nipr]\n131.9.9.9\n[standalone]\n10.0.0.1\n10.0.0.2\n"
    );
}

#[test]
fn empty_fact_set_writes_empty_top_level() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("fresh");

    let report = Pipeline::new(ZoneClassifier::default(), &root).run(&[]).unwrap();

    assert_eq!(report.hosts(), 0);
    assert!(report.release_files.is_empty());
    assert_eq!(read(root.join("inventory")), "");
}
