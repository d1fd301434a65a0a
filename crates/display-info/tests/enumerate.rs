//! Tests for display enumeration
//!

use std::sync::Arc;

use display_info::{Config, EnumerationCache, ModuleHost, Registry};
use test_helper::{FakeDirectory, FakeDisplay, Mode, logger::init_logger};

fn setup() -> (Arc<FakeDirectory>, Registry) {
    init_logger();

    let directory = FakeDirectory::new();
    directory.add_display("DisplayInfo", FakeDisplay::new(Mode::default()));
    directory.add_module("Controller");
    directory.add_display("Secondary", FakeDisplay::new(Mode::default()));
    directory.add_module("Network");

    let registry = Registry::new(Config::default(), Arc::clone(&directory) as _);
    (directory, registry)
}

fn walk(cache: &EnumerationCache, registry: &Registry) -> Vec<String> {
    (0..)
        .map_while(|index| cache.name_at(registry, index))
        .collect()
}

#[test]
fn lists_display_modules_in_catalog_order() {
    let (_directory, registry) = setup();

    let names = registry.enumerate().unwrap();

    assert_eq!(names, vec!["DisplayInfo", "Secondary"]);
}

#[test]
fn names_need_no_live_proxy() {
    let (_directory, registry) = setup();

    let _ = registry.enumerate().unwrap();

    assert!(registry.is_empty());
}

#[test]
fn probe_observer_is_removed() {
    let (directory, registry) = setup();

    let _ = registry.enumerate().unwrap();

    assert_eq!(directory.fake_host().observer_count(), 0);
}

#[test]
fn snapshot_reports_capability() {
    let (directory, _registry) = setup();

    let entries = directory.fake_host().snapshot();
    let flags: Vec<(&str, bool)> = entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry.display_properties))
        .collect();

    assert_eq!(
        flags,
        vec![
            ("DisplayInfo", true),
            ("Controller", false),
            ("Secondary", true),
            ("Network", false),
        ]
    );
}

#[test]
fn unreachable_host_is_an_error() {
    let (directory, registry) = setup();
    directory.set_unreachable(true);

    assert!(registry.enumerate().is_err());
}

#[test]
fn cache_walks_every_name() {
    let (_directory, registry) = setup();
    let cache = EnumerationCache::new();

    assert_eq!(walk(&cache, &registry), vec!["DisplayInfo", "Secondary"]);
    assert_eq!(cache.len(), 2);
}

#[test]
fn cache_is_stable_within_a_walk() {
    let (directory, registry) = setup();
    let cache = EnumerationCache::new();

    assert_eq!(cache.name_at(&registry, 0).as_deref(), Some("DisplayInfo"));

    directory.remove_display("Secondary");
    directory.add_display("Tertiary", FakeDisplay::new(Mode::default()));

    assert_eq!(cache.name_at(&registry, 1).as_deref(), Some("Secondary"));
    assert_eq!(cache.name_at(&registry, 2), None);

    // Index zero starts over with the current catalog.
    assert_eq!(walk(&cache, &registry), vec!["DisplayInfo", "Tertiary"]);
}

#[test]
fn cache_out_of_range_is_none() {
    let (_directory, registry) = setup();
    let cache = EnumerationCache::new();

    // Nothing was enumerated yet.
    assert_eq!(cache.name_at(&registry, 1), None);

    assert!(cache.name_at(&registry, 0).is_some());
    assert_eq!(cache.name_at(&registry, 2), None);
    assert_eq!(cache.name_at(&registry, 255), None);
}

#[test]
fn failed_enumeration_empties_cache() {
    let (directory, registry) = setup();
    let cache = EnumerationCache::new();

    assert_eq!(walk(&cache, &registry).len(), 2);

    directory.set_unreachable(true);
    assert_eq!(cache.name_at(&registry, 0), None);
    assert!(cache.is_empty());
    assert_eq!(cache.name_at(&registry, 1), None);
}

#[test]
fn enumerated_names_resolve() {
    let (_directory, registry) = setup();

    for name in registry.enumerate().unwrap() {
        let display = registry.instance(&name).unwrap();
        assert_eq!(display.name(), name);
    }

    assert!(registry.is_empty());
}
