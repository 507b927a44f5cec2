//! Unit tests for the navigation menu catalog and label/icon inference.

use navtrack::config::menu::{
    derive_icon, derive_label, item_by_path, navigation_groups, resolve_page,
};
use rstest::rstest;

#[test]
fn test_catalog_lookup_by_path() {
    let item = item_by_path("/capacity-planning").unwrap();
    assert_eq!(item.label, "Capacity Planning");
    assert_eq!(item.icon, "Briefcase");
    assert_eq!(item.feature, "capacity-planning");
}

#[test]
fn test_catalog_lookup_unknown_path() {
    assert!(item_by_path("/not-in-the-menu").is_none());
}

#[test]
fn test_groups_are_nonempty_and_paths_unique() {
    let groups = navigation_groups();
    assert!(!groups.is_empty());

    let mut paths: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.items.iter().map(|i| i.path))
        .collect();
    let total = paths.len();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), total, "catalog paths must be unique");
}

/// Labels derive from path segments split on `-` and `/`, title-cased.
#[rstest]
#[case("/capacity-planning", "Capacity Planning")]
#[case("/shop-floor", "Shop Floor")]
#[case("/reports", "Reports")]
#[case("/master-data/editor", "Master Data Editor")]
#[case("/", "Page")]
#[case("", "Page")]
fn test_derive_label(#[case] path: &str, #[case] expected: &str) {
    assert_eq!(derive_label(path), expected);
}

/// Icon inference keys on route keywords with FileText as the fallback.
#[rstest]
#[case("/data-import", "Database")]
#[case("/analytics", "BarChart3")]
#[case("/monthly-report", "BarChart3")]
#[case("/operator-dashboard", "Monitor")]
#[case("/cockpit", "Monitor")]
#[case("/production-schedule", "Calendar")]
#[case("/capacity-planning", "Calendar")]
#[case("/optimization-studio", "Sparkles")]
#[case("/maintenance", "FileText")]
fn test_derive_icon(#[case] path: &str, #[case] expected: &str) {
    assert_eq!(derive_icon(path), expected);
}

#[test]
fn test_resolve_page_prefers_caller_values() {
    let (label, icon) = resolve_page("/cockpit", Some("My Cockpit"), Some("Gauge"));
    assert_eq!(label, "My Cockpit");
    assert_eq!(icon, "Gauge");
}

#[test]
fn test_resolve_page_falls_back_to_catalog() {
    let (label, icon) = resolve_page("/cockpit", None, None);
    assert_eq!(label, "Cockpit");
    assert_eq!(icon, "Monitor");
}

#[test]
fn test_resolve_page_derives_for_unknown_path() {
    let (label, icon) = resolve_page("/custom-analytics-view", None, None);
    assert_eq!(label, "Custom Analytics View");
    assert_eq!(icon, "BarChart3");
}

#[test]
fn test_resolve_page_treats_empty_as_missing() {
    let (label, icon) = resolve_page("/cockpit", Some(""), Some(""));
    assert_eq!(label, "Cockpit");
    assert_eq!(icon, "Monitor");
}
