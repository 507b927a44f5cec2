//! Static navigation menu catalog.
//!
//! The tracker itself stores only opaque path/label/icon strings; this module
//! is where callers resolve a route to its display label and glyph name. When
//! a path is not in the catalog, a label is derived from the path segments and
//! an icon is inferred from route keywords.

/// A single navigable destination in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub path: &'static str,
    /// Glyph name, resolved to a renderable icon by the UI layer.
    pub icon: &'static str,
    /// Permission feature gate, empty when the item is always visible.
    pub feature: &'static str,
    pub action: &'static str,
}

/// A titled group of destinations, in menu display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationGroup {
    pub title: &'static str,
    pub items: &'static [NavigationItem],
}

const PLANNING_ITEMS: &[NavigationItem] = &[
    NavigationItem { label: "Home", path: "/", icon: "Home", feature: "", action: "" },
    NavigationItem { label: "Production Schedule", path: "/production-schedule", icon: "BarChart3", feature: "production-scheduling", action: "view" },
    NavigationItem { label: "Scheduler Dashboard", path: "/production-scheduler-dashboard", icon: "Layout", feature: "scheduling", action: "view" },
    NavigationItem { label: "Order Optimization", path: "/optimize-orders", icon: "Sparkles", feature: "scheduling-optimizer", action: "view" },
    NavigationItem { label: "Cockpit", path: "/cockpit", icon: "Monitor", feature: "production-cockpit", action: "view" },
    NavigationItem { label: "Capacity Planning", path: "/capacity-planning", icon: "Briefcase", feature: "capacity-planning", action: "view" },
    NavigationItem { label: "Production Planning", path: "/production-planning", icon: "Target", feature: "production-planning", action: "view" },
    NavigationItem { label: "Shift Management", path: "/shift-management", icon: "Clock", feature: "shift-management", action: "view" },
    NavigationItem { label: "Demand Planning", path: "/demand-planning", icon: "Brain", feature: "demand-planning", action: "view" },
    NavigationItem { label: "Constraints Management", path: "/constraints", icon: "AlertCircle", feature: "production-scheduling", action: "view" },
];

const ANALYTICS_ITEMS: &[NavigationItem] = &[
    NavigationItem { label: "Demand Forecasting", path: "/demand-forecasting", icon: "Brain", feature: "demand-forecasting", action: "view" },
    NavigationItem { label: "Analytics", path: "/analytics", icon: "BarChart3", feature: "analytics", action: "view" },
    NavigationItem { label: "Reports", path: "/reports", icon: "FileText", feature: "reports", action: "view" },
    NavigationItem { label: "Dashboards", path: "/dashboards", icon: "Layout", feature: "systems-management", action: "view" },
];

const DATA_ITEMS: &[NavigationItem] = &[
    NavigationItem { label: "Master Data Setup", path: "/data-import", icon: "Upload", feature: "data-import", action: "view" },
    NavigationItem { label: "Master Data Editor", path: "/master-data", icon: "FileText", feature: "systems-management", action: "view" },
    NavigationItem { label: "Data Schema View", path: "/data-schema", icon: "Database", feature: "systems-management", action: "view" },
    NavigationItem { label: "System Integration", path: "/systems-integration", icon: "Database", feature: "systems-integration", action: "view" },
];

const SHOP_FLOOR_ITEMS: &[NavigationItem] = &[
    NavigationItem { label: "Shop Floor", path: "/shop-floor", icon: "Smartphone", feature: "shop-floor", action: "view" },
    NavigationItem { label: "Operator Dashboard", path: "/operator-dashboard", icon: "Settings", feature: "operator-dashboard", action: "view" },
    NavigationItem { label: "Maintenance", path: "/maintenance", icon: "Wrench", feature: "maintenance", action: "view" },
];

const ONBOARDING_ITEMS: &[NavigationItem] = &[
    NavigationItem { label: "Getting Started", path: "/onboarding", icon: "BookOpen", feature: "", action: "" },
];

const GROUPS: &[NavigationGroup] = &[
    NavigationGroup { title: "Planning & Scheduling", items: PLANNING_ITEMS },
    NavigationGroup { title: "AI & Analytics", items: ANALYTICS_ITEMS },
    NavigationGroup { title: "Data Management", items: DATA_ITEMS },
    NavigationGroup { title: "Shop Floor Operations", items: SHOP_FLOOR_ITEMS },
    NavigationGroup { title: "Help & Learning", items: ONBOARDING_ITEMS },
];

/// Returns all menu groups in display order.
pub fn navigation_groups() -> &'static [NavigationGroup] {
    GROUPS
}

/// Looks up a catalog item by its route path.
pub fn item_by_path(path: &str) -> Option<&'static NavigationItem> {
    GROUPS
        .iter()
        .flat_map(|g| g.items.iter())
        .find(|item| item.path == path)
}

/// Derives a display label from a route path.
///
/// Splits on `/` and `-`, title-cases each segment: `/capacity-planning`
/// becomes `Capacity Planning`. An empty or root path yields `Page`.
pub fn derive_label(path: &str) -> String {
    let label = path
        .trim_start_matches('/')
        .split(['-', '/'])
        .filter(|s| !s.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    if label.is_empty() {
        "Page".to_string()
    } else {
        label
    }
}

/// Infers a glyph name from route keywords, falling back to `FileText`.
pub fn derive_icon(path: &str) -> &'static str {
    if path.contains("data") {
        "Database"
    } else if path.contains("analytics") || path.contains("report") {
        "BarChart3"
    } else if path.contains("dashboard") || path.contains("cockpit") {
        "Monitor"
    } else if path.contains("schedule") || path.contains("planning") {
        "Calendar"
    } else if path.contains("optimization") || path.contains("algorithm") {
        "Sparkles"
    } else {
        "FileText"
    }
}

/// Resolves the label and icon for a path.
///
/// Caller-supplied values win; otherwise the catalog entry is used, and as a
/// last resort both are derived from the path itself.
pub fn resolve_page(path: &str, label: Option<&str>, icon: Option<&str>) -> (String, String) {
    let item = item_by_path(path);
    let label = label
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .or_else(|| item.map(|i| i.label.to_string()))
        .unwrap_or_else(|| derive_label(path));
    let icon = icon
        .filter(|i| !i.is_empty())
        .map(str::to_string)
        .or_else(|| item.map(|i| i.icon.to_string()))
        .unwrap_or_else(|| derive_icon(path).to_string());
    (label, icon)
}
