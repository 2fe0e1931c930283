//! Sidebar navigation: a static route list with the current entry
//! highlighted by exact path match.

/// A configured navigation destination.
#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    /// Display label.
    pub label: &'static str,
    /// Route path. Matched exactly against the current location, with no
    /// prefix or nested-route awareness.
    pub path: &'static str,
}

/// The panel's destinations, in sidebar order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Dashboard",
        path: "/",
    },
    NavEntry {
        label: "Clients",
        path: "/clients",
    },
    NavEntry {
        label: "Print Jobs",
        path: "/print-jobs",
    },
];

/// A navigation entry resolved against the current path, for templates.
#[derive(Debug, Clone)]
pub struct NavItemView {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Resolve the nav entries against the current path.
///
/// At most one entry is active; a path matching no entry activates none.
#[must_use]
pub fn items_for(current_path: &str) -> Vec<NavItemView> {
    NAV_ENTRIES
        .iter()
        .map(|entry| NavItemView {
            label: entry.label,
            path: entry.path,
            active: entry.path == current_path,
        })
        .collect()
}
