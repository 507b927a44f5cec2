use serde::{Deserialize, Serialize};

/// Default bound on the number of unpinned recent pages.
pub const DEFAULT_MAX_RECENT_PAGES: usize = 5;

/// User preferences consumed by the navigation tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationPreferences {
    /// Maximum number of unpinned entries kept in the recent-pages list.
    pub max_recent_pages: usize,
}

impl Default for NavigationPreferences {
    fn default() -> Self {
        Self {
            max_recent_pages: DEFAULT_MAX_RECENT_PAGES,
        }
    }
}
