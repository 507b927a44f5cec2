use serde::{Deserialize, Serialize};

/// An entry in the recent-pages list: a destination the user navigated to.
///
/// Entries are keyed by `path` — no two entries in a list share one. A pinned
/// entry is exempt from size-based eviction but not from an explicit clear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentPage {
    pub path: String,
    pub label: String,
    /// Symbolic glyph name, resolved to a renderable icon by the caller.
    pub icon: String,
    /// Time of the most recent visit, milliseconds since the UNIX epoch.
    pub timestamp: i64,
    pub pinned: bool,
}

/// An entry in the user-curated favorites list.
///
/// Favorites carry no recency semantics; their order is under direct user
/// control and defaults to insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoritePage {
    pub path: String,
    pub label: String,
    pub icon: String,
    /// Time the page was favorited, milliseconds since the UNIX epoch.
    pub added_at: i64,
}
