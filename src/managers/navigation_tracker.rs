//! Navigation history tracker.
//!
//! Implements `NavigationTrackerTrait` — a bounded, deduplicated,
//! most-recent-first list of recently visited pages with pin-exempt eviction,
//! plus an unbounded user-ordered favorites list. Both lists persist to a
//! [`StateStore`] after every mutation.
//!
//! Every operation is call-safe from UI event handlers: nothing here returns
//! an error or panics. Unknown paths and empty inputs are no-ops, and a
//! failed persistence write leaves the in-memory state serving the rest of
//! the session.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::store::StateStore;
use crate::types::page::{FavoritePage, RecentPage};
use crate::types::state::NavigationState;

/// Trait defining navigation tracking operations.
///
/// Consumers hold the tracker behind this trait so a surface rendered without
/// a wired-up tracker can be handed a [`NoopNavigationTracker`] instead.
pub trait NavigationTrackerTrait {
    fn add_recent_page(&mut self, path: &str, label: &str, icon: &str);
    fn toggle_pin_page(&mut self, path: &str);
    fn clear_recent_pages(&mut self);
    fn toggle_favorite(&mut self, path: &str, label: &str, icon: &str);
    fn is_favorite(&self, path: &str) -> bool;
    fn clear_favorites(&mut self);
    fn reorder_favorites(&mut self, new_order: Vec<FavoritePage>);
    fn move_favorite_up(&mut self, path: &str);
    fn move_favorite_down(&mut self, path: &str);
    fn recent_pages(&self) -> &[RecentPage];
    fn favorite_pages(&self) -> &[FavoritePage];
    fn last_visited_route(&self) -> Option<&str>;
    fn set_last_visited_route(&mut self, route: &str);
}

/// Stateful navigation tracker backed by a [`StateStore`].
pub struct NavigationTracker<S: StateStore> {
    store: S,
    state_key: String,
    max_recent_pages: usize,
    state: NavigationState,
}

impl<S: StateStore> NavigationTracker<S> {
    /// Creates a tracker, hydrating state stored under `state_key`.
    ///
    /// A fresh key (or an unreadable store) starts from the default state: an
    /// empty favorites list and the recent list seeded with the pinned
    /// onboarding entry. The bound applies only to unpinned entries; if a
    /// preference change shrank it since the state was saved, the overflow is
    /// evicted on hydration.
    pub fn new(store: S, state_key: impl Into<String>, max_recent_pages: usize) -> Self {
        let state_key = state_key.into();
        let max_recent_pages = max_recent_pages.max(1);

        let state = match store.load(&state_key) {
            Ok(Some(state)) => state,
            Ok(None) => Self::seeded_state(),
            Err(e) => {
                tracing::warn!(key = %state_key, error = %e, "failed to load navigation state, starting fresh");
                Self::seeded_state()
            }
        };

        let mut tracker = Self {
            store,
            state_key,
            max_recent_pages,
            state,
        };
        tracker.evict_unpinned_overflow();
        tracker
    }

    /// First-run state: recent list seeded with the pinned onboarding entry.
    fn seeded_state() -> NavigationState {
        NavigationState {
            recent_pages: vec![RecentPage {
                path: "/onboarding".to_string(),
                label: "Getting Started".to_string(),
                icon: "BookOpen".to_string(),
                timestamp: Self::now_millis(),
                pinned: true,
            }],
            favorite_pages: Vec::new(),
            last_visited_route: None,
        }
    }

    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Removes the least-recently-visited unpinned entries until the unpinned
    /// count fits the bound. The list is most-recent-first, so this scans
    /// from the tail, skipping pinned entries.
    fn evict_unpinned_overflow(&mut self) {
        let unpinned = |pages: &[RecentPage]| pages.iter().filter(|p| !p.pinned).count();
        while unpinned(&self.state.recent_pages) > self.max_recent_pages {
            if let Some(idx) = self.state.recent_pages.iter().rposition(|p| !p.pinned) {
                self.state.recent_pages.remove(idx);
            }
        }
    }

    /// Writes the current state to the store. Persistence is best-effort:
    /// a failure is logged and the in-memory state stays authoritative for
    /// the rest of the session.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state_key, &self.state) {
            tracing::warn!(key = %self.state_key, error = %e, "failed to persist navigation state");
        }
    }

    fn favorite_index(&self, path: &str) -> Option<usize> {
        self.state.favorite_pages.iter().position(|p| p.path == path)
    }
}

impl<S: StateStore> NavigationTrackerTrait for NavigationTracker<S> {
    /// Records a visit. An already-present path moves to the front with a
    /// refreshed timestamp and its label/icon overwritten in place; a new
    /// path is inserted at the front unpinned. Empty `path` or `label` is a
    /// no-op.
    fn add_recent_page(&mut self, path: &str, label: &str, icon: &str) {
        if path.is_empty() || label.is_empty() {
            return;
        }

        let pinned = match self
            .state
            .recent_pages
            .iter()
            .position(|p| p.path == path)
        {
            Some(idx) => self.state.recent_pages.remove(idx).pinned,
            None => false,
        };

        self.state.recent_pages.insert(
            0,
            RecentPage {
                path: path.to_string(),
                label: label.to_string(),
                icon: icon.to_string(),
                timestamp: Self::now_millis(),
                pinned,
            },
        );

        self.evict_unpinned_overflow();
        self.persist();
    }

    /// Flips the pinned flag on a recent entry. Unknown paths are a no-op.
    fn toggle_pin_page(&mut self, path: &str) {
        match self.state.recent_pages.iter_mut().find(|p| p.path == path) {
            Some(page) => page.pinned = !page.pinned,
            None => return,
        }
        // Unpinning may push the unpinned count past the bound
        self.evict_unpinned_overflow();
        self.persist();
    }

    /// Empties the recent list unconditionally, pinned entries included.
    fn clear_recent_pages(&mut self) {
        self.state.recent_pages.clear();
        self.persist();
    }

    /// Removes the path from favorites if present, otherwise appends it.
    /// Empty `path` or `label` is a no-op.
    fn toggle_favorite(&mut self, path: &str, label: &str, icon: &str) {
        if path.is_empty() || label.is_empty() {
            return;
        }

        match self.favorite_index(path) {
            Some(idx) => {
                self.state.favorite_pages.remove(idx);
            }
            None => self.state.favorite_pages.push(FavoritePage {
                path: path.to_string(),
                label: label.to_string(),
                icon: icon.to_string(),
                added_at: Self::now_millis(),
            }),
        }
        self.persist();
    }

    fn is_favorite(&self, path: &str) -> bool {
        self.favorite_index(path).is_some()
    }

    /// Empties the favorites list.
    fn clear_favorites(&mut self) {
        self.state.favorite_pages.clear();
        self.persist();
    }

    /// Replaces the favorites order with `new_order` verbatim.
    ///
    /// The caller (a drag-and-drop handler) computes the permutation; the
    /// tracker only verifies it is one. An order with a different path set
    /// than the current list is logged and ignored, so membership can never
    /// change through this entry point.
    fn reorder_favorites(&mut self, new_order: Vec<FavoritePage>) {
        let mut current: Vec<&str> = self
            .state
            .favorite_pages
            .iter()
            .map(|p| p.path.as_str())
            .collect();
        let mut proposed: Vec<&str> = new_order.iter().map(|p| p.path.as_str()).collect();
        current.sort_unstable();
        proposed.sort_unstable();
        if current != proposed {
            tracing::warn!(key = %self.state_key, "rejected favorites reorder: not a permutation of the current list");
            return;
        }

        self.state.favorite_pages = new_order;
        self.persist();
    }

    /// Swaps a favorite with its predecessor. No-op for the first entry or
    /// an unknown path.
    fn move_favorite_up(&mut self, path: &str) {
        match self.favorite_index(path) {
            Some(idx) if idx > 0 => {
                self.state.favorite_pages.swap(idx - 1, idx);
                self.persist();
            }
            _ => {}
        }
    }

    /// Swaps a favorite with its successor. No-op for the last entry or an
    /// unknown path.
    fn move_favorite_down(&mut self, path: &str) {
        match self.favorite_index(path) {
            Some(idx) if idx + 1 < self.state.favorite_pages.len() => {
                self.state.favorite_pages.swap(idx, idx + 1);
                self.persist();
            }
            _ => {}
        }
    }

    fn recent_pages(&self) -> &[RecentPage] {
        &self.state.recent_pages
    }

    fn favorite_pages(&self) -> &[FavoritePage] {
        &self.state.favorite_pages
    }

    fn last_visited_route(&self) -> Option<&str> {
        self.state.last_visited_route.as_deref()
    }

    fn set_last_visited_route(&mut self, route: &str) {
        if route.is_empty() {
            return;
        }
        self.state.last_visited_route = Some(route.to_string());
        self.persist();
    }
}

/// Null-object tracker for surfaces rendered without a wired-up provider.
///
/// Accepts and ignores every mutation, reads as empty. Consumers render
/// normally; the convenience features silently do nothing this session.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigationTracker;

impl NoopNavigationTracker {
    pub fn new() -> Self {
        Self
    }
}

impl NavigationTrackerTrait for NoopNavigationTracker {
    fn add_recent_page(&mut self, _path: &str, _label: &str, _icon: &str) {}

    fn toggle_pin_page(&mut self, _path: &str) {}

    fn clear_recent_pages(&mut self) {}

    fn toggle_favorite(&mut self, _path: &str, _label: &str, _icon: &str) {}

    fn is_favorite(&self, _path: &str) -> bool {
        false
    }

    fn clear_favorites(&mut self) {}

    fn reorder_favorites(&mut self, _new_order: Vec<FavoritePage>) {}

    fn move_favorite_up(&mut self, _path: &str) {}

    fn move_favorite_down(&mut self, _path: &str) {}

    fn recent_pages(&self) -> &[RecentPage] {
        &[]
    }

    fn favorite_pages(&self) -> &[FavoritePage] {
        &[]
    }

    fn last_visited_route(&self) -> Option<&str> {
        None
    }

    fn set_last_visited_route(&mut self, _route: &str) {}
}
