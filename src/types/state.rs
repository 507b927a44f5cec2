use serde::{Deserialize, Serialize};

use super::page::{FavoritePage, RecentPage};

/// Complete navigation state as persisted to durable storage.
///
/// This is the serialized form that round-trips across reloads: both page
/// lists plus the last route the user visited.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationState {
    pub recent_pages: Vec<RecentPage>,
    pub favorite_pages: Vec<FavoritePage>,
    pub last_visited_route: Option<String>,
}

/// Derives the storage key for a user's navigation state.
///
/// State is keyed per user so profiles sharing one store do not clobber
/// each other.
pub fn state_key_for_user(user_id: &str) -> String {
    format!("nav_state::{}", user_id)
}
