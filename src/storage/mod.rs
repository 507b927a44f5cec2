//! Durable storage for navigation state.
//!
//! The tracker persists through the [`StateStore`] trait; the crate ships a
//! SQLite-backed implementation for real use and an in-memory one for tests
//! and degraded operation.
//!
//! # Usage
//!
//! ```no_run
//! use navtrack::storage::SqliteStore;
//!
//! // Open a persistent store
//! let store = SqliteStore::open("navtrack.db").expect("failed to open state store");
//!
//! // Or an in-memory store for testing
//! let store = SqliteStore::open_in_memory().expect("failed to open in-memory store");
//! ```

pub mod migrations;
pub mod sqlite;
pub mod store;

pub use sqlite::SqliteStore;
pub use store::{MemoryStore, StateStore};
