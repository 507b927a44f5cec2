//! navtrack — session navigation state for the planning client.
//!
//! Tracks which pages a user has recently visited and which they have marked
//! as favorites: a bounded, deduplicated, most-recent-first recent list with
//! pin-exempt eviction, and an unbounded user-ordered favorites list. State
//! persists to durable local storage after every mutation and survives
//! reloads within the same profile.

pub mod config;
pub mod managers;
pub mod services;
pub mod storage;
pub mod types;
