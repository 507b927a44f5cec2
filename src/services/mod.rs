// Supporting services consumed by the tracker and its callers.

pub mod preference_service;
