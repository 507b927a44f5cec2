// State managers
// Managers own mutable session state and funnel every mutation through
// invariant-checked entry points.

pub mod navigation_tracker;
