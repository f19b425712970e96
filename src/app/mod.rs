// LogPager - app/mod.rs
//
// Application layer: request-level orchestration of the core engine.

pub mod listing;
