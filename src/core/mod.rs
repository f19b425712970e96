// LogPager - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform or app.

pub mod discovery;
pub mod export;
pub mod filter;
pub mod model;
pub mod pagination;
