// LogPager - lib.rs
//
// Library entry point. The listing engine is consumed in-process by a
// transport layer; the `logpager` binary in `main.rs` is one such consumer.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
