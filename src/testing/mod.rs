//! Test helpers: plain-text scene dumps for snapshot assertions.

pub mod snapshot;

pub use snapshot::dump_scene;
