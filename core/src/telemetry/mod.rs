//! telemetry/mod.rs
//! Framing telemetry: counters and immutable snapshots.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
