//! telemetry/snapshot.rs
//!
//! Immutable, serializable view over `FrameCounters`.

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::FrameCounters;

/// Point-in-time framing summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frames: u64,
    pub bytes_header: u64,
    pub bytes_padding: u64,
    pub bytes_payload: u64,
    pub bytes_total: u64,
    /// Share of the stream spent on headers and padding, in `[0, 1]`.
    pub overhead_ratio: f64,
}

impl FrameSnapshot {
    pub fn from(counters: &FrameCounters) -> Self {
        let bytes_total = counters.total_bytes();
        let overhead_ratio = if bytes_total > 0 {
            counters.framing_overhead_bytes() as f64 / bytes_total as f64
        } else {
            0.0
        };

        Self {
            frames: counters.frames,
            bytes_header: counters.bytes_header,
            bytes_padding: counters.bytes_padding,
            bytes_payload: counters.bytes_payload,
            bytes_total,
            overhead_ratio,
        }
    }

    /// Invariants that hold for any snapshot built from counters.
    pub fn sanity_check(&self) -> bool {
        self.bytes_total == self.bytes_header + self.bytes_padding + self.bytes_payload
            && (0.0..=1.0).contains(&self.overhead_ratio)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
