//! telemetry/counters.rs
//! Mutable counters kept by the block writer and the block slicer.
//!
//! Converted into an immutable `FrameSnapshot` when a caller asks for one.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Deterministic byte and frame counters for one writer or slicer.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameCounters {
    /// Frames whose header has been emitted (writer) or decoded (slicer).
    pub frames: u64,
    pub bytes_header: u64,
    pub bytes_padding: u64,
    pub bytes_payload: u64,
}

impl FrameCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record header bytes; a complete header counts as one frame.
    pub fn add_header(&mut self, header_len: usize, complete: bool) {
        self.bytes_header += header_len as u64;
        if complete {
            self.frames += 1;
        }
    }

    pub fn add_padding(&mut self, pad_len: u64) {
        self.bytes_padding += pad_len;
    }

    pub fn add_payload(&mut self, payload_len: usize) {
        self.bytes_payload += payload_len as u64;
    }

    /// Header and padding bytes together.
    pub fn framing_overhead_bytes(&self) -> u64 {
        self.bytes_header + self.bytes_padding
    }

    pub fn total_bytes(&self) -> u64 {
        self.framing_overhead_bytes() + self.bytes_payload
    }

    pub fn merge(&mut self, other: &FrameCounters) {
        *self += *other;
    }
}

impl AddAssign for FrameCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.frames        += rhs.frames;
        self.bytes_header  += rhs.bytes_header;
        self.bytes_padding += rhs.bytes_padding;
        self.bytes_payload += rhs.bytes_payload;
    }
}
