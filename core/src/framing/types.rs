use crate::constants::FRAME_HEADER_LEN;

/// Decoded frame header.
///
/// On the wire both fields are signed 64-bit little-endian integers;
/// decoding rejects negative values, so the in-memory form is unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameHeader {
    /// Exact payload byte count.
    pub length: u64,
    /// Padding bytes between the end of the header and the payload.
    pub offset: u64,
}

impl FrameHeader {
    pub const LEN: usize = FRAME_HEADER_LEN;

    pub fn new(length: u64, offset: u64) -> Self {
        Self { length, offset }
    }

    /// Total encoded size of the frame: header + padding + payload.
    pub fn frame_len(&self) -> u64 {
        Self::LEN as u64 + self.offset + self.length
    }
}

/// Borrowed view of one decoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView<'a> {
    pub header: FrameHeader,
    /// Absolute position of the payload inside the sliced buffer.
    pub payload_start: u64,
    pub payload: &'a [u8],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("truncated frame header: need {needed} bytes, got {available}")]
    Truncated { needed: usize, available: usize },

    #[error("negative {field} in frame header: {value}")]
    NegativeField { field: &'static str, value: i64 },

    #[error("{field} {value} does not fit a signed 64-bit header field")]
    FieldOverflow { field: &'static str, value: u64 },
}
