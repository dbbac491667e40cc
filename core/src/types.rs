use std::io;
use std::sync::Arc;

use crate::framing::FrameError;

/// Unified stream error for the block writer and the block slicer.
///
/// - Every variant is cheap to clone, so an instance can latch the first
///   failure and hand the same value back on every later call.
/// - I/O errors are shared through `Arc` because `io::Error` is not `Clone`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StreamError {
    /// A new block was opened while the previous one still expects bytes.
    #[error("cannot open a new block: previous block still expects {remaining} bytes")]
    BlockAlreadyOpen { remaining: u64 },

    /// An append carried more bytes than the open block has left.
    #[error("append of {requested} bytes exceeds the {remaining} bytes left in the block")]
    OverAppend { requested: u64, remaining: u64 },

    /// The underlying sink reported an I/O error.
    #[error("sink error: {0}")]
    Sink(Arc<io::Error>),

    /// I/O error while opening a sink or loading a source.
    #[error("I/O error: {0}")]
    Io(Arc<io::Error>),

    /// Fewer bytes remain in the buffer than the frame requires.
    #[error("truncated stream at byte {at}: need {needed} bytes, {available} available")]
    Truncated { needed: u64, available: u64, at: u64 },

    /// Frame-level parse error.
    #[error("frame error: {0}")]
    Frame(FrameError),
}

impl StreamError {
    /// `true` for both the stream-level and the frame-level truncation.
    pub fn is_truncated(&self) -> bool {
        matches!(
            self,
            StreamError::Truncated { .. } | StreamError::Frame(FrameError::Truncated { .. })
        )
    }

    /// The wrapped sink error, if any.
    pub fn sink_error(&self) -> Option<&io::Error> {
        match self {
            StreamError::Sink(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl PartialEq for StreamError {
    fn eq(&self, other: &Self) -> bool {
        use StreamError::*;
        match (self, other) {
            (BlockAlreadyOpen { remaining: a }, BlockAlreadyOpen { remaining: b }) => a == b,
            (
                OverAppend { requested: r1, remaining: l1 },
                OverAppend { requested: r2, remaining: l2 },
            ) => r1 == r2 && l1 == l2,
            // Same latched error, or two errors of the same kind.
            (Sink(a), Sink(b)) | (Io(a), Io(b)) => Arc::ptr_eq(a, b) || a.kind() == b.kind(),
            (
                Truncated { needed: n1, available: a1, at: p1 },
                Truncated { needed: n2, available: a2, at: p2 },
            ) => n1 == n2 && a1 == a2 && p1 == p2,
            (Frame(a), Frame(b)) => a == b,
            _ => false,
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(Arc::new(e))
    }
}

impl From<FrameError> for StreamError {
    fn from(e: FrameError) -> Self {
        StreamError::Frame(e)
    }
}
