//! blockframe-core
//!
//! Aligned block framing. A `BlockWriter` packs variable-length blocks into a
//! byte stream, padding each payload to a requested alignment; a
//! `BlockSlicer` walks that stream and hands back each payload as a
//! zero-copy slice.
//!
//! ## Frame format
//!
//! ```text
//! +-------------+-------------+------------------+-------------------+
//! | length (8)  | offset (8)  | padding (offset) | payload (length)  |
//! +-------------+-------------+------------------+-------------------+
//! ```
//!
//! Both header fields are signed 64-bit little-endian integers. Frames are
//! concatenated with no stream header or trailer.
//!
//! ## Example
//!
//! ```rust
//! use blockframe_core::constants::NO_ALIGNMENT;
//! use blockframe_core::prelude::*;
//!
//! let mut buf = Vec::new();
//! let mut writer = BlockWriter::new(&mut buf);
//! writer.write_block(b"hello", NO_ALIGNMENT).unwrap();
//! writer.write_block("world", 8).unwrap();
//!
//! let mut slicer = BlockSlicer::new(&buf);
//! assert_eq!(slicer.slice().unwrap(), Some(&b"hello"[..]));
//! assert_eq!(slicer.slice().unwrap(), Some(&b"world"[..]));
//! assert_eq!(slicer.slice().unwrap(), None);
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

pub mod framing;
pub mod telemetry;

// Stream layer
pub mod stream;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::framing::{align_offset, FrameHeader, FrameView};
    pub use crate::stream::{BlockSlicer, BlockWriter};
    pub use crate::types::StreamError;
}
