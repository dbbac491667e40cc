//! Wire framing for aligned blocks.
//!
//! Responsibilities:
//! - Fixed-width little-endian integer codec for header fields
//! - Padding computation for payload alignment
//! - Frame header encode / decode with strict bounds checks
//!
//! Non-responsibilities:
//! - IO
//! - Stream state (see `stream`)

pub mod types;
pub mod encode;
pub mod decode;
pub mod align;

pub use types::{
    FrameError,
    FrameHeader,
    FrameView,
};
pub use encode::{
    encode_fixed_int,
    encode_frame_header,
};
pub use decode::{
    decode_fixed_int,
    parse_frame_header,
};
pub use align::align_offset;
