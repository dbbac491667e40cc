/// Width of each fixed integer header field (length, offset).
pub const FIELD_LEN: usize = 8;

/// Frame header size: `[length: i64 LE][offset: i64 LE]`.
pub const FRAME_HEADER_LEN: usize = 2 * FIELD_LEN;

/// Alignment value meaning "no alignment requested".
/// Any alignment `<= 1` behaves the same way.
pub const NO_ALIGNMENT: u64 = 0;

/// Size of the static zero block used to emit padding.
/// Larger paddings are written as repeated chunks, never allocated.
pub const PAD_CHUNK_LEN: usize = 512;

pub(crate) static ZERO_PAD: [u8; PAD_CHUNK_LEN] = [0u8; PAD_CHUNK_LEN];
