use byteorder::{ByteOrder, LittleEndian};

use crate::constants::FIELD_LEN;
use crate::framing::types::{FrameError, FrameHeader};

/// Inverse of `encode_fixed_int`.
#[inline]
pub fn decode_fixed_int(field: &[u8; FIELD_LEN]) -> i64 {
    LittleEndian::read_i64(field)
}

/// Parse the 16-byte frame header at the start of `wire`.
///
/// Only the header is inspected; padding and payload bounds are the
/// caller's concern.
#[inline]
pub fn parse_frame_header(wire: &[u8]) -> Result<FrameHeader, FrameError> {
    if wire.len() < FrameHeader::LEN {
        return Err(FrameError::Truncated {
            needed: FrameHeader::LEN,
            available: wire.len(),
        });
    }

    let length = read_field(wire, 0, "length")?;
    let offset = read_field(wire, FIELD_LEN, "offset")?;

    Ok(FrameHeader { length, offset })
}

#[inline]
fn read_field(wire: &[u8], off: usize, field: &'static str) -> Result<u64, FrameError> {
    let mut raw = [0u8; FIELD_LEN];
    raw.copy_from_slice(&wire[off..off + FIELD_LEN]);
    let value = decode_fixed_int(&raw);
    u64::try_from(value).map_err(|_| FrameError::NegativeField { field, value })
}
