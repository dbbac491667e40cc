use byteorder::{ByteOrder, LittleEndian};

use crate::constants::FIELD_LEN;
use crate::framing::types::{FrameError, FrameHeader};

/// Store `value` least-significant byte first into a fixed 8-byte field.
#[inline]
pub fn encode_fixed_int(value: i64) -> [u8; FIELD_LEN] {
    let mut out = [0u8; FIELD_LEN];
    LittleEndian::write_i64(&mut out, value);
    out
}

/// Encode a frame header into canonical wire format.
///
/// Layout:
///
/// ```text
/// [ length (8) ]
/// [ offset (8) ]
/// ```
///
/// Fails with `FieldOverflow` if either field exceeds `i64::MAX`.
pub fn encode_frame_header(header: &FrameHeader) -> Result<[u8; FrameHeader::LEN], FrameError> {
    let length = to_wire("length", header.length)?;
    let offset = to_wire("offset", header.offset)?;

    let mut out = [0u8; FrameHeader::LEN];
    out[..FIELD_LEN].copy_from_slice(&encode_fixed_int(length));
    out[FIELD_LEN..].copy_from_slice(&encode_fixed_int(offset));
    Ok(out)
}

#[inline]
fn to_wire(field: &'static str, value: u64) -> Result<i64, FrameError> {
    i64::try_from(value).map_err(|_| FrameError::FieldOverflow { field, value })
}
