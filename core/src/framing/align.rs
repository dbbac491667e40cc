/// Padding needed so that `pos + offset` is a multiple of `align`.
///
/// Alignments of 0 and 1 request nothing and always yield 0. The result is
/// always in `[0, align)`: an already aligned position needs no padding.
#[inline]
pub fn align_offset(align: u64, pos: u64) -> u64 {
    if align <= 1 {
        return 0;
    }
    match pos % align {
        0 => 0,
        rem => align - rem,
    }
}
