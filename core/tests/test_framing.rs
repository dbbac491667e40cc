// Frame header codec and alignment:
//
// * `encode_fixed_int` / `decode_fixed_int`
// * `encode_frame_header` / `parse_frame_header`
// * `align_offset`

#[cfg(test)]
mod tests {
    use blockframe_core::constants::{FIELD_LEN, FRAME_HEADER_LEN};
    use blockframe_core::framing::{
        align_offset, decode_fixed_int, encode_fixed_int, encode_frame_header, parse_frame_header,
        FrameError, FrameHeader,
    };
    use proptest::prelude::*;

// # 1. Fixed integers are least-significant byte first

    #[test]
    fn fixed_int_byte_layout() {
        let cases: &[(i64, [u8; FIELD_LEN])] = &[
            (0, [0, 0, 0, 0, 0, 0, 0, 0]),
            (1, [1, 0, 0, 0, 0, 0, 0, 0]),
            (0x0F00_0000_0000_000F, [0x0F, 0, 0, 0, 0, 0, 0, 0x0F]),
            (-1, [0xFF; 8]),
            (i64::MIN, [0, 0, 0, 0, 0, 0, 0, 0x80]),
        ];
        for (n, bytes) in cases {
            assert_eq!(&encode_fixed_int(*n), bytes, "encode {n}");
            assert_eq!(decode_fixed_int(bytes), *n, "decode {n}");
        }
    }

// # 2. Header layout and roundtrip

    #[test]
    fn header_layout() {
        let wire = encode_frame_header(&FrameHeader::new(5, 3)).unwrap();
        assert_eq!(wire.len(), FRAME_HEADER_LEN);
        assert_eq!(&wire[..8], &[5, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&wire[8..], &[3, 0, 0, 0, 0, 0, 0, 0]);

        let header = parse_frame_header(&wire).unwrap();
        assert_eq!(header, FrameHeader::new(5, 3));
        assert_eq!(header.frame_len(), 16 + 3 + 5);
    }

    #[test]
    fn header_parse_ignores_trailing_bytes() {
        let mut wire = encode_frame_header(&FrameHeader::new(2, 0)).unwrap().to_vec();
        wire.extend_from_slice(b"xy");
        assert_eq!(parse_frame_header(&wire).unwrap(), FrameHeader::new(2, 0));
    }

// # 3. Rejections

    #[test]
    fn truncated_header_is_rejected() {
        let buf = vec![0u8; FrameHeader::LEN - 1];
        assert_eq!(
            parse_frame_header(&buf),
            Err(FrameError::Truncated { needed: 16, available: 15 })
        );
    }

    #[test]
    fn negative_fields_are_rejected() {
        let mut wire = [0u8; FRAME_HEADER_LEN];
        wire[..8].copy_from_slice(&encode_fixed_int(-1));
        assert_eq!(
            parse_frame_header(&wire),
            Err(FrameError::NegativeField { field: "length", value: -1 })
        );

        let mut wire = [0u8; FRAME_HEADER_LEN];
        wire[8..].copy_from_slice(&encode_fixed_int(i64::MIN));
        assert!(matches!(
            parse_frame_header(&wire),
            Err(FrameError::NegativeField { field: "offset", .. })
        ));
    }

    #[test]
    fn oversized_fields_are_rejected() {
        let header = FrameHeader::new(u64::MAX, 0);
        assert_eq!(
            encode_frame_header(&header),
            Err(FrameError::FieldOverflow { field: "length", value: u64::MAX })
        );
        assert!(encode_frame_header(&FrameHeader::new(i64::MAX as u64, 0)).is_ok());
    }

// # 4. Laws

    proptest! {
        #[test]
        fn prop_fixed_int_inverse(n in any::<i64>()) {
            prop_assert_eq!(decode_fixed_int(&encode_fixed_int(n)), n);
        }

        #[test]
        fn prop_align_offset_bounds(align in 0u64..10_000, pos in any::<u64>()) {
            let off = align_offset(align, pos);
            if align <= 1 {
                prop_assert_eq!(off, 0);
            } else {
                prop_assert!(off < align);
                prop_assert_eq!((pos as u128 + off as u128) % align as u128, 0);
            }
        }

        #[test]
        fn prop_header_roundtrip(length in 0u64..=(i64::MAX as u64), offset in 0u64..=(i64::MAX as u64)) {
            let header = FrameHeader::new(length, offset);
            let wire = encode_frame_header(&header).unwrap();
            prop_assert_eq!(parse_frame_header(&wire).unwrap(), header);
        }
    }
}
