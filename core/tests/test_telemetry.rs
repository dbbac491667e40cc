#[cfg(test)]
mod frame_snapshot_tests {
    use blockframe_core::prelude::*;
    use blockframe_core::telemetry::{FrameCounters, FrameSnapshot};

    fn make_counters() -> FrameCounters {
        FrameCounters {
            frames: 2,
            bytes_header: 32,
            bytes_padding: 8,
            bytes_payload: 60,
        }
    }

    #[test]
    fn snapshot_derives_totals_and_ratio() {
        let snapshot = FrameSnapshot::from(&make_counters());
        assert_eq!(snapshot.bytes_total, 100);
        assert!((snapshot.overhead_ratio - 0.4).abs() < f64::EPSILON);
        assert!(snapshot.sanity_check());
    }

    #[test]
    fn empty_snapshot_has_zero_ratio() {
        let snapshot = FrameSnapshot::from(&FrameCounters::default());
        assert_eq!(snapshot.overhead_ratio, 0.0);
        assert!(snapshot.sanity_check());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snapshot = FrameSnapshot::from(&make_counters());
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"frames\":2"));

        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn writer_snapshot_covers_whole_stream() {
        let mut buf = Vec::new();
        let mut writer = BlockWriter::new(&mut buf);
        writer.write_block(b"hello", 0).unwrap();
        writer.write_block(b"world", 16).unwrap();
        let snapshot = writer.snapshot();

        assert_eq!(snapshot.frames, 2);
        assert_eq!(snapshot.bytes_total, buf.len() as u64);
        assert!(snapshot.sanity_check());
    }
}
