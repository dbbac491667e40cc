use std::iter::FusedIterator;

use tracing::{debug, warn};

use crate::framing::{parse_frame_header, FrameHeader, FrameView};
use crate::telemetry::{FrameCounters, FrameSnapshot};
use crate::types::StreamError;

/// Sequential zero-copy decoder over a buffer produced by `BlockWriter`.
///
/// Payloads are sub-slices of the borrowed buffer; nothing is copied.
/// Decoding is strictly in order. A failure is latched and returned again
/// on every later call.
///
/// One slicer is one cursor. Any number of slicers may read the same
/// buffer concurrently.
#[derive(Debug, Clone)]
pub struct BlockSlicer<'a> {
    data: &'a [u8],
    pos: usize,
    error: Option<StreamError>,
    error_yielded: bool,
    counters: FrameCounters,
}

impl<'a> BlockSlicer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            error: None,
            error_yielded: false,
            counters: FrameCounters::new(),
        }
    }

    /// Next payload, `Ok(None)` once the buffer ends exactly on a frame
    /// boundary.
    pub fn slice(&mut self) -> Result<Option<&'a [u8]>, StreamError> {
        Ok(self.slice_frame()?.map(|frame| frame.payload))
    }

    /// Like `slice`, but also returns the decoded header and payload position.
    pub fn slice_frame(&mut self) -> Result<Option<FrameView<'a>>, StreamError> {
        if let Some(e) = &self.error {
            return Err(e.clone());
        }
        if self.pos >= self.data.len() {
            debug!(position = self.pos, "end of block stream");
            return Ok(None);
        }

        // Header
        let wire = self.raw_slice(FrameHeader::LEN as u64)?;
        let header = parse_frame_header(wire).map_err(|e| self.latch(e.into()))?;
        self.counters.add_header(wire.len(), true);

        // Padding
        let pad = self.raw_slice(header.offset)?;
        self.counters.add_padding(pad.len() as u64);

        // Payload
        let payload_start = self.pos as u64;
        let payload = self.raw_slice(header.length)?;
        self.counters.add_payload(payload.len());

        Ok(Some(FrameView {
            header,
            payload_start,
            payload,
        }))
    }

    /// Bytes consumed so far.
    ///
    /// Not named `position`: on a `&mut BlockSlicer` that name resolves to
    /// `Iterator::position`.
    pub fn cursor(&self) -> u64 {
        self.pos as u64
    }

    /// Bytes left after the cursor.
    pub fn remaining(&self) -> u64 {
        (self.data.len() - self.pos) as u64
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// The latched error, if any.
    pub fn error(&self) -> Option<&StreamError> {
        self.error.as_ref()
    }

    pub fn counters(&self) -> &FrameCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::from(&self.counters)
    }

    fn latch(&mut self, e: StreamError) -> StreamError {
        warn!(error = %e, position = self.pos, "block slicer failed");
        self.error = Some(e.clone());
        e
    }

    /// Take the next `n` bytes, or latch `Truncated` if fewer remain.
    fn raw_slice(&mut self, n: u64) -> Result<&'a [u8], StreamError> {
        let available = self.remaining();
        if n > available {
            let at = self.pos as u64;
            return Err(self.latch(StreamError::Truncated { needed: n, available, at }));
        }
        let data = self.data;
        let start = self.pos;
        self.pos += n as usize;
        Ok(&data[start..self.pos])
    }
}

/// Yields payloads in order. A failure is yielded once, after which the
/// iterator ends; `slice` keeps returning the latched error.
impl<'a> Iterator for BlockSlicer<'a> {
    type Item = Result<&'a [u8], StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error_yielded {
            return None;
        }
        match self.slice() {
            Ok(Some(payload)) => Some(Ok(payload)),
            Ok(None) => None,
            Err(e) => {
                self.error_yielded = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for BlockSlicer<'_> {}
