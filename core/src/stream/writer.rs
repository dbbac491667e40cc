use std::io::{self, Write};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::constants::{PAD_CHUNK_LEN, ZERO_PAD};
use crate::framing::{align_offset, encode_frame_header, FrameHeader};
use crate::telemetry::{FrameCounters, FrameSnapshot};
use crate::types::StreamError;

/// Writes aligned blocks to a borrowed sink.
///
/// Each block is emitted as `[length][offset][padding][payload]`. The writer
/// counts every byte the sink accepts and aligns payloads relative to that
/// count, i.e. relative to where this writer started, not to the sink's
/// absolute position. A sink that already holds bytes when the writer is
/// attached gets payloads aligned to the writer's start.
///
/// The first failure is latched: every later call returns the same error
/// without touching the sink. Build a new writer to continue.
///
/// Only one writer may feed a given sink at a time; the `&mut` borrow
/// enforces this for the writer's lifetime.
pub struct BlockWriter<'a, W: Write> {
    out: &'a mut W,
    bytes_written: u64,
    remaining: u64,
    error: Option<StreamError>,
    counters: FrameCounters,
}

impl<'a, W: Write> BlockWriter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self {
            out,
            bytes_written: 0,
            remaining: 0,
            error: None,
            counters: FrameCounters::new(),
        }
    }

    /// Write `data` as one complete block aligned to `align` bytes.
    ///
    /// Same as `open_block(align, data.len())` followed by `append(data)`.
    pub fn write_block<B: AsRef<[u8]>>(&mut self, data: B, align: u64) -> Result<(), StreamError> {
        let data = data.as_ref();
        self.open_block(align, data.len() as u64)?;
        self.append(data)
    }

    /// Start a block of `length` payload bytes whose payload begins at a
    /// multiple of `align` (counted from the writer's start).
    ///
    /// Alignments `<= 1` request no padding. Fails with `BlockAlreadyOpen`
    /// while the previous block still expects bytes.
    pub fn open_block(&mut self, align: u64, length: u64) -> Result<(), StreamError> {
        self.check()?;
        if self.remaining > 0 {
            let remaining = self.remaining;
            return Err(self.latch(StreamError::BlockAlreadyOpen { remaining }));
        }

        let header_end = self.bytes_written.saturating_add(FrameHeader::LEN as u64);
        let offset = align_offset(align, header_end);
        let header = FrameHeader::new(length, offset);
        let wire = encode_frame_header(&header).map_err(|e| self.latch(e.into()))?;

        debug!(
            position = self.bytes_written,
            align,
            length,
            offset,
            "opening block"
        );

        // --- Header ---
        let (n, res) = self.raw_write(&wire);
        self.counters.add_header(n, n == wire.len());
        self.sink_result(res)?;

        // --- Padding ---
        let mut left = offset;
        while left > 0 {
            let chunk = left.min(PAD_CHUNK_LEN as u64) as usize;
            let (n, res) = self.raw_write(&ZERO_PAD[..chunk]);
            self.counters.add_padding(n as u64);
            left -= n as u64;
            self.sink_result(res)?;
        }

        self.remaining = length;
        Ok(())
    }

    /// Append a chunk to the open block.
    ///
    /// Fails with `OverAppend` if the chunk is longer than what the block
    /// has left. The block closes once its declared length is reached.
    pub fn append<B: AsRef<[u8]>>(&mut self, chunk: B) -> Result<(), StreamError> {
        self.check()?;
        let data = chunk.as_ref();
        let requested = data.len() as u64;
        if requested > self.remaining {
            let remaining = self.remaining;
            return Err(self.latch(StreamError::OverAppend { requested, remaining }));
        }

        let (n, res) = self.raw_write(data);
        self.remaining -= n as u64;
        self.counters.add_payload(n);
        trace!(appended = n, remaining = self.remaining, "append");
        self.sink_result(res)
    }

    /// Bytes the sink has accepted since construction.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Payload bytes the open block still expects (0 when none is open).
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_block_open(&self) -> bool {
        self.remaining > 0
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

    /// Shared access to the sink, e.g. to inspect an in-memory buffer.
    pub fn sink(&self) -> &W {
        &*self.out
    }

    fn check(&self) -> Result<(), StreamError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn latch(&mut self, e: StreamError) -> StreamError {
        warn!(error = %e, position = self.bytes_written, "block writer failed");
        self.error = Some(e.clone());
        e
    }

    fn sink_result(&mut self, res: io::Result<()>) -> Result<(), StreamError> {
        res.map_err(|e| self.latch(StreamError::Sink(Arc::new(e))))
    }

    /// Push `data` into the sink, counting each accepted byte even when the
    /// sink fails part way. Returns the number of bytes accepted.
    fn raw_write(&mut self, data: &[u8]) -> (usize, io::Result<()>) {
        let mut done = 0;
        while done < data.len() {
            match self.out.write(&data[done..]) {
                Ok(0) => {
                    let e = io::Error::new(io::ErrorKind::WriteZero, "sink accepted no bytes");
                    return (done, Err(e));
                }
                Ok(n) => {
                    done += n;
                    self.bytes_written += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return (done, Err(e)),
            }
        }
        (done, Ok(()))
    }
}
