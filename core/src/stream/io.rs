//! Optional helpers binding block streams to files and memory.
//!
//! Enabled by the `io` feature (on by default). The writer and slicer only
//! need `std::io::Write` and `&[u8]`; nothing in `framing` or the rest of
//! `stream` depends on this module.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use bytes::Bytes;
use tracing::debug;

use crate::types::StreamError;

/// Where an encoded block stream is loaded from.
pub enum BlockSource {
    /// Any reader; drained to the end.
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    /// Bytes already in memory; taken over without copying.
    Memory(Vec<u8>),
}

/// Where a `BlockWriter` sends its frames.
pub enum BlockSink {
    Writer(Box<dyn Write + Send>),
    /// Created or truncated on open.
    File(PathBuf),
    /// Growable buffer readable through the returned `SharedBuffer`.
    Memory,
}

/// Load a whole block stream into one immutable buffer ready for slicing.
pub fn read_all(src: BlockSource) -> Result<Bytes, StreamError> {
    let mut reader: Box<dyn Read + Send> = match src {
        BlockSource::Memory(b) => return Ok(Bytes::from(b)),
        BlockSource::Reader(r) => r,
        BlockSource::File(path) => {
            debug!(path = %path.display(), "opening block stream");
            Box::new(File::open(path)?)
        }
    };
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    debug!(len = buf.len(), "loaded block stream");
    Ok(Bytes::from(buf))
}

/// Turn a `BlockSink` into a writer for `BlockWriter::new`.
///
/// For `BlockSink::Memory` the second element is a handle to the bytes
/// written so far; it stays valid after the writer is dropped.
pub fn open_sink(
    sink: BlockSink,
) -> Result<(Box<dyn Write + Send>, Option<SharedBuffer>), StreamError> {
    match sink {
        BlockSink::Writer(w) => Ok((w, None)),
        BlockSink::File(path) => {
            debug!(path = %path.display(), "creating block sink");
            Ok((Box::new(File::create(path)?), None))
        }
        BlockSink::Memory => {
            let handle = SharedBuffer::default();
            let writer = SharedBufferWriter { buf: handle.clone() };
            Ok((Box::new(writer), Some(handle)))
        }
    }
}

/// Handle on an in-memory sink.
///
/// A writer that panicked mid-write leaves the lock poisoned; readers still
/// see every byte appended before the panic.
#[derive(Clone, Default, Debug)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Copy of the current contents, ready for slicing.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Write half of a `SharedBuffer`, boxed by `open_sink`.
struct SharedBufferWriter {
    buf: SharedBuffer,
}

impl Write for SharedBufferWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
