//! Block streams: the writer that frames blocks onto a sink and the slicer
//! that recovers them from a buffer.

#[cfg(feature = "io")]
pub mod io;
pub mod slicer;
pub mod writer;

#[cfg(feature = "io")]
pub use io::{
    BlockSink,
    BlockSource,
    SharedBuffer,
};

pub use slicer::BlockSlicer;
pub use writer::BlockWriter;
