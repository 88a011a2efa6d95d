//! C6 — block-aligned compressor driver.
//!
//! Computes the full chunk list for an in-memory buffer with `emit_tail =
//! true`, then streams each chunk's bytes into a gzip sink, flushing
//! (terminating the current deflate block) between chunks (spec §4.6). Two
//! inputs sharing content-defined chunks therefore produce byte-identical
//! deflate blocks for the shared portions.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::chunker::PackChunking;

/// Compress `data` block-by-block along its chunk boundaries, returning the
/// gzip bytes and the number of chunks (== the number of flushed deflate
/// blocks).
pub fn pack(data: &[u8], cfg: &PackChunking) -> std::io::Result<(Vec<u8>, usize)> {
    let (chunks, _resume) = cfg.chunk(data, 0, data.len(), true);

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    for (chunk, _code) in &chunks {
        encoder.write_all(&data[chunk.start..chunk.start + chunk.length])?;
        // `flush` on a `GzEncoder` issues a sync flush, terminating the
        // current deflate block without closing the stream.
        encoder.flush()?;
    }
    let bytes = encoder.finish()?;
    Ok((bytes, chunks.len()))
}
