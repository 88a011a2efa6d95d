//! Content-defined chunking dedup estimator and block-aligned gzip packer.
//!
//! The core (spec §1): a rolling-hash anchor detector (`chunker::rolling`),
//! a chunk cutter (`chunker::cutter`), a chunk fingerprint/code
//! (`chunker::code`), and a streaming file chunker (`chunker::file_chunker`)
//! feed two independent consumers: [`dedup::DedupAggregator`] for
//! cross-file redundancy reporting, and [`pack`] for block-aligned gzip
//! output. [`index::ChunkIndex`] is an optional diagnostic overlay over the
//! same chunk codes.

pub mod chunker;
pub mod config;
pub mod dedup;
pub mod error;
pub mod fsutil;
pub mod index;
pub mod pack;
pub mod report;

pub use chunker::{DigestAlgorithm, PackChunking};
