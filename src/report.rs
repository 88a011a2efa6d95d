//! External collaborator: console table formatting for the dedup estimator
//! (spec §6). Kept separate from `dedup::DedupAggregator` so the aggregator
//! stays a pure data pipeline.

use crate::chunker::PackChunking;
use crate::dedup::{FileReport, Totals};

/// The preamble block describing the chosen chunker parameters (spec §6:
/// "a preamble describing mask bits, min/max chunk size, expected average
/// chunk size, and the accepted file-size range").
pub fn preamble(cfg: &PackChunking, min_file_size: u64, max_file_size: u64) -> String {
    format!(
        "mask_bits={} min_chunk={} max_chunk={} avg_chunk={} accepted_file_size=[{}, {}]",
        cfg.mask_bits(),
        cfg.min_chunk,
        cfg.max_chunk,
        cfg.avg_chunk,
        min_file_size,
        max_file_size
    )
}

const HEADER: &str = "serial  file_size  bits  avg_chunk  mean_chunk  chunks  self_bytes  glob_bytes  dedup_ratio%  file_name";

pub fn header() -> &'static str {
    HEADER
}

pub fn file_row(r: &FileReport) -> String {
    format!(
        "{:>6}  {:>9}  {:>4}  {:>9.1}  {:>10.1}  {:>6}  {:>10}  {:>10}  {:>11.3}  {}",
        r.serial,
        r.file_size,
        r.mask_bits,
        r.avg_chunk_reference,
        r.mean_chunk,
        r.chunk_count,
        r.self_bytes,
        r.global_bytes,
        r.dedup_ratio() * 100.0,
        r.name,
    )
}

pub fn total_row(totals: &Totals) -> String {
    format!(
        "{:>6}  {:>9}  {:>4}  {:>9}  {:>10}  {:>6}  {:>10}  {:>10}  {:>11.3}  {}",
        "total",
        totals.total_size,
        "-",
        "-",
        "-",
        totals.total_chunks,
        totals.total_self,
        totals.total_global,
        totals.dedup_ratio() * 100.0,
        "",
    )
}
