//! C5 — dedup aggregator.
//!
//! Consumes per-file chunk-code sequences, in sorted-path processing order,
//! and computes per-file self/global dedup byte counts plus running totals
//! (spec §4.5). The ordering is part of the contract: results would differ
//! under reordering (spec §5).

use std::collections::HashSet;

use crate::chunker::code;

/// One file's dedup accounting, produced by [`DedupAggregator::process_file`].
#[derive(Debug, Clone)]
pub struct FileReport {
    pub serial: usize,
    pub name: String,
    pub file_size: u64,
    pub mask_bits: u32,
    pub chunk_count: usize,
    /// Reference formula: `file_size / chunk_count` (spec §9 open question
    /// 2 — included un-chunked trailing bytes in the numerator).
    pub avg_chunk_reference: f64,
    /// Corrected formula: `sum(length) / chunk_count`.
    pub mean_chunk: f64,
    pub self_bytes: u64,
    pub global_bytes: u64,
}

impl FileReport {
    pub fn dedup_ratio(&self) -> f64 {
        if self.file_size == 0 {
            0.0
        } else {
            (self.self_bytes + self.global_bytes) as f64 / self.file_size as f64
        }
    }
}

/// Running totals across every file processed so far.
#[derive(Debug, Clone, Default)]
pub struct Totals {
    pub total_size: u64,
    pub total_chunks: usize,
    pub total_self: u64,
    pub total_global: u64,
}

impl Totals {
    pub fn dedup_ratio(&self) -> f64 {
        if self.total_size == 0 {
            0.0
        } else {
            (self.total_self + self.total_global) as f64 / self.total_size as f64
        }
    }
}

/// Holds the global chunk set `G` (spec §3 "Global dedup state") across a
/// run. Files must be fed in sorted-path order; this is the caller's
/// responsibility (see `fsutil::list_files`).
#[derive(Default)]
pub struct DedupAggregator {
    global: HashSet<u64>,
    totals: Totals,
    serial: usize,
}

impl DedupAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Process one file's chunk code sequence (spec §4.5 steps 1-5).
    pub fn process_file(
        &mut self,
        name: &str,
        file_size: u64,
        mask_bits: u32,
        codes: &[u64],
    ) -> FileReport {
        self.serial += 1;

        let mut in_file = HashSet::new();
        let mut self_bytes: u64 = 0;
        let mut global_bytes: u64 = 0;

        for &c in codes {
            let len = code::length(c) as u64;
            if in_file.contains(&c) {
                // Already seen earlier in this file: charges to self,
                // regardless of global membership (spec §4.5 step 2, and
                // the "tie-break" rule in §4.5/§8/glossary).
                self_bytes += len;
                continue;
            }
            in_file.insert(c);
            if self.global.contains(&c) {
                global_bytes += len;
            }
        }

        self.global.extend(in_file.iter().copied());

        self.totals.total_size += file_size;
        self.totals.total_chunks += codes.len();
        self.totals.total_self += self_bytes;
        self.totals.total_global += global_bytes;

        let avg_chunk_reference = if codes.is_empty() {
            0.0
        } else {
            file_size as f64 / codes.len() as f64
        };
        let mean_chunk = if codes.is_empty() {
            0.0
        } else {
            codes.iter().map(|&c| code::length(c) as u64).sum::<u64>() as f64 / codes.len() as f64
        };

        FileReport {
            serial: self.serial,
            name: name.to_string(),
            file_size,
            mask_bits,
            chunk_count: codes.len(),
            avg_chunk_reference,
            mean_chunk,
            self_bytes,
            global_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::code::pack;

    fn synth_file(lens: &[usize], digests: &[u64]) -> Vec<u64> {
        lens.iter()
            .zip(digests)
            .map(|(&len, &d)| pack(d, len))
            .collect()
    }

    #[test]
    fn first_occurrence_of_a_chunk_in_the_corpus_is_not_global() {
        let mut agg = DedupAggregator::new();
        let file1 = synth_file(&[100, 200], &[1, 2]);
        let r1 = agg.process_file("a", 300, 6, &file1);
        assert_eq!(r1.global_bytes, 0);
        assert_eq!(r1.self_bytes, 0);
    }

    #[test]
    fn a_chunk_seen_in_an_earlier_file_counts_as_global() {
        let mut agg = DedupAggregator::new();
        agg.process_file("a", 300, 6, &synth_file(&[100, 200], &[1, 2]));
        let r2 = agg.process_file("b", 300, 6, &synth_file(&[100, 200], &[1, 2]));
        assert_eq!(r2.global_bytes, 300);
        assert_eq!(r2.self_bytes, 0);
    }

    #[test]
    fn repeat_within_a_file_counts_as_self_not_global() {
        // chunk "1" appears twice in this file and was also seen globally.
        let mut agg = DedupAggregator::new();
        agg.process_file("a", 100, 6, &synth_file(&[100], &[1]));
        let r2 = agg.process_file("b", 200, 6, &synth_file(&[100, 100], &[1, 1]));
        // first occurrence of "1" in file b is global (seen in file a);
        // the second occurrence, an in-file repeat, is self.
        assert_eq!(r2.global_bytes, 100);
        assert_eq!(r2.self_bytes, 100);
    }

    #[test]
    fn totals_accumulate_across_files() {
        let mut agg = DedupAggregator::new();
        agg.process_file("a", 300, 6, &synth_file(&[100, 200], &[1, 2]));
        agg.process_file("b", 300, 6, &synth_file(&[100, 200], &[1, 2]));
        let totals = agg.totals();
        assert_eq!(totals.total_size, 600);
        assert_eq!(totals.total_chunks, 4);
        assert_eq!(totals.total_global, 300);
        assert_eq!(totals.total_self, 0);
    }
}
