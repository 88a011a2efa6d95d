//! C7 — chunk-location index. Diagnostic only: maps each chunk code to the
//! set of `(file, offset)` where it occurred, for overlap reports (spec
//! §4.7). Holds no references to file contents, just value-type tuples
//! (spec §9 "Cyclic or shared-mutable structures").

use std::collections::HashMap;

use crate::chunker::code;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Location {
    pub file: String,
    pub offset: u64,
}

#[derive(Default)]
pub struct ChunkIndex {
    locations: HashMap<u64, Vec<Location>>,
}

impl ChunkIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every chunk in `codes` as occurring in `file`, starting at
    /// byte 0 and advancing by each chunk's length. Returns the number of
    /// chunk codes that were previously unseen.
    pub fn add(&mut self, file: &str, codes: &[u64]) -> usize {
        let mut cursor: u64 = 0;
        let mut newly_seen = 0;
        for &c in codes {
            let entry = self.locations.entry(c).or_insert_with(|| {
                newly_seen += 1;
                Vec::new()
            });
            entry.push(Location {
                file: file.to_string(),
                offset: cursor,
            });
            cursor += code::length(c) as u64;
        }
        newly_seen
    }

    /// Walk `codes`, printing up to `max_print` codes that already had
    /// recorded locations (i.e. overlaps with previously indexed files),
    /// each with every one of its recorded `(file, offset)` locations.
    pub fn overlaps(&self, codes: &[u64], max_print: usize) -> Vec<(u64, u64, Vec<Location>)> {
        let mut cursor: u64 = 0;
        let mut reported = Vec::new();
        for &c in codes {
            if reported.len() >= max_print {
                break;
            }
            if let Some(locs) = self.locations.get(&c) {
                if !locs.is_empty() {
                    reported.push((c, cursor, locs.clone()));
                }
            }
            cursor += code::length(c) as u64;
        }
        reported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::code::pack;

    #[test]
    fn add_reports_how_many_codes_were_new() {
        let mut idx = ChunkIndex::new();
        let codes = vec![pack(1, 10), pack(2, 20), pack(1, 10)];
        let new_count = idx.add("f1", &codes);
        assert_eq!(new_count, 2);
    }

    #[test]
    fn second_file_reusing_a_code_reports_zero_new_for_it() {
        let mut idx = ChunkIndex::new();
        idx.add("f1", &[pack(1, 10)]);
        let new_count = idx.add("f2", &[pack(1, 10), pack(2, 20)]);
        assert_eq!(new_count, 1);
    }

    #[test]
    fn overlaps_lists_all_recorded_locations_for_a_shared_code() {
        let mut idx = ChunkIndex::new();
        idx.add("f1", &[pack(1, 10)]);
        idx.add("f2", &[pack(1, 10)]);
        let found = idx.overlaps(&[pack(1, 10)], 10);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].2.len(), 2);
    }

    #[test]
    fn overlaps_stops_at_max_print() {
        let mut idx = ChunkIndex::new();
        idx.add("f1", &[pack(1, 10), pack(2, 10), pack(3, 10)]);
        let found = idx.overlaps(&[pack(1, 10), pack(2, 10), pack(3, 10)], 2);
        assert_eq!(found.len(), 2);
    }
}
