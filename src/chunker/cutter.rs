//! C2 — chunk cutter.
//!
//! Turns an anchor list plus min/max length bounds into a stream of
//! `(start, length)` chunks, per spec §4.2's three-rule loop.

/// One emitted chunk: a half-open `[start, start + length)` byte range.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Chunk {
    pub start: usize,
    pub length: usize,
}

/// Cut `anchors` (already known to lie within `[prev, buffer_end)`, in
/// ascending order) into chunks, starting from `prev`.
///
/// Returns the emitted chunks and the `next_prev` offset at which the
/// caller should resume (the start of whatever was not yet emitted).
pub fn cut(
    anchors: &[usize],
    mut prev: usize,
    buffer_end: usize,
    min_chunk: usize,
    max_chunk: usize,
    emit_tail: bool,
) -> (Vec<Chunk>, usize) {
    let mut chunks = Vec::new();
    let mut anchor_idx = 0;

    loop {
        let next_anchor = anchors.get(anchor_idx).copied();

        match next_anchor {
            Some(anchor) if anchor - prev < min_chunk => {
                // Rule 2: too close, discard and keep looking.
                anchor_idx += 1;
            }
            Some(anchor) if anchor - prev <= max_chunk => {
                // Rule 3: a usable content-defined cut.
                chunks.push(Chunk {
                    start: prev,
                    length: anchor - prev,
                });
                prev = anchor;
                anchor_idx += 1;
            }
            _ => {
                // Rule 1: no anchor in range, or it's farther than max_chunk.
                let cut = (prev + max_chunk).min(buffer_end);
                let len = cut - prev;
                if len < min_chunk {
                    return (chunks, prev);
                } else if len < max_chunk && !emit_tail {
                    return (chunks, prev);
                } else {
                    chunks.push(Chunk { start: prev, length: len });
                    prev = cut;
                    // Loop again: if there was no anchor at all, keep
                    // forcing max_chunk cuts until buffer_end is reached and
                    // the length checks above decide to withhold/terminate.
                    // If an anchor existed but was farther than max_chunk
                    // away, re-examine it against the new `prev`.
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_anchors_forces_max_chunk_cuts() {
        let (chunks, next_prev) = cut(&[], 0, 1000, 64, 256, false);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.length == 256));
        assert_eq!(next_prev, 768);
    }

    #[test]
    fn sub_minimum_tail_is_never_emitted() {
        let (chunks, next_prev) = cut(&[], 0, 30, 64, 256, false);
        assert!(chunks.is_empty());
        assert_eq!(next_prev, 0);
    }

    #[test]
    fn sub_max_tail_withheld_unless_emit_tail() {
        let (chunks, next_prev) = cut(&[], 0, 100, 64, 256, false);
        assert!(chunks.is_empty());
        assert_eq!(next_prev, 0);

        let (chunks, next_prev) = cut(&[], 0, 100, 64, 256, true);
        assert_eq!(chunks, vec![Chunk { start: 0, length: 100 }]);
        assert_eq!(next_prev, 100);
    }

    #[test]
    fn close_anchor_within_min_chunk_is_discarded() {
        // anchor at 10 is within min_chunk(64) of prev(0), so skipped; next
        // anchor at 100 is usable. Buffer ends right at the anchor so there
        // is nothing left to force-cut afterward.
        let (chunks, next_prev) = cut(&[10, 100], 0, 100, 64, 256, false);
        assert_eq!(chunks, vec![Chunk { start: 0, length: 100 }]);
        assert_eq!(next_prev, 100);
    }

    #[test]
    fn anchor_exactly_at_min_chunk_boundary_is_usable() {
        let (chunks, _) = cut(&[64], 0, 64, 64, 256, false);
        assert_eq!(chunks, vec![Chunk { start: 0, length: 64 }]);
    }

    #[test]
    fn anchor_beyond_max_chunk_forces_a_cut_first() {
        // buffer ends shortly after the anchor so behavior stops instead of
        // folding into an equivalent "no anchors" run of forced cuts.
        let (chunks, next_prev) = cut(&[300], 0, 300, 64, 256, false);
        assert_eq!(chunks, vec![Chunk { start: 0, length: 256 }]);
        // The anchor at 300 is now 44 bytes past the new prev (256), inside
        // min_chunk, so it gets discarded; the remaining 44-byte tail is
        // below min_chunk and is withheld.
        assert_eq!(next_prev, 256);
    }

    #[test]
    fn every_emitted_chunk_respects_bounds() {
        let anchors = vec![40, 70, 90, 500, 900];
        let (chunks, _) = cut(&anchors, 0, 1000, 64, 256, true);
        for c in &chunks {
            assert!(c.length >= 64 && c.length <= 256, "chunk {:?} out of bounds", c);
        }
    }
}
