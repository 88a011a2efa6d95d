//! The authoritative rolling-hash mask table.
//!
//! Modified from the gear-hash mask table in
//! `chunker/fast_cdc/consts.rs` (FastCDC 2020), but the values themselves are
//! not derived from that algorithm: they are the pre-selected per-`mask_bits`
//! constants this chunker's shift-XOR rolling hash requires (see
//! `chunker::rolling`). `mask_bits` outside `[MIN_MASK_BITS, MAX_MASK_BITS]`
//! has no entry and is a configuration error.

/// Smallest accepted `mask_bits`.
pub const MIN_MASK_BITS: u32 = 6;
/// Largest accepted `mask_bits`.
pub const MAX_MASK_BITS: u32 = 15;

/// `mask_value` indexed by `mask_bits - MIN_MASK_BITS`.
const MASK_TABLE: [u64; (MAX_MASK_BITS - MIN_MASK_BITS + 1) as usize] = [
    0x0000_0010_1048_2080, // 6
    0x0000_0810_1048_2080, // 7
    0x0000_8210_1048_2080, // 8
    0x0000_8211_1048_2080, // 9
    0x0000_8231_1048_2080, // 10
    0x0000_8A31_1048_2080, // 11
    0x0000_8A31_1048_3080, // 12
    0x0000_8A31_1058_3080, // 13
    0x0000_8A31_1058_3280, // 14
    0x0000_8A31_1458_3280, // 15
];

/// Look up the mask value for `mask_bits`, or `None` if it is out of range.
///
/// A `None` here means the chunker must behave as permanently disabled: it
/// emits no anchors rather than guessing at a mask (spec §6, "Mask table").
pub fn mask_value(mask_bits: u32) -> Option<u64> {
    if (MIN_MASK_BITS..=MAX_MASK_BITS).contains(&mask_bits) {
        Some(MASK_TABLE[(mask_bits - MIN_MASK_BITS) as usize])
    } else {
        None
    }
}
