//! C3 — fingerprint & chunk code.
//!
//! Packs a chunk's truncated cryptographic digest together with its length
//! into a single `u64` "chunk code", the sole representation used for chunk
//! identity throughout the rest of the pipeline (dedup aggregation, the
//! overlap index, and the pack driver's chunk boundaries).

use md5::{Digest as _, Md5};
use sha1::{Digest as _, Sha1};

const LENGTH_BITS: u32 = 19;
const LENGTH_MASK: u64 = (1 << LENGTH_BITS) - 1;
const DIGEST_BITS: u32 = 45;
const DIGEST_MASK: u64 = (1 << DIGEST_BITS) - 1;

/// Maximum chunk length representable in a chunk code.
pub const MAX_REPRESENTABLE_LENGTH: usize = (1 << LENGTH_BITS) - 1;

/// Which cryptographic digest fingerprints chunk bytes.
///
/// A static, per-run configuration choice (spec §4.3): mixing algorithms
/// within one run would silently merge two unrelated dedup namespaces.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DigestAlgorithm {
    Sha1,
    Md5,
}

impl DigestAlgorithm {
    /// Hash `data` and return the low 64 bits of the digest.
    fn digest64(self, data: &[u8]) -> u64 {
        let full = match self {
            DigestAlgorithm::Sha1 => {
                let mut hasher = Sha1::new();
                hasher.update(data);
                let out = hasher.finalize();
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&out[out.len() - 8..]);
                bytes
            }
            DigestAlgorithm::Md5 => {
                let mut hasher = Md5::new();
                hasher.update(data);
                let out = hasher.finalize();
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&out[out.len() - 8..]);
                bytes
            }
        };
        u64::from_be_bytes(full)
    }
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(DigestAlgorithm::Sha1),
            "md5" => Ok(DigestAlgorithm::Md5),
            other => Err(format!("unknown digest algorithm: {other}")),
        }
    }
}

/// Compute the chunk code for `data` under the given digest algorithm.
///
/// Asserts that `data.len()` fits in [`MAX_REPRESENTABLE_LENGTH`] (spec §7.4
/// — this cannot arise under the defined `mask_bits` range, but the bound is
/// still asserted defensively at the one place a chunk's length is packed).
pub fn fingerprint(data: &[u8], algo: DigestAlgorithm) -> u64 {
    assert!(
        data.len() <= MAX_REPRESENTABLE_LENGTH,
        "chunk length {} exceeds the {} bytes representable in a chunk code",
        data.len(),
        MAX_REPRESENTABLE_LENGTH
    );
    let digest = algo.digest64(data);
    pack(digest, data.len())
}

/// Pack a 64-bit digest and a length (`< 2^19`) into a chunk code.
pub fn pack(digest: u64, length: usize) -> u64 {
    (((length as u64) & LENGTH_MASK) << DIGEST_BITS) | (digest & DIGEST_MASK)
}

/// The length field of a chunk code.
pub fn length(code: u64) -> usize {
    ((code >> DIGEST_BITS) & LENGTH_MASK) as usize
}

/// The truncated-digest field of a chunk code.
pub fn digest(code: u64) -> u64 {
    code & DIGEST_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_then_length_round_trips() {
        for n in [0usize, 1, 255, 4096, MAX_REPRESENTABLE_LENGTH] {
            let code = pack(0xDEAD_BEEF, n);
            assert_eq!(length(code), n);
        }
    }

    #[test]
    fn digest_is_masked_to_45_bits() {
        let d = u64::MAX;
        let code = pack(d, 42);
        assert_eq!(digest(code), d & DIGEST_MASK);
    }

    #[test]
    fn repacking_a_length_from_an_existing_code_is_idempotent() {
        let code = pack(0x1234_5678_9ABC, 300);
        let n = length(code);
        assert_eq!(pack(digest(code), n), pack(digest(code), length(code)));
    }

    #[test]
    fn sha1_and_md5_fingerprints_differ_for_same_bytes() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let a = fingerprint(data, DigestAlgorithm::Sha1);
        let b = fingerprint(data, DigestAlgorithm::Md5);
        assert_ne!(digest(a), digest(b));
        assert_eq!(length(a), length(b));
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let data = b"stable input bytes";
        let a = fingerprint(data, DigestAlgorithm::Sha1);
        let b = fingerprint(data, DigestAlgorithm::Sha1);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn fingerprint_panics_on_oversized_chunk() {
        let data = vec![0u8; MAX_REPRESENTABLE_LENGTH + 1];
        fingerprint(&data, DigestAlgorithm::Sha1);
    }
}
