//! Top-level error kinds (spec §7). Configuration errors are the only kind
//! that terminates a run; I/O and precondition errors are absorbed locally
//! (see `chunker::ChunkingError` and `dedup`/`fsutil`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("mask_bits must be in [{min}, {max}], got {got}")]
    MaskBitsOutOfRange { got: u32, min: u32, max: u32 },

    #[error("{path} is not a directory")]
    NotADirectory { path: String },

    #[error("invalid mask-bits argument {arg:?}: expected N or LO-HI")]
    BadMaskBitsArg { arg: String },
}
