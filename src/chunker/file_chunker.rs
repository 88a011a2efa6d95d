//! C4 — file chunker: streams a file through a fixed read buffer and
//! produces the ordered list of chunk codes for the whole file (spec §4.4).

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use super::{ChunkingError, PackChunking};

/// Default read-block capacity (spec §4.4: "the reference uses 1,000,000
/// bytes"). Must exceed `max_chunk + 47` so at least one boundary can always
/// be found within a single read.
pub const DEFAULT_BLOCK_SIZE: usize = 1_000_000;

pub struct FileChunker {
    cfg: PackChunking,
    block_size: usize,
    /// Whether to flush a final sub-`max_chunk` tail at end of file. The
    /// reference implementation leaves this `false` (spec §9 open question
    /// 1); this project exposes it explicitly.
    emit_tail_at_eof: bool,
}

impl FileChunker {
    /// Construct a file chunker. Panics if `block_size` is too small to
    /// guarantee progress, per spec §4.4's precondition.
    pub fn new(cfg: PackChunking, block_size: usize, emit_tail_at_eof: bool) -> Self {
        assert!(
            block_size > cfg.max_chunk + 47,
            "read buffer ({block_size}) must exceed max_chunk + 47 ({})",
            cfg.max_chunk + 47
        );
        Self {
            cfg,
            block_size,
            emit_tail_at_eof,
        }
    }

    /// Chunk the file at `path`, returning `(file_size, chunk_codes)`.
    pub fn chunk_file(&self, path: &Path) -> Result<(u64, Vec<u64>), ChunkingError> {
        let mut file = File::open(path).map_err(|source| ChunkingError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file_size = file
            .seek(SeekFrom::End(0))
            .map_err(|source| ChunkingError::Io {
                path: path.display().to_string(),
                source,
            })?;
        file.seek(SeekFrom::Start(0))
            .map_err(|source| ChunkingError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let mut buf = vec![0u8; self.block_size];
        let mut offset: u64 = 0;
        let mut codes = Vec::new();

        loop {
            let r = read_fully(&mut file, &mut buf).map_err(|source| ChunkingError::Io {
                path: path.display().to_string(),
                source,
            })?;
            if r == 0 {
                break;
            }

            let (chunks, resume) = self.cfg.chunk(&buf, 0, r, false);
            codes.extend(chunks.into_iter().map(|(_, code)| code));

            let mut next_read_offset = resume as u64;

            if r < self.block_size {
                // End of file reached within this read; optionally flush
                // the remainder (spec §4.4 step 4).
                if self.emit_tail_at_eof {
                    let (tail_chunks, tail_resume) = self.cfg.chunk(&buf, resume, r, true);
                    codes.extend(tail_chunks.into_iter().map(|(_, code)| code));
                    next_read_offset = tail_resume as u64;
                }
                offset += next_read_offset;
                break;
            }

            offset += next_read_offset;
            file.seek(SeekFrom::Start(offset))
                .map_err(|source| ChunkingError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
        }

        Ok((file_size, codes))
    }
}

/// Read until `buf` is full or the source is exhausted, returning the
/// number of bytes actually read. Unlike `Read::read`, a single short read
/// (common with pipes, rare with regular files) does not end the loop early
/// — matching spec §4.4's "actual count `R`" semantics of reading up to `B`
/// bytes per iteration.
fn read_fully(file: &mut File, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match file.read(&mut buf[total..])? {
            0 => break,
            n => total += n,
        }
    }
    Ok(total)
}
