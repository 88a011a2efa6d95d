//! External collaborator: directory listing and file-size filtering (spec
//! §1 "Out of scope" and §6 "File-size filter"). Kept minimal and separate
//! from the core chunking pipeline so C4/C5 never need to know how the
//! corpus of files was discovered.

use std::fs;
use std::path::{Path, PathBuf};

/// Files outside this byte range are skipped entirely (spec §6).
pub const MIN_FILE_SIZE: u64 = 1_000;
pub const MAX_FILE_SIZE: u64 = 4_000_000_000;

/// One file accepted for processing.
pub struct FileEntry {
    pub path: PathBuf,
    pub size: u64,
}

/// List the regular files directly inside `dir`, sorted by full path (spec
/// §4.5 "Ordering guarantee"), filtered to `[MIN_FILE_SIZE, MAX_FILE_SIZE]`.
///
/// Subdirectories are not recursed into; the spec's dedup scenarios (S1-S5)
/// are all expressed over a flat directory of files.
pub fn list_files(dir: &Path) -> std::io::Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(_) => continue,
        };
        if !metadata.is_file() {
            continue;
        }
        let size = metadata.len();
        if size < MIN_FILE_SIZE || size > MAX_FILE_SIZE {
            continue;
        }
        entries.push(FileEntry {
            path: entry.path(),
            size,
        });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

/// Collect the files a `packgz` run should process from a path that may be
/// a single file or a directory, excluding already-compressed archives
/// (spec §6: "skipping inputs ending in `.gz`, `.zip`, `.rar`").
pub fn list_pack_inputs(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let excluded = |p: &Path| {
        matches!(
            p.extension().and_then(|e| e.to_str()),
            Some("gz") | Some("zip") | Some("rar")
        )
    };

    if path.is_file() {
        return Ok(if excluded(path) {
            Vec::new()
        } else {
            vec![path.to_path_buf()]
        });
    }

    let mut out = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let p = entry.path();
        if p.is_file() && !excluded(&p) {
            out.push(p);
        }
    }
    out.sort();
    Ok(out)
}
