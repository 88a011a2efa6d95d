//! Block-aligned compressor CLI (spec §6): `packgz <file-or-dir> <mask-bits>`.
//!
//! Produces one `<input>.pack-<bits>bits.gz` per accepted input file,
//! skipping files already named `.gz`/`.zip`/`.rar`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use packdedupe::chunker::{read_whole_file, PackChunking};
use packdedupe::config::Config;
use packdedupe::error::ConfigError;
use packdedupe::{fsutil, pack};

#[derive(Parser, Debug)]
struct Args {
    /// A single file, or a directory of files, to pack.
    input: PathBuf,
    /// Mask bits in [6, 15].
    mask_bits: u32,
}

fn main() -> ExitCode {
    color_eyre::install().ok();
    env_logger::init();

    let args = Args::parse();
    let cfg = Config::load();
    let chunking = PackChunking::new(args.mask_bits, cfg.digest_algorithm());
    if !chunking.is_valid() {
        eprintln!(
            "error: {}",
            ConfigError::MaskBitsOutOfRange {
                got: args.mask_bits,
                min: packdedupe::chunker::consts::MIN_MASK_BITS,
                max: packdedupe::chunker::consts::MAX_MASK_BITS,
            }
        );
        return ExitCode::from(255);
    }

    let inputs = match fsutil::list_pack_inputs(&args.input) {
        Ok(inputs) => inputs,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(254);
        }
    };

    for path in inputs {
        let data = match read_whole_file(&path) {
            Ok(data) => data,
            Err(err) => {
                log::warn!("skipping {}: {err}", path.display());
                continue;
            }
        };

        match pack::pack(&data, &chunking) {
            Ok((bytes, chunk_count)) => {
                let mut name = path.as_os_str().to_os_string();
                name.push(format!(".pack-{}bits.gz", args.mask_bits));
                let out_path = PathBuf::from(name);
                if let Err(err) = std::fs::write(&out_path, &bytes) {
                    log::warn!("could not write {}: {err}", out_path.display());
                    continue;
                }
                log::info!(
                    "{} -> {} ({} chunks, {} bytes)",
                    path.display(),
                    out_path.display(),
                    chunk_count,
                    bytes.len()
                );
            }
            Err(err) => {
                log::warn!("failed to pack {}: {err}", path.display());
            }
        }
    }

    ExitCode::SUCCESS
}
