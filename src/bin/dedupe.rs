//! Dedup estimator CLI (spec §6): `dedupe <dir> <mask-bits | lo-hi>`.
//!
//! Exit codes follow the spec exactly: `-1` on usage error, `-2` on an
//! empty or unreadable directory, `0` on success.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use packdedupe::chunker::{FileChunker, PackChunking};
use packdedupe::config::Config;
use packdedupe::dedup::DedupAggregator;
use packdedupe::error::ConfigError;
use packdedupe::{fsutil, report};

/// Estimate content-defined dedup savings across a directory of files.
#[derive(Parser, Debug)]
struct Args {
    /// Directory to scan (not recursive).
    dir: PathBuf,

    /// A single mask-bits value in [6, 15], or an inclusive range LO-HI.
    mask_bits: String,

    /// Print up to N overlapping chunk locations after the table (C7).
    #[arg(long)]
    overlaps: Option<usize>,

    /// Also emit a final chunk shorter than max_chunk at end of file.
    #[arg(long)]
    emit_tail: bool,
}

fn parse_mask_bits_range(s: &str) -> Result<(u32, u32), ConfigError> {
    if let Some((lo, hi)) = s.split_once('-') {
        let lo: u32 = lo.parse().map_err(|_| ConfigError::BadMaskBitsArg { arg: s.to_string() })?;
        let hi: u32 = hi.parse().map_err(|_| ConfigError::BadMaskBitsArg { arg: s.to_string() })?;
        Ok((lo, hi))
    } else {
        let v: u32 = s.parse().map_err(|_| ConfigError::BadMaskBitsArg { arg: s.to_string() })?;
        Ok((v, v))
    }
}

fn run_for_mask_bits(
    dir: &std::path::Path,
    mask_bits: u32,
    cfg: &Config,
    overlaps: Option<usize>,
    emit_tail: bool,
) -> eyre::Result<()> {
    let chunking = PackChunking::new(mask_bits, cfg.digest_algorithm());
    if !chunking.is_valid() {
        return Err(eyre::eyre!(ConfigError::MaskBitsOutOfRange {
            got: mask_bits,
            min: packdedupe::chunker::consts::MIN_MASK_BITS,
            max: packdedupe::chunker::consts::MAX_MASK_BITS,
        }));
    }

    let chunker = FileChunker::new(chunking, cfg.block_size, emit_tail);
    let files = fsutil::list_files(dir)?;
    if files.is_empty() {
        eyre::bail!("no files in [{}, {}] bytes under {}", cfg.min_file_size, cfg.max_file_size, dir.display());
    }

    println!("{}", report::preamble(&chunking, cfg.min_file_size, cfg.max_file_size));
    println!("{}", report::header());

    let mut aggregator = DedupAggregator::new();
    let mut index = overlaps.map(|_| packdedupe::index::ChunkIndex::new());

    for file in &files {
        let name = file.path.display().to_string();
        let (size, codes) = match chunker.chunk_file(&file.path) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("skipping {name}: {err}");
                (file.size, Vec::new())
            }
        };

        if let Some(idx) = index.as_mut() {
            if let Some(max_print) = overlaps {
                let found = idx.overlaps(&codes, max_print);
                for (code, offset, locations) in found {
                    println!(
                        "overlap code={code} at {name}:{offset} also seen at:"
                    );
                    for loc in locations {
                        println!("  {}:{}", loc.file, loc.offset);
                    }
                }
            }
            idx.add(&name, &codes);
        }

        let row = aggregator.process_file(&name, size, mask_bits, &codes);
        println!("{}", report::file_row(&row));
    }

    println!("{}", report::total_row(aggregator.totals()));
    Ok(())
}

fn main() -> ExitCode {
    color_eyre::install().ok();
    env_logger::init();

    let args = Args::parse();
    let cfg = Config::load();

    if !args.dir.is_dir() {
        eprintln!("error: {} is not a directory", args.dir.display());
        return ExitCode::from(255); // stands in for exit code -1
    }

    let (lo, hi) = match parse_mask_bits_range(&args.mask_bits) {
        Ok(range) => range,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(255);
        }
    };

    for mask_bits in lo..=hi {
        if let Err(err) = run_for_mask_bits(&args.dir, mask_bits, cfg, args.overlaps, args.emit_tail) {
            eprintln!("error: {err}");
            return ExitCode::from(254); // stands in for exit code -2
        }
    }

    ExitCode::SUCCESS
}
