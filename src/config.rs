//! Ambient configuration: the knobs that are genuinely run-wide settings
//! rather than CLI experiment parameters (SPEC_FULL.md §10.3). `mask_bits`
//! itself stays a required positional CLI argument (spec §6); it is not
//! read from here.
//!
//! Modified from the teacher's `config.rs`: same `serde` + `toml` +
//! `once_cell::sync::OnceCell` shape, but a missing `packdedupe.toml` falls
//! back to built-in defaults instead of being a fatal error, since this
//! tool must run with zero setup.

use std::io::Read;

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::chunker::file_chunker::DEFAULT_BLOCK_SIZE;
use crate::chunker::DigestAlgorithm;

fn default_block_size() -> usize {
    DEFAULT_BLOCK_SIZE
}

fn default_min_file_size() -> u64 {
    crate::fsutil::MIN_FILE_SIZE
}

fn default_max_file_size() -> u64 {
    crate::fsutil::MAX_FILE_SIZE
}

fn default_digest() -> String {
    "sha1".to_string()
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_block_size")]
    pub block_size: usize,
    #[serde(default = "default_min_file_size")]
    pub min_file_size: u64,
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    #[serde(default = "default_digest")]
    pub digest: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_size: default_block_size(),
            min_file_size: default_min_file_size(),
            max_file_size: default_max_file_size(),
            digest: default_digest(),
        }
    }
}

impl Config {
    pub fn digest_algorithm(&self) -> DigestAlgorithm {
        self.digest.parse().unwrap_or(DigestAlgorithm::Sha1)
    }
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Load `packdedupe.toml` from the current directory, falling back to
    /// defaults if it is absent or malformed. Logged, not fatal: unlike a
    /// missing `mask_bits`, a missing config file is not a usage error.
    pub fn load() -> &'static Self {
        CONFIG.get_or_init(|| match std::fs::File::open("packdedupe.toml") {
            Ok(mut file) => {
                let mut contents = String::new();
                if file.read_to_string(&mut contents).is_err() {
                    log::warn!("packdedupe.toml could not be read, using defaults");
                    return Config::default();
                }
                toml::from_str(&contents).unwrap_or_else(|err| {
                    log::warn!("packdedupe.toml is malformed ({err}), using defaults");
                    Config::default()
                })
            }
            Err(_) => Config::default(),
        })
    }
}
