use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::analysis::matcher::MatchPolicy;
use crate::render::DEFAULT_CONDENSED_REFERENCE_LIMIT;
use crate::store::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => bail!("unknown storage backend '{other}' (expected file or memory)"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub data_dir: PathBuf,
    pub storage_backend: StorageBackend,
    pub storage_key: String,
    pub match_policy: MatchPolicy,
    pub condensed_reference_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            data_dir: PathBuf::from(env_or("DATA_DIR", "./data")),
            storage_backend: env_or("STORAGE_BACKEND", "file")
                .parse::<StorageBackend>()
                .context("STORAGE_BACKEND must be 'file' or 'memory'")?,
            storage_key: env_or("STORAGE_KEY", DEFAULT_STORAGE_KEY),
            match_policy: env_or("KEYWORD_MATCH_POLICY", "substring")
                .parse::<MatchPolicy>()
                .map_err(anyhow::Error::msg)
                .context("KEYWORD_MATCH_POLICY must be 'substring' or 'word_boundary'")?,
            condensed_reference_limit: env_or(
                "CONDENSED_REFERENCE_LIMIT",
                &DEFAULT_CONDENSED_REFERENCE_LIMIT.to_string(),
            )
            .parse::<usize>()
            .context("CONDENSED_REFERENCE_LIMIT must be a non-negative integer")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
