pub mod bench;
pub mod config;
pub mod info;
pub mod regions;

use std::path::Path;

use anyhow::{Context, Result};
use runblob_core::pipeline::BlobConfig;

/// Load a TOML config if given, otherwise the defaults.
pub fn load_config(path: Option<&Path>) -> Result<BlobConfig> {
    let Some(path) = path else {
        return Ok(BlobConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid blob config")
}
