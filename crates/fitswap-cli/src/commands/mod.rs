pub mod catalog;
pub mod config;
pub mod simulate;

use std::path::Path;

use anyhow::{Context, Result};
use fitswap_core::config::StoreConfig;

/// Load the store config from `path`, or the built-in defaults.
pub(crate) fn load_store_config(path: Option<&Path>) -> Result<StoreConfig> {
    match path {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("Failed to read store config {}", path.display())),
        None => Ok(StoreConfig::default()),
    }
}
