//! Settings file locations
//!
//! Grid settings live in the per-user config directory, under `gridline/`.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// `<config dir>/gridline`, e.g. `~/.config/gridline` on Linux
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("gridline"))
}

/// The grid settings file read by [`crate::GridSettings::load`]
pub fn settings_file() -> Result<PathBuf> {
    config_dir().map(|p| p.join("grid.toml"))
}
