//! Config file location and loading.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use resonance_core::ResonanceConfig;
use std::path::{Path, PathBuf};

/// Default config file path in the platform config directory.
pub fn default_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "resonance", "resonance")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(dirs.config_dir().join("config.toml"))
}

/// Resolve the config path: explicit path if given, platform default otherwise.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit.map_or_else(default_path, |p| Ok(p.to_path_buf()))
}

/// Load configuration, falling back to defaults when the file does not exist.
pub fn load(path: &Path) -> Result<ResonanceConfig> {
    ResonanceConfig::load(path)
        .with_context(|| format!("failed to load config from {}", path.display()))
}

/// Write configuration to `path`, creating parent directories.
pub fn save(config: &ResonanceConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = config.to_toml()?;
    std::fs::write(path, content)?;

    Ok(())
}
