use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix a quoted string must start with to count as a candidate image path.
pub const DEFAULT_PATH_PREFIX: &str = "/images/";

fn default_path_prefix() -> String {
    DEFAULT_PATH_PREFIX.to_string()
}

/// Global configuration loaded from `~/.config/imgmatch/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Source document to extract image paths from (e.g. `src/data/images.ts`).
    /// Overridden by `--source`; one of the two must be set.
    #[serde(default)]
    pub source_document: Option<PathBuf>,
    /// Quoted strings starting with this prefix are extracted. Matched literally.
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            source_document: None,
            path_prefix: default_path_prefix(),
        }
    }
}

impl MatchConfig {
    /// Reject prefixes that cannot produce a sensible extraction.
    pub fn validate(&self) -> Result<()> {
        if self.path_prefix.is_empty() {
            bail!("path_prefix must not be empty");
        }
        if self.path_prefix.contains('"') {
            bail!("path_prefix must not contain a double quote");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgmatch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and validate configuration from an explicit file. The file must exist.
pub fn load_from(path: &Path) -> Result<MatchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: MatchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MatchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MatchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}
