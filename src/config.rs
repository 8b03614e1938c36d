use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/navlock/config.toml`.
///
/// Read once when the guard is constructed and never mutated afterwards;
/// the whitelist and category lists keep their configured order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavlockConfig {
    /// Emit per-event diagnostic log lines (DEBUG level).
    #[serde(default = "default_debug")]
    pub debug: bool,
    /// Host substrings exempt from interception. Substring match, not host
    /// equality; see `classify::is_whitelisted`.
    #[serde(default = "default_whitelist")]
    pub external_whitelist: Vec<String>,
    /// Strip leftover URL fragments on category pages once the DOM is ready.
    #[serde(default = "default_clean_hash")]
    pub clean_hash_on_category: bool,
    /// Path prefixes that mark a page as a category page.
    #[serde(default = "default_category_paths")]
    pub category_paths: Vec<String>,
}

fn default_debug() -> bool {
    true
}

fn default_whitelist() -> Vec<String> {
    vec![
        "baidu.com".to_string(),
        "google.com".to_string(),
        "github.com".to_string(),
    ]
}

fn default_clean_hash() -> bool {
    true
}

fn default_category_paths() -> Vec<String> {
    vec![
        "/category".to_string(),
        "/games".to_string(),
        "/list".to_string(),
        "/tag".to_string(),
    ]
}

impl Default for NavlockConfig {
    fn default() -> Self {
        Self {
            debug: default_debug(),
            external_whitelist: default_whitelist(),
            clean_hash_on_category: default_clean_hash(),
            category_paths: default_category_paths(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("navlock")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NavlockConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NavlockConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit path (host wrappers often ship their
/// own config next to the app bundle instead of using XDG dirs).
pub fn load_from_path(path: &Path) -> Result<NavlockConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: NavlockConfig = toml::from_str(&data)?;
    Ok(cfg)
}
